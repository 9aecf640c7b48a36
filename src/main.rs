use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use larp_claims::data::config::{validate_catalog, validate_filter_state};
use larp_claims::data::filter::FilterState;
use larp_claims::data::loader::load_records;
use larp_claims::state::ClaimsState;

/// Print the claims of an export that pass a filter snapshot, as JSON.
///
/// Usage: `larp-claims <export.csv|export.json> [filters.json]`
fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args_os().skip(1);
    let Some(export) = args.next().map(PathBuf::from) else {
        bail!("usage: larp-claims <export.csv|export.json> [filters.json]");
    };
    let snapshot = args.next().map(PathBuf::from);

    validate_catalog().context("static filter catalog is inconsistent")?;

    let mut state = ClaimsState::default();
    if let Some(path) = snapshot {
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("reading filter snapshot {}", path.display()))?;
        let filters: FilterState =
            serde_json::from_str(&text).context("parsing filter snapshot")?;
        validate_filter_state(&filters, &state.configs).context("invalid filter snapshot")?;
        state.apply_snapshot(filters);
    }

    let records = load_records(&export)
        .with_context(|| format!("loading {}", export.display()))?;
    state.set_records(records);
    log::info!(
        "{} claims loaded, {} visible",
        state.records().len(),
        state.visible_indices.len()
    );

    let visible: Vec<_> = state.visible_records().collect();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &visible).context("writing records")?;
    writeln!(out)?;
    Ok(())
}
