use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::model::{CanonicalRecord, Field, FieldKind};
use super::vocabulary::{options_for, split_multi_value, vocabulary, FilterOption};

// ---------------------------------------------------------------------------
// Filter modes and per-column configuration
// ---------------------------------------------------------------------------

/// Whether a filter keeps matching records or rejects them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    #[default]
    Equals,
    NotEquals,
}

impl Polarity {
    pub fn toggled(self) -> Self {
        match self {
            Polarity::Equals => Polarity::NotEquals,
            Polarity::NotEquals => Polarity::Equals,
        }
    }

    fn apply(self, matched: bool) -> bool {
        match self {
            Polarity::Equals => matched,
            Polarity::NotEquals => !matched,
        }
    }
}

/// How the selected values of one filter are combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BooleanMode {
    /// Every selected value must be present.
    And,
    /// At least one selected value must be present.
    #[default]
    Or,
}

impl BooleanMode {
    pub fn toggled(self) -> Self {
        match self {
            BooleanMode::And => BooleanMode::Or,
            BooleanMode::Or => BooleanMode::And,
        }
    }
}

/// What the user is allowed to change on a column's filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub polarity_toggle: bool,
    pub mode_toggle: bool,
}

impl Capabilities {
    pub const ALL: Capabilities = Capabilities {
        polarity_toggle: true,
        mode_toggle: true,
    };
}

/// Static declaration of one filterable column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnFilterConfig {
    pub field: Field,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub options: Vec<FilterOption>,
    pub capabilities: Capabilities,
    pub default_polarity: Polarity,
    pub default_mode: BooleanMode,
}

impl ColumnFilterConfig {
    fn new(field: Field, label: &'static str, placeholder: &'static str) -> Self {
        Self {
            field,
            label,
            placeholder,
            options: options_for(field),
            capabilities: Capabilities::ALL,
            default_polarity: Polarity::Equals,
            default_mode: BooleanMode::Or,
        }
    }

    fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.default_polarity = polarity;
        self
    }

    /// Fresh, inert state carrying this column's defaults.
    pub fn initial_state(&self) -> ActiveFilterState {
        ActiveFilterState::new(self.default_polarity, self.default_mode)
    }
}

/// The filter dropdowns of the claims table, in display order.
pub fn column_filters() -> Vec<ColumnFilterConfig> {
    vec![
        ColumnFilterConfig::new(Field::PreferredCharacterGender, "Пол", "Выберите пол..."),
        ColumnFilterConfig::new(
            Field::Anthropomorphism,
            "Антропоморфность",
            "Выберите антропоморфность...",
        ),
        ColumnFilterConfig::new(Field::PreferredCharacterRace, "Раса", "Выберите расу..."),
        ColumnFilterConfig::new(Field::PreferredCharacterClass, "Класс", "Выберите класс..."),
        ColumnFilterConfig::new(
            Field::PlayPreferences,
            "Хочу играть",
            "Выберите предпочтения...",
        ),
        ColumnFilterConfig::new(Field::PreferredPlotTypes, "Завязки", "Выберите завязки..."),
        ColumnFilterConfig::new(Field::Triggers, "Триггеры", "Выберите триггеры...")
            .with_polarity(Polarity::NotEquals),
        ColumnFilterConfig::new(Field::ReadyToLead, "Лидер", "Выберите лидера..."),
    ]
}

// ---------------------------------------------------------------------------
// Active filter state
// ---------------------------------------------------------------------------

/// Current selection of one column's filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ActiveFilterState {
    pub selected: BTreeSet<String>,
    pub polarity: Polarity,
    pub mode: BooleanMode,
}

impl ActiveFilterState {
    pub fn new(polarity: Polarity, mode: BooleanMode) -> Self {
        Self {
            selected: BTreeSet::new(),
            polarity,
            mode,
        }
    }

    /// An empty selection does not constrain anything.
    pub fn is_inert(&self) -> bool {
        self.selected.is_empty()
    }
}

/// Snapshot of every column's filter, keyed by field.
pub type FilterState = BTreeMap<Field, ActiveFilterState>;

// ---------------------------------------------------------------------------
// Predicate evaluation
// ---------------------------------------------------------------------------

/// Atomic values of `field` in `record`, as compared against a selection.
pub fn token_set(record: &CanonicalRecord, field: Field) -> BTreeSet<String> {
    let Some(value) = record.get(field) else {
        return BTreeSet::new();
    };
    let text = value.to_string();
    match field.kind() {
        FieldKind::MultiValue => {
            let vocab = vocabulary(field).unwrap_or_default();
            split_multi_value(&text, vocab).into_iter().collect()
        }
        _ => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                BTreeSet::new()
            } else {
                BTreeSet::from([trimmed.to_string()])
            }
        }
    }
}

/// Evaluate a single column's filter against a record.
pub fn filter_passes(record: &CanonicalRecord, field: Field, filter: &ActiveFilterState) -> bool {
    if filter.is_inert() {
        return true;
    }
    let tokens = token_set(record, field);
    let matched = match filter.mode {
        BooleanMode::And => filter.selected.iter().all(|v| tokens.contains(v)),
        BooleanMode::Or => filter.selected.iter().any(|v| tokens.contains(v)),
    };
    filter.polarity.apply(matched)
}

/// A record is visible when every column's filter passes.
pub fn record_visible(record: &CanonicalRecord, filters: &FilterState) -> bool {
    filters
        .iter()
        .all(|(field, filter)| filter_passes(record, *field, filter))
}

/// Return indices of records that pass all active filters, in input order.
pub fn filtered_indices(records: &[CanonicalRecord], filters: &FilterState) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| record_visible(record, filters))
        .map(|(i, _)| i)
        .collect()
}
