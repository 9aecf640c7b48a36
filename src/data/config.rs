use std::collections::{BTreeMap, BTreeSet};

use super::columns::{ColumnSpec, COLUMNS};
use super::filter::{column_filters, ColumnFilterConfig, FilterState};
use super::header_map::{HEADER_TABLE, HEADER_TABLE_VERSION};
use super::model::Field;
use super::vocabulary::vocabulary;

/// Inconsistency in the static catalog or in a filter snapshot.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown field id `{0}`")]
    UnknownField(String),

    #[error("header `{header}` maps to both {first} and {second}")]
    ConflictingHeader {
        header: String,
        first: Field,
        second: Field,
    },

    #[error("filter on {0} has no vocabulary")]
    NotFilterable(Field),

    #[error("more than one filter is configured for {0}")]
    DuplicateFilter(Field),

    #[error("vocabulary of {field} lists `{value}` more than once")]
    DuplicateOption { field: Field, value: String },

    #[error("filter on {field} offers `{value}`, which is not in its vocabulary")]
    OptionOutsideVocabulary { field: Field, value: String },

    #[error("column registry lists {0} more than once")]
    DuplicateColumn(Field),

    #[error("column registry has no entry for {0}")]
    MissingColumn(Field),

    #[error("no filter is configured for {0}")]
    UnconfiguredFilter(Field),

    #[error("filter on {field} selects `{value}`, which is not one of its options")]
    UnknownSelection { field: Field, value: String },
}

/// Run every static consistency check. Call once at startup.
pub fn validate_catalog() -> Result<(), ConfigError> {
    validate_header_table(HEADER_TABLE)?;
    validate_filter_configs(&column_filters())?;
    validate_columns(COLUMNS)?;
    log::debug!("Catalog validated (header table v{HEADER_TABLE_VERSION})");
    Ok(())
}

/// The same header must never point at two different fields.
pub fn validate_header_table(table: &[(&str, Field)]) -> Result<(), ConfigError> {
    let mut seen: BTreeMap<&str, Field> = BTreeMap::new();
    for &(header, field) in table {
        match seen.get(header) {
            Some(&first) if first != field => {
                return Err(ConfigError::ConflictingHeader {
                    header: header.to_string(),
                    first,
                    second: field,
                });
            }
            Some(_) => {}
            None => {
                seen.insert(header, field);
            }
        }
    }
    Ok(())
}

pub fn validate_filter_configs(configs: &[ColumnFilterConfig]) -> Result<(), ConfigError> {
    let mut configured = BTreeSet::new();
    for config in configs {
        let field = config.field;
        let vocab = vocabulary(field).ok_or(ConfigError::NotFilterable(field))?;
        if !configured.insert(field) {
            return Err(ConfigError::DuplicateFilter(field));
        }

        let mut values = BTreeSet::new();
        for option in &config.options {
            if !values.insert(option.value.as_str()) {
                return Err(ConfigError::DuplicateOption {
                    field,
                    value: option.value.clone(),
                });
            }
            if !vocab.contains(&option.value.as_str()) {
                return Err(ConfigError::OptionOutsideVocabulary {
                    field,
                    value: option.value.clone(),
                });
            }
        }
    }
    Ok(())
}

/// Every field appears exactly once in the registry.
pub fn validate_columns(columns: &[ColumnSpec]) -> Result<(), ConfigError> {
    let mut seen = BTreeSet::new();
    for spec in columns {
        if !seen.insert(spec.field) {
            return Err(ConfigError::DuplicateColumn(spec.field));
        }
    }
    match Field::ALL.iter().find(|f| !seen.contains(*f)) {
        Some(&missing) => Err(ConfigError::MissingColumn(missing)),
        None => Ok(()),
    }
}

/// Check a snapshot received from the UI against the filter catalog.
pub fn validate_filter_state(
    filters: &FilterState,
    configs: &[ColumnFilterConfig],
) -> Result<(), ConfigError> {
    for (&field, state) in filters {
        let config = configs
            .iter()
            .find(|c| c.field == field)
            .ok_or(ConfigError::UnconfiguredFilter(field))?;
        if let Some(value) = state
            .selected
            .iter()
            .find(|v| !config.options.iter().any(|o| &o.value == *v))
        {
            return Err(ConfigError::UnknownSelection {
                field,
                value: value.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::ActiveFilterState;
    use crate::data::vocabulary::FilterOption;

    #[test]
    fn shipped_catalog_is_consistent() {
        assert_eq!(validate_catalog(), Ok(()));
    }

    #[test]
    fn conflicting_header_is_reported() {
        let table = [("Имя", Field::Name), ("Имя", Field::CharacterName)];
        assert_eq!(
            validate_header_table(&table),
            Err(ConfigError::ConflictingHeader {
                header: "Имя".into(),
                first: Field::Name,
                second: Field::CharacterName,
            })
        );
        // Repeating an identical entry is harmless.
        assert_eq!(validate_header_table(&[("Имя", Field::Name), ("Имя", Field::Name)]), Ok(()));
    }

    #[test]
    fn filter_on_free_text_field_is_rejected() {
        let mut configs = column_filters();
        configs[0].field = Field::Name;
        assert_eq!(
            validate_filter_configs(&configs),
            Err(ConfigError::NotFilterable(Field::Name))
        );
    }

    #[test]
    fn duplicate_filter_and_options_are_rejected() {
        let mut configs = column_filters();
        configs.push(configs[0].clone());
        assert_eq!(
            validate_filter_configs(&configs),
            Err(ConfigError::DuplicateFilter(Field::PreferredCharacterGender))
        );

        let mut configs = column_filters();
        let repeated = configs[0].options[0].clone();
        configs[0].options.push(repeated);
        assert!(matches!(
            validate_filter_configs(&configs),
            Err(ConfigError::DuplicateOption { field: Field::PreferredCharacterGender, .. })
        ));
    }

    #[test]
    fn option_outside_vocabulary_is_rejected() {
        let mut configs = column_filters();
        configs[0].options.push(FilterOption {
            value: "дроид".into(),
            label: "Дроид".into(),
        });
        assert_eq!(
            validate_filter_configs(&configs),
            Err(ConfigError::OptionOutsideVocabulary {
                field: Field::PreferredCharacterGender,
                value: "дроид".into(),
            })
        );
    }

    #[test]
    fn registry_gaps_are_reported() {
        assert_eq!(
            validate_columns(&COLUMNS[1..]),
            Err(ConfigError::MissingColumn(Field::Name))
        );
        let doubled: Vec<ColumnSpec> = COLUMNS.iter().chain(&COLUMNS[..1]).copied().collect();
        assert_eq!(
            validate_columns(&doubled),
            Err(ConfigError::DuplicateColumn(Field::Name))
        );
    }

    #[test]
    fn snapshot_validation() {
        let configs = column_filters();
        let mut filters = FilterState::new();
        let mut triggers = ActiveFilterState::default();
        triggers.selected.insert("секс".into());
        filters.insert(Field::Triggers, triggers);
        assert_eq!(validate_filter_state(&filters, &configs), Ok(()));

        filters.insert(Field::Bus, ActiveFilterState::default());
        assert_eq!(
            validate_filter_state(&filters, &configs),
            Err(ConfigError::UnconfiguredFilter(Field::Bus))
        );

        filters.remove(&Field::Bus);
        filters
            .get_mut(&Field::Triggers)
            .unwrap()
            .selected
            .insert("скука".into());
        assert_eq!(
            validate_filter_state(&filters, &configs),
            Err(ConfigError::UnknownSelection {
                field: Field::Triggers,
                value: "скука".into(),
            })
        );
    }
}
