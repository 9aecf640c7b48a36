use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::config::ConfigError;

// ---------------------------------------------------------------------------
// CellValue – a single cell of a raw export row
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value as produced by the sheet reader.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    /// Date or timestamp kept as the exporter wrote it.
    Date(String),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) | CellValue::Date(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => Ok(()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl CellValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) | CellValue::Date(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

/// One data row of an export, aligned positionally with the header row.
pub type RawRow = Vec<CellValue>;

// ---------------------------------------------------------------------------
// Field – the closed set of canonical record fields
// ---------------------------------------------------------------------------

/// How a field's values are interpreted downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    /// Subset of a vocabulary, joined by [`super::vocabulary::DELIMITER`].
    MultiValue,
    /// Checkbox answer, rendered as `да` / `нет`. Covers every confirmation
    /// question, not only the leadership one the web export converted.
    Confirmation,
    /// Opaque date/timestamp.
    Timestamp,
}

/// Canonical field of a claim record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Link,
    Status,
    RejectionReason,
    UpdatedAt,
    CreatedAt,
    TotalContribution,
    RemainingAmount,
    PaidAmount,
    LastModifiedBy,
    Responsible,
    Player,
    PlayerSurname,
    PlayerFatherName,
    PlayerBornName,
    PlayerEmail,
    PlayerVk,
    PlayerSkype,
    PlayerTelegram,
    PlayerLivejournal,
    PlayerPhoneNumber,
    CharacterName,
    CharacterDescription,
    Confirmations,
    FullNameConfirmed,
    AgeConfirmed,
    HealthConfirmed,
    ContactsConfirmed,
    RoleContactsConfirmed,
    PreferredCharacterGender,
    Anthropomorphism,
    PreferredCharacterRace,
    PreferredCharacterClass,
    PlayPreferences,
    PreferredPlotTypes,
    Triggers,
    ReadyToLead,
    PlotIdeas,
    Bus,
    Accommodation,
    AccommodationDetails,
}

impl Field {
    pub const ALL: [Field; 41] = [
        Field::Name,
        Field::Link,
        Field::Status,
        Field::RejectionReason,
        Field::UpdatedAt,
        Field::CreatedAt,
        Field::TotalContribution,
        Field::RemainingAmount,
        Field::PaidAmount,
        Field::LastModifiedBy,
        Field::Responsible,
        Field::Player,
        Field::PlayerSurname,
        Field::PlayerFatherName,
        Field::PlayerBornName,
        Field::PlayerEmail,
        Field::PlayerVk,
        Field::PlayerSkype,
        Field::PlayerTelegram,
        Field::PlayerLivejournal,
        Field::PlayerPhoneNumber,
        Field::CharacterName,
        Field::CharacterDescription,
        Field::Confirmations,
        Field::FullNameConfirmed,
        Field::AgeConfirmed,
        Field::HealthConfirmed,
        Field::ContactsConfirmed,
        Field::RoleContactsConfirmed,
        Field::PreferredCharacterGender,
        Field::Anthropomorphism,
        Field::PreferredCharacterRace,
        Field::PreferredCharacterClass,
        Field::PlayPreferences,
        Field::PreferredPlotTypes,
        Field::Triggers,
        Field::ReadyToLead,
        Field::PlotIdeas,
        Field::Bus,
        Field::Accommodation,
        Field::AccommodationDetails,
    ];

    /// Stable camelCase identifier, as used in JSON and by the UI.
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Link => "link",
            Field::Status => "status",
            Field::RejectionReason => "rejectionReason",
            Field::UpdatedAt => "updatedAt",
            Field::CreatedAt => "createdAt",
            Field::TotalContribution => "totalContribution",
            Field::RemainingAmount => "remainingAmount",
            Field::PaidAmount => "paidAmount",
            Field::LastModifiedBy => "lastModifiedBy",
            Field::Responsible => "responsible",
            Field::Player => "player",
            Field::PlayerSurname => "playerSurname",
            Field::PlayerFatherName => "playerFatherName",
            Field::PlayerBornName => "playerBornName",
            Field::PlayerEmail => "playerEmail",
            Field::PlayerVk => "playerVk",
            Field::PlayerSkype => "playerSkype",
            Field::PlayerTelegram => "playerTelegram",
            Field::PlayerLivejournal => "playerLivejournal",
            Field::PlayerPhoneNumber => "playerPhoneNumber",
            Field::CharacterName => "characterName",
            Field::CharacterDescription => "characterDescription",
            Field::Confirmations => "confirmations",
            Field::FullNameConfirmed => "fullNameConfirmed",
            Field::AgeConfirmed => "ageConfirmed",
            Field::HealthConfirmed => "healthConfirmed",
            Field::ContactsConfirmed => "contactsConfirmed",
            Field::RoleContactsConfirmed => "roleContactsConfirmed",
            Field::PreferredCharacterGender => "preferredCharacterGender",
            Field::Anthropomorphism => "anthropomorphism",
            Field::PreferredCharacterRace => "preferredCharacterRace",
            Field::PreferredCharacterClass => "preferredCharacterClass",
            Field::PlayPreferences => "playPreferences",
            Field::PreferredPlotTypes => "preferredPlotTypes",
            Field::Triggers => "triggers",
            Field::ReadyToLead => "readyToLead",
            Field::PlotIdeas => "plotIdeas",
            Field::Bus => "bus",
            Field::Accommodation => "accommodation",
            Field::AccommodationDetails => "accommodationDetails",
        }
    }

    pub fn kind(self) -> FieldKind {
        use Field::*;
        match self {
            UpdatedAt | CreatedAt => FieldKind::Timestamp,
            TotalContribution | RemainingAmount | PaidAmount => FieldKind::Number,
            FullNameConfirmed | AgeConfirmed | HealthConfirmed | ContactsConfirmed
            | RoleContactsConfirmed | ReadyToLead => FieldKind::Confirmation,
            PreferredCharacterRace | PreferredCharacterClass | PlayPreferences
            | PreferredPlotTypes | Triggers => FieldKind::MultiValue,
            _ => FieldKind::Text,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Field {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .iter()
            .copied()
            .find(|field| field.id() == s)
            .ok_or_else(|| ConfigError::UnknownField(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// CanonicalRecord – one normalized claim
// ---------------------------------------------------------------------------

/// A normalized claim: only fields that were present in the source row.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CanonicalRecord {
    fields: BTreeMap<Field, CellValue>,
}

impl CanonicalRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> Option<&CellValue> {
        self.fields.get(&field)
    }

    /// Text form of a field, if present.
    pub fn text(&self, field: Field) -> Option<String> {
        self.get(field).map(|v| v.to_string())
    }

    /// Set a field. Returns the previous value, if any.
    pub fn set(&mut self, field: Field, value: CellValue) -> Option<CellValue> {
        self.fields.insert(field, value)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.fields.contains_key(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &CellValue)> {
        self.fields.iter().map(|(f, v)| (*f, v))
    }

    /// Number of populated fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no field was populated.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_ids_round_trip_through_from_str() {
        for field in Field::ALL {
            assert_eq!(field.id().parse::<Field>().unwrap(), field);
        }
        assert_eq!(
            "nickname".parse::<Field>(),
            Err(ConfigError::UnknownField("nickname".into()))
        );
    }

    #[test]
    fn serde_ids_match_field_ids() {
        for field in Field::ALL {
            let json = serde_json::to_string(&field).unwrap();
            assert_eq!(json, format!("\"{}\"", field.id()));
        }
    }

    #[test]
    fn record_serializes_as_object_keyed_by_field_id() {
        let mut record = CanonicalRecord::new();
        record.set(Field::Name, "Игорь".into());
        record.set(Field::TotalContribution, CellValue::Integer(3500));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "Игорь", "totalContribution": 3500 })
        );
    }

    #[test]
    fn display_of_null_is_empty() {
        assert_eq!(CellValue::Null.to_string(), "");
        assert_eq!(CellValue::Float(1.5).to_string(), "1.5");
    }
}
