use std::collections::BTreeSet;

use super::model::Field;

// ---------------------------------------------------------------------------
// Header table
// ---------------------------------------------------------------------------

/// Bumped whenever an entry is added, removed or re-pointed.
pub const HEADER_TABLE_VERSION: u32 = 2;

/// Export header → canonical field. Several headers may point at the same
/// field; each export revision uses only one of them.
pub const HEADER_TABLE: &[(&str, Field)] = &[
    // Claim
    ("Имя", Field::Name),
    ("Ссылка", Field::Link),
    ("Статус", Field::Status),
    ("Причина отказа", Field::RejectionReason),
    ("Обновлена", Field::UpdatedAt),
    ("Создана", Field::CreatedAt),
    ("Итого взнос", Field::TotalContribution),
    ("Осталось", Field::RemainingAmount),
    ("Уплачено", Field::PaidAmount),
    ("LastModifiedBy.DisplayName", Field::LastModifiedBy),
    ("LastModifiedBy", Field::LastModifiedBy),
    ("Ответственный.DisplayName", Field::Responsible),
    ("Ответственный", Field::Responsible),
    // Player, `FullPlayer.*` revision
    ("FullPlayer", Field::Player),
    ("FullPlayer.SurName", Field::PlayerSurname),
    ("FullPlayer.FatherName", Field::PlayerFatherName),
    ("FullPlayer.BornName", Field::PlayerBornName),
    ("FullPlayer.Email", Field::PlayerEmail),
    ("ВК", Field::PlayerVk),
    ("FullPlayer.Extra.Vk", Field::PlayerVk),
    ("FullPlayer.Extra.Skype", Field::PlayerSkype),
    ("Телеграм", Field::PlayerTelegram),
    ("FullPlayer.Extra.Telegram", Field::PlayerTelegram),
    ("FullPlayer.Extra.Livejournal", Field::PlayerLivejournal),
    ("FullPlayer.Extra.PhoneNumber", Field::PlayerPhoneNumber),
    // Player, localized `Игрок.*` revision
    ("Игрок", Field::Player),
    ("Игрок.SurName", Field::PlayerSurname),
    ("Игрок.FatherName", Field::PlayerFatherName),
    ("Игрок.BornName", Field::PlayerBornName),
    ("Игрок.Email", Field::PlayerEmail),
    ("Игрок.Extra.Vk", Field::PlayerVk),
    ("Игрок.Extra.Skype", Field::PlayerSkype),
    ("Игрок.Extra.Telegram", Field::PlayerTelegram),
    ("Игрок.Extra.Livejournal", Field::PlayerLivejournal),
    ("Игрок.Extra.PhoneNumber", Field::PlayerPhoneNumber),
    // Character
    ("Имя персонажа", Field::CharacterName),
    ("Описание персонажа", Field::CharacterDescription),
    // Confirmations
    ("Я подтверждаю что...", Field::Confirmations),
    ("Фамилия, имя и отчество", Field::FullNameConfirmed),
    (
        "Я совершеннолетний или я еду с родителями / у меня есть письменное разрешение от родителей",
        Field::AgeConfirmed,
    ),
    (
        "Я осознаю свои медицинские ограничения и сам забочусь о сохранении своего здоровья во время игры",
        Field::HealthConfirmed,
    ),
    (
        "Актуальный контакт в telegram и профиль ВКонтакте для мастеров",
        Field::ContactsConfirmed,
    ),
    (
        "Контакты для связи со мной в описании роли",
        Field::RoleContactsConfirmed,
    ),
    // Questionnaire
    ("Предпочтительный пол персонажа", Field::PreferredCharacterGender),
    ("Антропоморфность", Field::Anthropomorphism),
    ("Предпочтительная раса персонажа", Field::PreferredCharacterRace),
    ("Предпочтительный класс персонажа", Field::PreferredCharacterClass),
    ("Я хочу играть", Field::PlayPreferences),
    ("Предпочитаемые типы завязок", Field::PreferredPlotTypes),
    ("С чем я не хочу сталкиваться (триггеры)", Field::Triggers),
    ("Я готов быть лидером", Field::ReadyToLead),
    (
        "У меня есть идеи сюжета/пожелания/мы о чем-то уже договаривались",
        Field::PlotIdeas,
    ),
    // Logistics
    ("Автобус", Field::Bus),
    ("Место проживания", Field::Accommodation),
    ("Кто живет", Field::AccommodationDetails),
];

/// Exact-match lookup of a single header.
pub fn lookup(header: &str) -> Option<Field> {
    HEADER_TABLE
        .iter()
        .find(|(h, _)| *h == header)
        .map(|(_, field)| *field)
}

// ---------------------------------------------------------------------------
// HeaderMapping – column index → field
// ---------------------------------------------------------------------------

/// Resolved header row: for each column, the field it populates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMapping {
    columns: Vec<Option<Field>>,
}

impl HeaderMapping {
    /// Field populated by column `index`; `None` when unmapped or out of range.
    pub fn field_at(&self, index: usize) -> Option<Field> {
        self.columns.get(index).copied().flatten()
    }

    /// `(column index, field)` for every mapped column, in column order.
    pub fn mapped(&self) -> impl Iterator<Item = (usize, Field)> + '_ {
        self.columns
            .iter()
            .enumerate()
            .filter_map(|(i, f)| f.map(|f| (i, f)))
    }

    /// Number of columns in the header row.
    pub fn width(&self) -> usize {
        self.columns.len()
    }
}

/// Resolve a header row against [`HEADER_TABLE`].
///
/// Unknown headers are left unmapped. When several columns resolve to the
/// same field (a repeated header, or aliases from two revisions) the first
/// column keeps the field and the later ones are unmapped.
pub fn map_headers<S: AsRef<str>>(headers: &[S]) -> HeaderMapping {
    let mut claimed = BTreeSet::new();
    let columns = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            let header = header.as_ref();
            let Some(field) = lookup(header) else {
                if !header.is_empty() {
                    log::debug!("Ignoring unknown header {header:?} at column {index}");
                }
                return None;
            };
            if !claimed.insert(field) {
                log::warn!(
                    "Header {header:?} at column {index} maps to already claimed field {field}; ignoring"
                );
                return None;
            }
            Some(field)
        })
        .collect();
    HeaderMapping { columns }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_headers_map_and_unknown_stay_unmapped() {
        let mapping = map_headers(&["Имя", "Комментарий мастера", "Я готов быть лидером"]);
        assert_eq!(mapping.field_at(0), Some(Field::Name));
        assert_eq!(mapping.field_at(1), None);
        assert_eq!(mapping.field_at(2), Some(Field::ReadyToLead));
        assert_eq!(mapping.field_at(3), None);
        assert_eq!(mapping.width(), 3);
    }

    #[test]
    fn lookup_is_exact() {
        assert_eq!(lookup("Имя"), Some(Field::Name));
        assert_eq!(lookup(" Имя"), None);
        assert_eq!(lookup("имя"), None);
    }

    #[test]
    fn repeated_header_first_occurrence_wins() {
        let mapping = map_headers(&["Имя", "Статус", "Имя"]);
        let mapped: Vec<_> = mapping.mapped().collect();
        assert_eq!(mapped, vec![(0, Field::Name), (1, Field::Status)]);
    }

    #[test]
    fn revision_aliases_share_a_field() {
        let old = map_headers(&["FullPlayer.Email", "ВК"]);
        let new = map_headers(&["Игрок.Email", "Игрок.Extra.Vk"]);
        assert_eq!(old.field_at(0), new.field_at(0));
        assert_eq!(old.field_at(1), Some(Field::PlayerVk));
        assert_eq!(new.field_at(1), Some(Field::PlayerVk));

        // Both revisions in one sheet: the earlier column keeps the field.
        let mixed = map_headers(&["Игрок.Email", "FullPlayer.Email"]);
        assert_eq!(mixed.field_at(0), Some(Field::PlayerEmail));
        assert_eq!(mixed.field_at(1), None);
    }

    #[test]
    fn table_version_is_set() {
        assert_eq!(HEADER_TABLE_VERSION, 2, "Игрок.* aliases were added in v2");
    }

    #[test]
    fn every_field_has_a_header() {
        for field in Field::ALL {
            assert!(
                HEADER_TABLE.iter().any(|(_, f)| *f == field),
                "no header maps to {field}"
            );
        }
    }
}
