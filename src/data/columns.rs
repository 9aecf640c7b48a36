use std::collections::BTreeMap;

use super::model::Field;

/// How a canonical field is shown in the claims table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub field: Field,
    pub header: &'static str,
    /// Suggested column width in pixels.
    pub width_px: u16,
    pub default_visible: bool,
}

const fn col(field: Field, header: &'static str, width_px: u16, default_visible: bool) -> ColumnSpec {
    ColumnSpec {
        field,
        header,
        width_px,
        default_visible,
    }
}

const NARROW: u16 = 96;
const STANDARD: u16 = 128;
const WIDE: u16 = 256;

/// Table columns in display order.
pub const COLUMNS: &[ColumnSpec] = &[
    col(Field::Name, "Имя", STANDARD, false),
    col(Field::Link, "Ссылка", 192, false),
    col(Field::Status, "Статус", NARROW, false),
    col(Field::RejectionReason, "Причина отказа", STANDARD, false),
    col(Field::UpdatedAt, "Обновлена", STANDARD, false),
    col(Field::CreatedAt, "Создана", STANDARD, false),
    col(Field::TotalContribution, "Итого взнос", STANDARD, false),
    col(Field::RemainingAmount, "Осталось", STANDARD, false),
    col(Field::PaidAmount, "Уплачено", STANDARD, false),
    col(Field::LastModifiedBy, "LastModifiedBy", STANDARD, false),
    col(Field::Responsible, "Ответственный", STANDARD, false),
    col(Field::Player, "Игрок", NARROW, true),
    col(Field::PlayerSurname, "Игрок.SurName", STANDARD, false),
    col(Field::PlayerFatherName, "Игрок.FatherName", STANDARD, false),
    col(Field::PlayerBornName, "Игрок.BornName", STANDARD, false),
    col(Field::PlayerEmail, "Игрок.Email", 224, false),
    col(Field::PlayerVk, "Игрок.Extra.Vk", STANDARD, false),
    col(Field::PlayerSkype, "Игрок.Extra.Skype", STANDARD, false),
    col(Field::PlayerTelegram, "Игрок.Extra.Telegram", STANDARD, false),
    col(Field::PlayerLivejournal, "Игрок.Extra.Livejournal", STANDARD, false),
    col(Field::PlayerPhoneNumber, "Игрок.Extra.PhoneNumber", STANDARD, false),
    col(Field::CharacterName, "Имя персонажа", 144, false),
    col(Field::CharacterDescription, "Описание персонажа", WIDE, false),
    col(Field::Confirmations, "Я подтверждаю что...", STANDARD, false),
    col(Field::FullNameConfirmed, "Фамилия, имя и отчество", STANDARD, false),
    col(
        Field::AgeConfirmed,
        "Я совершеннолетний или я еду с родителями / у меня есть письменное разрешение от родителей",
        STANDARD,
        false,
    ),
    col(
        Field::HealthConfirmed,
        "Я осознаю свои медицинские ограничения и сам забочусь о сохранении своего здоровья во время игры",
        STANDARD,
        false,
    ),
    col(
        Field::ContactsConfirmed,
        "Актуальный контакт в telegram и профиль ВКонтакте для мастеров",
        STANDARD,
        false,
    ),
    col(
        Field::RoleContactsConfirmed,
        "Контакты для связи со мной в описании роли",
        STANDARD,
        false,
    ),
    col(Field::PreferredCharacterGender, "Пол", STANDARD, true),
    col(Field::Anthropomorphism, "Антропоморфность", STANDARD, true),
    col(Field::PreferredCharacterRace, "Раса", STANDARD, true),
    col(Field::PreferredCharacterClass, "Класс", STANDARD, true),
    col(Field::PlayPreferences, "Я хочу играть", WIDE, true),
    col(Field::PreferredPlotTypes, "Завязки", WIDE, true),
    col(Field::Triggers, "Триггеры", 240, true),
    col(Field::ReadyToLead, "Лидер", STANDARD, true),
    col(Field::PlotIdeas, "Идеи", 400, true),
    col(Field::Bus, "Автобус", STANDARD, false),
    col(Field::Accommodation, "Место проживания", STANDARD, false),
    col(Field::AccommodationDetails, "Кто живет", STANDARD, false),
];

pub fn column(field: Field) -> Option<&'static ColumnSpec> {
    COLUMNS.iter().find(|c| c.field == field)
}

/// Fields missing from the registry are hidden.
pub fn is_visible_by_default(field: Field) -> bool {
    column(field).is_some_and(|c| c.default_visible)
}

/// `(field, header)` for every column, in display order.
pub fn displayable_columns() -> impl Iterator<Item = (Field, &'static str)> {
    COLUMNS.iter().map(|c| (c.field, c.header))
}

/// Initial column visibility for a fresh table.
pub fn default_visibility() -> BTreeMap<Field, bool> {
    COLUMNS.iter().map(|c| (c.field, c.default_visible)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn questionnaire_columns_are_shown_by_default() {
        assert!(is_visible_by_default(Field::Player));
        assert!(is_visible_by_default(Field::Triggers));
        assert!(is_visible_by_default(Field::PlotIdeas));
        assert!(!is_visible_by_default(Field::PlayerEmail));
        assert!(!is_visible_by_default(Field::Bus));
    }

    #[test]
    fn registry_covers_every_field_once_in_order() {
        let fields: Vec<Field> = displayable_columns().map(|(f, _)| f).collect();
        assert_eq!(fields, Field::ALL.to_vec());
        assert_eq!(default_visibility().len(), Field::ALL.len());
    }

    #[test]
    fn lookup_by_field() {
        let ideas = column(Field::PlotIdeas).unwrap();
        assert_eq!(ideas.header, "Идеи");
        assert_eq!(ideas.width_px, 400);
    }
}
