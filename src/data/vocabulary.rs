use serde::Serialize;

use super::model::Field;

// ---------------------------------------------------------------------------
// Field vocabularies
// ---------------------------------------------------------------------------

/// Separator the exporter uses between the selected answers of a
/// multi-select question.
pub const DELIMITER: char = ',';

/// Text a checked checkbox is normalized to.
pub const CHECKED: &str = "да";
/// Text an unchecked checkbox is normalized to.
pub const UNCHECKED: &str = "нет";

pub const READY_TO_LEAD: &[&str] = &[CHECKED, UNCHECKED];

pub const PLAY_PREFERENCES: &[&str] = &[
    "политика",
    "служба",
    "диаспора, национальные меньшинства",
    "семья, клан",
    "дружба",
    "сила",
    "эксперименты",
    "горе, утрата, вина",
    "убийство",
    "месть",
    "фанатизм, слепая преданность",
    "верность, готовность к самопожертвованию",
    "борьба с несправедливостью",
    "предательство, заговор",
    "исследования/детектив",
    "тайны/ошибки прошлого",
    "сюрпризы от мастеров",
    "двойное дно",
    "отрицательный персонаж",
    "персонаж с серой моралью",
    "криминальная среда",
    "колониальные проблемы",
    "проблемы работорговли",
    "пиратство, наемничество, контрабанда",
    "сложный моральный выбор",
    "долг",
    "особое предназначение",
    "жертвенность",
    "потеря идеалов, разочарование",
    "утрата памяти",
    "бедность, социальное неблагополучие",
    "драма/трагедия",
    "следование традициям",
    "бунтарство и вызов традициям",
    "радикализм",
    "другое (указать)",
    "готов сыграть что угодно",
];

pub const TRIGGERS: &[&str] = &[
    "насилие сексуального характера",
    "инцест",
    "домашнее насилие",
    "насилие над детьми",
    "пытки",
    "смерть близких",
    "потеря ребенка",
    "беременность",
    "прерывание беременности",
    "телесные модификации",
    "попытка суицида",
    "суицид у близких",
    "абьюзивные отношения",
    "унижение",
    "потеря контроля",
    "изоляция",
    "рабство",
    "принудительный брак",
    "культурное унижение (колониализм)",
    "зависимости от веществ",
    "бедность",
    "инвалидность",
    "психические заболевания",
    "секс",
    "развод",
    "измена",
    "похищение",
    "тяжелая болезнь",
    "триггеров нет, готов на все!",
];

pub const CHARACTER_GENDERS: &[&str] = &[
    "мужской",
    "женский",
    "мне все равно, могу сыграть кого угодно",
];

pub const CHARACTER_RACES: &[&str] = &[
    "люди",
    "вуки",
    "тви’леки",
    "мандалорцы",
    "забраки",
    "каминоанцы",
    "авторская раса (придумано мастерами)",
    "другое (указать в поле для идей)",
    "все равно",
];

pub const CHARACTER_CLASSES: &[&str] = &[
    "торговец",
    "гвардеец/стражник",
    "наемник",
    "чувствительный к Силе",
    "пользующийся Силой",
    "сенатор",
    "служащий (сенат)",
    "член криминальной банды",
    "маргинал (житель нижних уровней, но не обязательно преступник)",
    "дипломат, посол",
    "аристократ",
    "студент",
    "преподаватель, наставник",
    "контрабандист",
    "ученый, исследователь",
    "медик",
    "художник, творческие занятия",
    "пилот",
    "корпоративный магнат",
    "член делегации с другой планеты",
    "все равно",
    "другое (указать)",
];

pub const ANTHROPOMORPHISM: &[&str] = &[
    "мне все равно, могу сделать любой образ",
    "я хочу играть человека или максимально похожую на людей расу",
];

pub const PLOT_TYPES: &[&str] = &[
    "были врагами, стали друзьями",
    "были друзьями, стали врагами",
    "были врагами, стали любовниками",
    "были любовниками, стали врагами",
    "вынужденные союзники",
    "соперничество",
    "принимающая семья или клан",
    "семья или клан со строгими требованиями",
    "любовное треугольник",
    "потерянная любовь",
    "запретная любовь",
    "бывшие, плохо закончились отношения",
    "ничего личного, только бизнес",
    "брак по расчету",
    "семья не по крови, служебное братство",
    "братья и сестры",
    "родители и дети / родитель",
    "родители и дети / ребенок",
    "развод",
    "коллеги",
    "долг жизни",
    "шантаж / шантажист",
    "шантаж / жертва",
    "предательство / предатель",
    "предательство / преданный",
    "насилие, абьюз / жертва",
    "насилие, абьюз / виновник",
    "измена / изменивший",
    "измена / кому изменили",
    "измена / с кем изменили",
    "одержимость / одержимый",
    "одержимость / тот, кем одержимы",
    "служебная / командир или начальник",
    "служебная / подчиненный",
    "наставничество / учитель, наставник",
    "наставничество / ученик, студент",
    "куртуазные отношения / «рыцарь»",
    "куртуазные отношения / «дама»",
    "рабство / раб",
    "рабство / господин или работорговец",
    "взаимная зависимость",
    "другое (указать)",
    "готов сыграть что угодно",
];

/// Vocabulary of a filterable field, `None` for free-form fields.
pub fn vocabulary(field: Field) -> Option<&'static [&'static str]> {
    match field {
        Field::PreferredCharacterGender => Some(CHARACTER_GENDERS),
        Field::Anthropomorphism => Some(ANTHROPOMORPHISM),
        Field::PreferredCharacterRace => Some(CHARACTER_RACES),
        Field::PreferredCharacterClass => Some(CHARACTER_CLASSES),
        Field::PlayPreferences => Some(PLAY_PREFERENCES),
        Field::PreferredPlotTypes => Some(PLOT_TYPES),
        Field::Triggers => Some(TRIGGERS),
        Field::ReadyToLead => Some(READY_TO_LEAD),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Filter options
// ---------------------------------------------------------------------------

/// One selectable entry of a filter dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

/// Upper-case the first character, leave the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn filter_options(values: &[&str]) -> Vec<FilterOption> {
    values
        .iter()
        .map(|v| FilterOption {
            value: v.to_string(),
            label: capitalize(v),
        })
        .collect()
}

/// Options for a field's filter; empty for fields without a vocabulary.
pub fn options_for(field: Field) -> Vec<FilterOption> {
    vocabulary(field).map(filter_options).unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Multi-value splitting
// ---------------------------------------------------------------------------

/// Split a multi-select answer into its tokens.
///
/// Some vocabulary entries contain the delimiter themselves
/// (`"семья, клан"`), so adjacent pieces are re-joined whenever the joined
/// form is a vocabulary entry. The longest match wins. Only windows as wide
/// as the widest vocabulary entry are tried, so the cost stays linear in the
/// number of pieces.
pub fn split_multi_value(raw: &str, vocabulary: &[&str]) -> Vec<String> {
    let widest = vocabulary
        .iter()
        .map(|entry| entry.matches(DELIMITER).count() + 1)
        .max()
        .unwrap_or(1);

    let pieces: Vec<&str> = raw
        .split(DELIMITER)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    let mut tokens = Vec::with_capacity(pieces.len());
    let mut i = 0;
    while i < pieces.len() {
        let last = pieces.len().min(i + widest);
        let joined = (i + 2..=last).rev().find_map(|end| {
            let candidate = pieces[i..end].join(", ");
            vocabulary
                .contains(&candidate.as_str())
                .then_some((candidate, end))
        });
        match joined {
            Some((token, end)) => {
                tokens.push(token);
                i = end;
            }
            None => {
                tokens.push(pieces[i].to_string());
                i += 1;
            }
        }
    }
    tokens
}
