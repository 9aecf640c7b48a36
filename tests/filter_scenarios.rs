use larp_claims::data::config::validate_catalog;
use larp_claims::data::filter::{
    filtered_indices, record_visible, ActiveFilterState, BooleanMode, FilterState, Polarity,
};
use larp_claims::data::loader::read_csv;
use larp_claims::data::model::{CanonicalRecord, CellValue, Field};
use larp_claims::data::normalizer::normalize_table;

fn selection(values: &[&str], mode: BooleanMode, polarity: Polarity) -> ActiveFilterState {
    ActiveFilterState {
        selected: values.iter().map(|v| v.to_string()).collect(),
        polarity,
        mode,
    }
}

#[test]
fn leader_checkbox_scenario() {
    let records = normalize_table(
        &["Имя", "Я готов быть лидером"],
        &[vec![CellValue::from("Игорь"), CellValue::from("☑️")]],
    );

    let mut expected = CanonicalRecord::new();
    expected.set(Field::Name, "Игорь".into());
    expected.set(Field::ReadyToLead, "да".into());
    assert_eq!(records, vec![expected]);
}

#[test]
fn negated_trigger_scenario() {
    let mut record = CanonicalRecord::new();
    record.set(Field::Triggers, "секс,измена".into());

    let mut filters = FilterState::new();
    filters.insert(
        Field::Triggers,
        selection(&["секс"], BooleanMode::And, Polarity::NotEquals),
    );
    assert!(!record_visible(&record, &filters));
}

#[test]
fn one_failing_filter_hides_the_record() {
    let mut record = CanonicalRecord::new();
    record.set(Field::ReadyToLead, "да".into());
    record.set(Field::PreferredCharacterRace, "люди, вуки".into());

    let mut filters = FilterState::new();
    filters.insert(
        Field::ReadyToLead,
        selection(&["да"], BooleanMode::Or, Polarity::Equals),
    );
    filters.insert(
        Field::PreferredCharacterRace,
        selection(&["мандалорцы"], BooleanMode::Or, Polarity::Equals),
    );
    assert!(!record_visible(&record, &filters));
}

#[test]
fn export_to_filtered_view() {
    validate_catalog().unwrap();

    let export = "\
Имя,Неизвестная колонка,Я хочу играть,С чем я не хочу сталкиваться (триггеры),Я готов быть лидером,Имя
Первая,x,\"политика, семья, клан\",\"пытки, секс\",☑️,дубль
Вторая,y,\"дружба, месть\",,☐,дубль
Третья,z,\"семья, клан, месть\",измена,☑️,дубль
";
    let records = read_csv(export.as_bytes()).unwrap().into_records();
    assert_eq!(records.len(), 3);
    assert!(records.iter().all(|r| r.text(Field::Name).as_deref() != Some("дубль")));

    // Players who want family plots and have no objection to torture.
    let mut filters = FilterState::new();
    filters.insert(
        Field::PlayPreferences,
        selection(&["семья, клан"], BooleanMode::And, Polarity::Equals),
    );
    filters.insert(
        Field::Triggers,
        selection(&["пытки"], BooleanMode::Or, Polarity::NotEquals),
    );
    assert_eq!(filtered_indices(&records, &filters), vec![2]);

    // Ready leaders who want both family plots and revenge.
    let mut filters = FilterState::new();
    filters.insert(
        Field::PlayPreferences,
        selection(&["семья, клан", "месть"], BooleanMode::And, Polarity::Equals),
    );
    filters.insert(
        Field::ReadyToLead,
        selection(&["да"], BooleanMode::Or, Polarity::Equals),
    );
    assert_eq!(filtered_indices(&records, &filters), vec![2]);

    // Either preference, any leadership answer.
    filters.remove(&Field::ReadyToLead);
    filters.get_mut(&Field::PlayPreferences).unwrap().mode = BooleanMode::Or;
    assert_eq!(filtered_indices(&records, &filters), vec![0, 1, 2]);
}
