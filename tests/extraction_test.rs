// ==========================================
// Извлечение операционной книги - интеграционные тесты
// ==========================================
// Листы строятся в памяти: структура блоков, раскладки,
// подгруппы и правила полей проверяются на цельном проходе
// ==========================================


use dashboard_builder::engine::normalize::OpsExtractor;
use test_helpers::*;

// ==========================================
// Структура блоков
// ==========================================

#[test]
fn test_two_blocks_one_employee_two_records() {
    // два блока с раскладкой из двух полей и одной датой в каждом
    let mut rows = ops_block(
        &["Решенные заявки", "Решенные задачи"],
        vec![txt("01.11.2025"), empty()],
        vec![vec![txt("Смирнов А."), num(4.0), num(2.0)]],
    );
    rows.extend(ops_block(
        &["Решенные заявки", "Решенные задачи"],
        vec![txt("02.11.2025"), empty()],
        vec![vec![txt("Смирнов А."), num(1.0), num(0.0)]],
    ));

    let cfg = config_with_sheets(vec![single_sheet("альфа-1", "Альфа-1", "Альфа")]);
    let wb = workbook_of(vec![sheet("альфа-1", rows)]);
    let records = OpsExtractor::new(&cfg).extract_workbook(&wb);

    assert_eq!(records.len(), 2);
    for record in &records {
        assert_eq!(record.employee, "Смирнов А.");
        assert_eq!(record.subgroup, "Альфа-1");
        // полей нет в раскладке — значения нулевые
        assert_eq!(record.reg_tickets_resolved, 0);
        assert_eq!(record.reg_tasks_resolved, 0);
        assert_eq!(record.hours, 0.0);
    }
    assert_eq!(records[0].date, "2025-11-01");
    assert_eq!(records[0].tickets_resolved, 4);
    assert_eq!(records[1].date, "2025-11-02");
    assert_eq!(records[1].tickets_resolved, 1);
    assert_eq!(records[0].month, "ноябрь 2025");
}

#[test]
fn test_block_with_bad_first_date_is_discarded() {
    // тело корректное, но первая ячейка строки дат не дата
    let rows = ops_block(
        &["Решенные заявки"],
        vec![txt("итого")],
        vec![vec![txt("Смирнов А."), num(4.0)]],
    );

    let cfg = config_with_sheets(vec![single_sheet("альфа-1", "Альфа-1", "Альфа")]);
    let wb = workbook_of(vec![sheet("альфа-1", rows)]);
    let records = OpsExtractor::new(&cfg).extract_workbook(&wb);

    assert!(records.is_empty());
}

#[test]
fn test_missing_sheet_contributes_zero_records() {
    let cfg = config_with_sheets(vec![single_sheet("альфа-1", "Альфа-1", "Альфа")]);
    let wb = workbook_of(vec![sheet("другой лист", vec![])]);
    let records = OpsExtractor::new(&cfg).extract_workbook(&wb);
    assert!(records.is_empty());
}

// ==========================================
// Раскладка по умолчанию
// ==========================================

#[test]
fn test_unrecognized_headers_use_default_five_field_layout() {
    // ни один заголовок не распознан: раскладка по умолчанию, шаг 5
    let rows = ops_block(
        &["Колонка А", "Колонка Б"],
        vec![
            txt("01.11.2025"),
            empty(),
            empty(),
            empty(),
            empty(),
            txt("02.11.2025"),
        ],
        vec![vec![
            txt("Иванов И."),
            num(1.0),
            num(2.0),
            num(3.0),
            num(4.0),
            num(5.5),
            num(6.0),
            num(7.0),
            num(8.0),
            num(9.0),
            num(10.25),
        ]],
    );

    let cfg = config_with_sheets(vec![single_sheet("вита", "Вита", "Вита")]);
    let wb = workbook_of(vec![sheet("вита", rows)]);
    let records = OpsExtractor::new(&cfg).extract_workbook(&wb);

    assert_eq!(records.len(), 2);
    let first = &records[0];
    assert_eq!(first.tickets_resolved, 1);
    assert_eq!(first.tasks_resolved, 2);
    assert_eq!(first.reg_tickets_resolved, 3);
    assert_eq!(first.reg_tasks_resolved, 4);
    assert_eq!(first.hours, 5.5);
    let second = &records[1];
    assert_eq!(second.tickets_resolved, 6);
    assert_eq!(second.hours, 10.25);
}

// ==========================================
// Подгруппы по разрывам
// ==========================================

#[test]
fn test_subgroups_advance_on_gaps() {
    let rows = ops_block(
        &["ТЗТ"],
        vec![txt("01.11.2025")],
        vec![
            vec![txt("Первый С."), num(8.0)],
            vec![txt("Второй С."), num(8.0)],
            vec![txt("Итого"), num(16.0)],
            vec![txt("Третий С."), num(8.0)],
            vec![empty()],
            vec![txt("Беклог (больше 10)"), num(3.0)],
            vec![txt("Четвёртый С."), num(8.0)],
        ],
    );

    let cfg = config_with_sheets(vec![multi_sheet(
        "гамма-1",
        &["Гамма-1", "Гамма-1А", "Гамма-1Б"],
        "Гамма",
    )]);
    let wb = workbook_of(vec![sheet("гамма-1", rows)]);
    let records = OpsExtractor::new(&cfg).extract_workbook(&wb);

    let assigned: Vec<(&str, &str)> = records
        .iter()
        .map(|r| (r.employee.as_str(), r.subgroup.as_str()))
        .collect();
    assert_eq!(
        assigned,
        vec![
            ("Первый С.", "Гамма-1"),
            ("Второй С.", "Гамма-1"),
            ("Третий С.", "Гамма-1А"),
            ("Четвёртый С.", "Гамма-1Б"),
        ]
    );
}

#[test]
fn test_last_subgroup_absorbs_extra_gap_runs() {
    let rows = ops_block(
        &["ТЗТ"],
        vec![txt("01.11.2025")],
        vec![
            vec![txt("Первый С."), num(8.0)],
            vec![txt("Итого"), num(8.0)],
            vec![txt("Второй С."), num(8.0)],
            vec![txt("Итого"), num(8.0)],
            vec![txt("Третий С."), num(8.0)],
        ],
    );

    let cfg = config_with_sheets(vec![multi_sheet("гамма-1", &["А", "Б"], "Гамма")]);
    let wb = workbook_of(vec![sheet("гамма-1", rows)]);
    let records = OpsExtractor::new(&cfg).extract_workbook(&wb);

    let subgroups: Vec<&str> = records.iter().map(|r| r.subgroup.as_str()).collect();
    // курсор насыщается: третий сотрудник остаётся в последней подгруппе
    assert_eq!(subgroups, vec!["А", "Б", "Б"]);
}

// ==========================================
// Правила полей
// ==========================================

#[test]
fn test_site_visits_double_as_reg_tasks_without_dedicated_column() {
    let rows = ops_block(
        &["Выезды"],
        vec![txt("01.11.2025")],
        vec![vec![txt("Иванов И."), num(3.0)]],
    );

    let cfg = config_with_sheets(vec![single_sheet("дельта", "Дельта", "Дельта")]);
    let wb = workbook_of(vec![sheet("дельта", rows)]);
    let records = OpsExtractor::new(&cfg).extract_workbook(&wb);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].site_visits, 3);
    assert_eq!(records[0].reg_tasks_resolved, 3);
}

#[test]
fn test_site_visits_not_copied_when_dedicated_reg_tasks_exists() {
    let rows = ops_block(
        &["Решенные рег.задачи", "Выезды"],
        vec![txt("01.11.2025"), empty()],
        vec![vec![txt("Иванов И."), num(7.0), num(3.0)]],
    );

    let cfg = config_with_sheets(vec![single_sheet("дельта", "Дельта", "Дельта")]);
    let wb = workbook_of(vec![sheet("дельта", rows)]);
    let records = OpsExtractor::new(&cfg).extract_workbook(&wb);

    assert_eq!(records[0].reg_tasks_resolved, 7);
    assert_eq!(records[0].site_visits, 3);
}

#[test]
fn test_combined_reg_column_goes_to_reg_tickets() {
    let rows = ops_block(
        &["Решенные заявки", "Рег.заявки/задачи"],
        vec![txt("01.11.2025"), empty()],
        vec![vec![txt("Иванов И."), num(5.0), num(9.0)]],
    );

    let cfg = config_with_sheets(vec![single_sheet("тета", "Тета", "Тета")]);
    let wb = workbook_of(vec![sheet("тета", rows)]);
    let records = OpsExtractor::new(&cfg).extract_workbook(&wb);

    // сумма неделима и целиком уходит в рег.заявки
    assert_eq!(records[0].reg_tickets_resolved, 9);
    assert_eq!(records[0].reg_tasks_resolved, 0);
}

#[test]
fn test_hours_rounded_to_two_decimals_and_counts_to_integers() {
    let rows = ops_block(
        &["Решенные заявки", "ТЗТ"],
        vec![txt("01.11.2025"), empty()],
        vec![vec![txt("Иванов И."), txt("4.6"), num(7.4567)]],
    );

    let cfg = config_with_sheets(vec![single_sheet("вита", "Вита", "Вита")]);
    let wb = workbook_of(vec![sheet("вита", rows)]);
    let records = OpsExtractor::new(&cfg).extract_workbook(&wb);

    assert_eq!(records[0].tickets_resolved, 5);
    assert_eq!(records[0].hours, 7.46);
}

#[test]
fn test_malformed_cells_degrade_to_zero() {
    let rows = ops_block(
        &["Решенные заявки", "ТЗТ"],
        vec![txt("01.11.2025"), empty()],
        vec![vec![txt("Иванов И."), txt("н/д"), empty()]],
    );

    let cfg = config_with_sheets(vec![single_sheet("вита", "Вита", "Вита")]);
    let wb = workbook_of(vec![sheet("вита", rows)]);
    let records = OpsExtractor::new(&cfg).extract_workbook(&wb);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].tickets_resolved, 0);
    assert_eq!(records[0].hours, 0.0);
}
