// ==========================================
// Агрегация - интеграционные тесты
// ==========================================
// Месячные агрегаты, иерархия и защита производных метрик
// от нулевых знаменателей
// ==========================================


use dashboard_builder::config::AppConfig;
use dashboard_builder::domain::record::DailyRecord;
use dashboard_builder::engine::aggregate::{aggregate_monthly, build_hierarchy, month_index};
use test_helpers::{multi_sheet, single_sheet};

// ==========================================
// Вспомогательные конструкторы
// ==========================================

fn daily(
    employee: &str,
    subgroup: &str,
    group: &str,
    date: &str,
    month: &str,
    hours: f64,
    tickets: i64,
    tasks: i64,
) -> DailyRecord {
    DailyRecord {
        employee: employee.to_string(),
        subgroup: subgroup.to_string(),
        group: group.to_string(),
        date: date.to_string(),
        month: month.to_string(),
        hours,
        tickets_resolved: tickets,
        tasks_resolved: tasks,
        reg_tickets_resolved: 0,
        reg_tasks_resolved: 0,
        site_visits: 0,
        month_order: 0,
    }
}

fn order_of(daily: &[DailyRecord]) -> std::collections::HashMap<String, usize> {
    month_index(daily.iter().map(|r| r.month.clone())).1
}

// ==========================================
// Защита от нулевых знаменателей
// ==========================================

#[test]
fn test_zero_hours_give_zero_ratios() {
    let records = vec![daily(
        "Иванов И.",
        "Вита",
        "Вита",
        "2025-11-01",
        "ноябрь 2025",
        0.0,
        250,
        300,
    )];
    let cfg = AppConfig::production();
    let (emp, sg) = aggregate_monthly(&records, &order_of(&records), &cfg.prod_calendar);

    assert_eq!(emp[0].util, 0.0);
    assert_eq!(emp[0].tph_b, 0.0);
    assert_eq!(emp[0].tph_z, 0.0);
    assert_eq!(emp[0].tph_all, 0.0);
    assert_eq!(sg[0].util, 0.0);
    assert_eq!(sg[0].tph_all, 0.0);
    // счётчики при этом сохраняются
    assert_eq!(emp[0].tk_b, 250);
    assert_eq!(sg[0].ts_b, 300);
}

// ==========================================
// Утилизация и производительность
// ==========================================

#[test]
fn test_utilization_uses_production_calendar() {
    // ноябрь 2025: 19 рабочих дней → норма 152 часа
    let records = vec![daily(
        "Иванов И.",
        "Вита",
        "Вита",
        "2025-11-01",
        "ноябрь 2025",
        76.0,
        38,
        19,
    )];
    let cfg = AppConfig::production();
    let (emp, _) = aggregate_monthly(&records, &order_of(&records), &cfg.prod_calendar);

    assert_eq!(emp[0].norm, 152);
    assert_eq!(emp[0].util, 50.0);
    assert_eq!(emp[0].tph_b, 0.5);
    assert_eq!(emp[0].tph_z, 0.25);
    assert_eq!(emp[0].tph_all, 0.75);
}

#[test]
fn test_unknown_month_defaults_to_21_working_days() {
    let records = vec![daily(
        "Иванов И.",
        "Вита",
        "Вита",
        "2030-06-03",
        "июнь 2030",
        84.0,
        0,
        0,
    )];
    let cfg = AppConfig::production();
    let (emp, _) = aggregate_monthly(&records, &order_of(&records), &cfg.prod_calendar);

    assert_eq!(emp[0].norm, 168);
    assert_eq!(emp[0].util, 50.0);
}

#[test]
fn test_subgroup_norm_scales_with_headcount() {
    let records = vec![
        daily("Иванов И.", "Вита", "Вита", "2025-11-01", "ноябрь 2025", 80.0, 1, 0),
        daily("Петров П.", "Вита", "Вита", "2025-11-01", "ноябрь 2025", 72.0, 2, 0),
        daily("Петров П.", "Вита", "Вита", "2025-11-02", "ноябрь 2025", 8.0, 1, 0),
    ];
    let cfg = AppConfig::production();
    let (_, sg) = aggregate_monthly(&records, &order_of(&records), &cfg.prod_calendar);

    assert_eq!(sg.len(), 1);
    assert_eq!(sg[0].employees, 2);
    assert_eq!(sg[0].days, 2);
    // норма: 19 дней × 8 часов × 2 сотрудника
    assert_eq!(sg[0].norm, 304);
    assert_eq!(sg[0].tzt, 160.0);
}

// ==========================================
// Согласованность уровней
// ==========================================

#[test]
fn test_employee_sums_match_subgroup_totals() {
    let records = vec![
        daily("Иванов И.", "Вита", "Вита", "2025-11-01", "ноябрь 2025", 7.5, 3, 1),
        daily("Иванов И.", "Вита", "Вита", "2025-11-02", "ноябрь 2025", 8.25, 2, 2),
        daily("Петров П.", "Вита", "Вита", "2025-11-01", "ноябрь 2025", 6.0, 5, 0),
        daily("Петров П.", "Вита", "Вита", "2025-12-01", "декабрь 2025", 4.0, 1, 1),
    ];
    let cfg = AppConfig::production();
    let (emp, sg) = aggregate_monthly(&records, &order_of(&records), &cfg.prod_calendar);

    for sg_row in &sg {
        let emp_hours: f64 = emp
            .iter()
            .filter(|e| e.subgroup == sg_row.subgroup && e.month == sg_row.month)
            .map(|e| e.tzt)
            .sum();
        assert!((emp_hours - sg_row.tzt).abs() < 1e-9);

        let emp_tickets: i64 = emp
            .iter()
            .filter(|e| e.subgroup == sg_row.subgroup && e.month == sg_row.month)
            .map(|e| e.tk_b)
            .sum();
        assert_eq!(emp_tickets, sg_row.tk_b);
    }
}

#[test]
fn test_aggregates_sorted_by_grouping_key() {
    let records = vec![
        daily("Яшин Я.", "Вита", "Вита", "2025-11-01", "ноябрь 2025", 1.0, 0, 0),
        daily("Агеев А.", "Вита", "Вита", "2025-11-01", "ноябрь 2025", 1.0, 0, 0),
        daily("Агеев А.", "Альфа-1", "Альфа", "2025-11-01", "ноябрь 2025", 1.0, 0, 0),
    ];
    let cfg = AppConfig::production();
    let (emp, sg) = aggregate_monthly(&records, &order_of(&records), &cfg.prod_calendar);

    let emp_keys: Vec<(&str, &str)> = emp
        .iter()
        .map(|e| (e.employee.as_str(), e.subgroup.as_str()))
        .collect();
    assert_eq!(
        emp_keys,
        vec![
            ("Агеев А.", "Альфа-1"),
            ("Агеев А.", "Вита"),
            ("Яшин Я.", "Вита"),
        ]
    );
    assert_eq!(sg[0].subgroup, "Альфа-1");
    assert_eq!(sg[1].subgroup, "Вита");
}

// ==========================================
// Месяцы и иерархия
// ==========================================

#[test]
fn test_month_index_orders_across_years() {
    let labels = ["февраль 2026", "ноябрь 2025", "декабрь 2025", "ноябрь 2025"];
    let (months, order) = month_index(labels.iter().map(|s| s.to_string()));
    assert_eq!(months, vec!["ноябрь 2025", "декабрь 2025", "февраль 2026"]);
    assert_eq!(order["ноябрь 2025"], 1);
    assert_eq!(order["февраль 2026"], 3);
}

#[test]
fn test_hierarchy_follows_sheet_config_order() {
    let sheets = vec![
        multi_sheet("гамма-1", &["Гамма-1", "Гамма-1А"], "Гамма"),
        single_sheet("альфа-1", "Альфа-1", "Альфа"),
        single_sheet("гамма-2", "Гамма-2", "Гамма"),
    ];
    let records = vec![
        daily("Иванов И.", "Альфа-1", "Альфа", "2025-11-01", "ноябрь 2025", 1.0, 0, 0),
        daily("Яшин Я.", "Гамма-1", "Гамма", "2025-11-01", "ноябрь 2025", 1.0, 0, 0),
        daily("Агеев А.", "Гамма-1", "Гамма", "2025-11-01", "ноябрь 2025", 1.0, 0, 0),
        daily("Петров П.", "Гамма-2", "Гамма", "2025-11-01", "ноябрь 2025", 1.0, 0, 0),
    ];

    let hierarchy = build_hierarchy(&records, &sheets);

    let group_names: Vec<&str> = hierarchy.groups.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(group_names, vec!["Гамма", "Альфа"]);

    let gamma = &hierarchy.groups[0];
    // подгруппа без данных (Гамма-1А) не выводится
    let sg_names: Vec<&str> = gamma.subgroups.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(sg_names, vec!["Гамма-1", "Гамма-2"]);
    // сотрудники по алфавиту
    assert_eq!(gamma.subgroups[0].employees, vec!["Агеев А.", "Яшин Я."]);

    assert_eq!(hierarchy.sg_to_group["Гамма-2"], "Гамма");
    assert_eq!(hierarchy.sg_to_group["Альфа-1"], "Альфа");
}
