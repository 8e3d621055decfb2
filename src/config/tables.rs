// ==========================================
// Дашборд «Команды и клиенты» - статические таблицы
// ==========================================
// Все таблицы собираются один раз при старте и передаются
// по ссылке в компоненты, без глобального состояния
// ==========================================

use std::collections::{HashMap, HashSet};

use crate::config::SheetConfig;
use crate::domain::types::HeaderKind;

// Маркер начала блока в колонке A операционного листа
pub const BLOCK_MARKER: &str = "Сотрудники";

// Рабочих дней в месяце, если месяца нет в производственном календаре
pub const DEFAULT_WORKING_DAYS: u32 = 21;

// Норма часов за рабочий день
pub const HOURS_PER_DAY: f64 = 8.0;

// Стартовый год для восстановления года по названиям месяцев
pub const INFER_BASE_YEAR: i32 = 2025;

// ==========================================
// Конфигурация операционных листов
// ==========================================
// Порядок листов и подгрупп контрактный: он задаёт и позиционное
// назначение подгрупп внутри блока, и порядок вывода в hierarchy.
// гамма-1 содержит 4 подгруппы, разделённые пустыми строками и «Итого»;
// остальные листы — по одной подгруппе.
pub fn sheet_configs() -> Vec<SheetConfig> {
    fn single(sheet: &str, subgroup: &str, group: &str) -> SheetConfig {
        SheetConfig {
            sheet: sheet.to_string(),
            subgroups: vec![subgroup.to_string()],
            group: group.to_string(),
        }
    }

    vec![
        SheetConfig {
            sheet: "гамма-1".to_string(),
            subgroups: vec![
                "Гамма-1".to_string(),
                "Гамма-1А".to_string(),
                "Гамма-1Б".to_string(),
                "Гамма-1 Полевые".to_string(),
            ],
            group: "Гамма".to_string(),
        },
        single("альфа-1", "Альфа-1", "Альфа"),
        single("альфа-2", "Альфа-2", "Альфа"),
        single("гамма-2", "Гамма-2", "Гамма"),
        single("дельта", "Дельта", "Дельта"),
        single("вита", "Вита", "Вита"),
        single("тета", "Тета", "Тета"),
        single("дзета", "Дзета", "Дзета"),
    ]
}

// ==========================================
// Карта заголовков колонок
// ==========================================
// Ключ — текст заголовка после trim + приведения к нижнему регистру.
// Формулировки заголовков менялись от листа к листу и от месяца к месяцу,
// поэтому вариантов несколько.
pub fn header_map() -> HashMap<String, HeaderKind> {
    let entries: [(&str, HeaderKind); 12] = [
        ("решенные заявки", HeaderKind::Tickets),
        ("решенные задачи", HeaderKind::Tasks),
        ("решенные рег.заявки", HeaderKind::RegTickets),
        ("решенные рег.задачи", HeaderKind::RegTasks),
        ("рег. заявки /задачи", HeaderKind::RegCombined),
        ("рег.заявки/задачи", HeaderKind::RegCombined),
        ("решенные заявки и задачи", HeaderKind::RegCombined),
        ("решенные заявки/задачи", HeaderKind::RegCombined),
        ("решенные заявки/\nзадачи", HeaderKind::RegCombined),
        ("выезды", HeaderKind::SiteVisits),
        ("решенные зни", HeaderKind::Zni),
        ("тзт", HeaderKind::Hours),
    ];

    entries
        .into_iter()
        .map(|(text, kind)| (text.to_string(), kind))
        .collect()
}

// ==========================================
// Служебные подписи строк
// ==========================================
// Строки с такими подписями (после trim + нижний регистр) — не сотрудники:
// итоги, беклоги и повторы шапки. Для назначения подгрупп они считаются
// разрывом, как и пустые строки.
pub fn skip_labels() -> HashSet<String> {
    [
        "итого",
        "беклог",
        "сотрудники",
        "",
        "беклог (0-2)",
        "бектог (2-4)", // опечатка встречается в самих отчётах
        "беклог (2-4)",
        "беклог (5-10)",
        "беклог (больше 4)",
        "беклог (больше 10)",
        "беклог (без проектов)",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

// ==========================================
// Псевдонимы клиентов
// ==========================================
// Известные расхождения написаний между листами клиентской книги.
// Ключ — нижний регистр, значение — каноническое написание.
pub fn client_aliases() -> HashMap<String, String> {
    [
        ("самитагро", "Самми Агро"),
        ("карабанов", "Карабанов и партнеры"),
        ("сева", "Ceva"),
        ("судьи", "Мировые судьи"),
        ("кистоун", "Кистоун Лоджистикс"),
    ]
    .into_iter()
    .map(|(from, to)| (from.to_string(), to.to_string()))
    .collect()
}

// ==========================================
// Производственный календарь РФ
// ==========================================
// Рабочих дней по месяцам. Ключ — метка месяца «<месяц> <год>».
pub fn production_calendar() -> HashMap<String, u32> {
    [
        ("январь 2025", 17),
        ("февраль 2025", 19),
        ("март 2025", 20),
        ("апрель 2025", 22),
        ("май 2025", 17),
        ("июнь 2025", 19),
        ("июль 2025", 23),
        ("август 2025", 21),
        ("сентябрь 2025", 22),
        ("октябрь 2025", 23),
        ("ноябрь 2025", 19),
        ("декабрь 2025", 22),
        ("январь 2026", 15),
        ("февраль 2026", 19),
        ("март 2026", 22),
        ("апрель 2026", 22),
        ("май 2026", 18),
        ("июнь 2026", 21),
        ("июль 2026", 23),
        ("август 2026", 21),
        ("сентябрь 2026", 22),
        ("октябрь 2026", 22),
        ("ноябрь 2026", 20),
        ("декабрь 2026", 22),
    ]
    .into_iter()
    .map(|(label, days)| (label.to_string(), days))
    .collect()
}

// ==========================================
// Листы клиентской книги
// ==========================================
pub const CLIENT_HOURS_SHEET: &str = "данные тзт";
pub const CLIENT_TICKETS_SHEET: &str = "заявки";
pub const CLIENT_TASKS_SHEET: &str = "задачи";
pub const CLIENT_SLA_SHEET: &str = "sla";
pub const CLIENT_MASS_SHEET: &str = "массовые";

// Тип ТЗТ по умолчанию, когда колонка пустая
pub const DEFAULT_HOURS_KIND: &str = "операционка";
