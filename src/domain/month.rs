// ==========================================
// Дашборд «Команды и клиенты» - месяцы
// ==========================================
// Русские названия месяцев, метки вида «январь 2025»
// и ключ сортировки меток
// ==========================================

use chrono::{Datelike, NaiveDate};

/// Названия месяцев, индекс 0 = январь
pub const MONTH_NAMES: [&str; 12] = [
    "январь",
    "февраль",
    "март",
    "апрель",
    "май",
    "июнь",
    "июль",
    "август",
    "сентябрь",
    "октябрь",
    "ноябрь",
    "декабрь",
];

/// Название месяца по номеру 1..=12
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES[(month as usize - 1) % 12]
}

/// Номер месяца 1..=12 по названию в нижнем регистре
pub fn month_number(name: &str) -> Option<u32> {
    MONTH_NAMES
        .iter()
        .position(|&m| m == name)
        .map(|i| i as u32 + 1)
}

/// Метка месяца для даты: «январь 2025»
pub fn month_label(date: NaiveDate) -> String {
    format!("{} {}", month_name(date.month()), date.year())
}

/// Ключ сортировки метки месяца: (год, номер месяца).
/// Нераспознанная метка уходит в начало списка.
pub fn month_sort_key(label: &str) -> (i32, u32) {
    let mut parts = label.split_whitespace();
    let name = parts.next().unwrap_or("");
    let year = parts.next().and_then(|y| y.parse::<i32>().ok()).unwrap_or(0);
    (year, month_number(name).unwrap_or(0))
}
