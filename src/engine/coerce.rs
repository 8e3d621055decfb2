// ==========================================
// Дашборд «Команды и клиенты» - приведение значений
// ==========================================
// Тотальные функции: отчёты ведутся вручную, кривое значение —
// штатная ситуация. Числа деградируют к нулю, даты — к «не дата».
// ==========================================

use chrono::NaiveDate;

use crate::workbook::CellValue;

// Формат дат в строке дат блока
const REPORT_DATE_FORMAT: &str = "%d.%m.%Y";

/// Число из ячейки; пустое, нечисловое или кривое значение — 0.0
pub fn to_f64(cell: &CellValue) -> f64 {
    match cell {
        CellValue::Empty => 0.0,
        CellValue::Number(v) => *v,
        CellValue::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        CellValue::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
    }
}

/// Целое из ячейки: число, округлённое до ближайшего целого
pub fn to_i64(cell: &CellValue) -> i64 {
    to_f64(cell).round() as i64
}

/// Дата из ячейки. Принимается только текст «дд.мм.гггг»;
/// всё остальное — None, и вызывающий код трактует это
/// как структурный признак («строка не про даты»), а не как ошибку.
pub fn to_report_date(cell: &CellValue) -> Option<NaiveDate> {
    match cell {
        CellValue::Text(s) => NaiveDate::parse_from_str(s.trim(), REPORT_DATE_FORMAT).ok(),
        _ => None,
    }
}

/// Подпись строки из первой колонки: None для пустых значений.
/// Ноль и «ложь» тоже считаются пустыми — в отчётах это
/// остатки формул, а не подписи.
pub fn label_text(cell: &CellValue) -> Option<String> {
    match cell {
        CellValue::Empty => None,
        CellValue::Text(s) => Some(s.trim().to_string()),
        CellValue::Number(v) => {
            if *v == 0.0 {
                None
            } else {
                Some(format_number(*v))
            }
        }
        CellValue::Bool(b) => {
            if *b {
                Some("true".to_string())
            } else {
                None
            }
        }
    }
}

/// Текст заголовка колонки: trim + нижний регистр, None для пустой ячейки
pub fn header_text(cell: &CellValue) -> Option<String> {
    match cell {
        CellValue::Empty => None,
        CellValue::Text(s) => Some(s.trim().to_lowercase()),
        CellValue::Number(v) => Some(format_number(*v)),
        CellValue::Bool(b) => Some(b.to_string()),
    }
}

/// Округление до заданного числа знаков после запятой
pub fn round_to(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (value * factor).round() / factor
}

fn format_number(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{}", v)
    }
}
