// ==========================================
// Дашборд «Команды и клиенты» - определение раскладки
// ==========================================
// Вход: лист и строка заголовков блока.
// Скан слева направо от первой колонки данных; текст каждого
// заголовка ищется в карте заголовков. Стоп на первой пустой
// или нераспознанной ячейке либо на повторе первого вида —
// повтор означает начало колонок следующей даты.
// ==========================================

use std::collections::HashMap;

use crate::domain::types::{FieldLayout, HeaderKind};
use crate::engine::coerce::header_text;
use crate::engine::segment::DATA_COL_START;
use crate::workbook::Sheet;

// Скан заголовков не уходит дальше этой колонки
const HEADER_SCAN_LIMIT: usize = 199;

// ==========================================
// LayoutDetector - детектор раскладки блока
// ==========================================
pub struct LayoutDetector<'a> {
    header_map: &'a HashMap<String, HeaderKind>,
}

impl<'a> LayoutDetector<'a> {
    pub fn new(header_map: &'a HashMap<String, HeaderKind>) -> Self {
        Self { header_map }
    }

    /// Раскладка блока по его строке заголовков.
    ///
    /// Если не распознано ни одной колонки, возвращается раскладка
    /// по умолчанию — деградация, а не ошибка.
    pub fn detect(&self, sheet: &Sheet, header_row: usize) -> FieldLayout {
        let mut raw: Vec<HeaderKind> = Vec::new();
        let limit = sheet.max_column().min(HEADER_SCAN_LIMIT);

        for col in DATA_COL_START..=limit {
            let Some(text) = header_text(sheet.cell(header_row, col)) else {
                break;
            };
            let Some(&kind) = self.header_map.get(&text) else {
                break;
            };
            // Повтор первого вида = колонки следующей даты
            if raw.first() == Some(&kind) {
                break;
            }
            raw.push(kind);
        }

        FieldLayout::resolve(raw)
    }
}
