// ==========================================
// Дашборд «Команды и клиенты» - сегментация листа
// ==========================================
// Блок начинается со строки-маркера «Сотрудники» в колонке A.
// Смещения внутри блока фиксированные: заголовки в строке маркера,
// даты через две строки, тело через четыре.
// ==========================================

use chrono::NaiveDate;
use tracing::debug;

use crate::config::tables::BLOCK_MARKER;
use crate::engine::coerce::to_report_date;
use crate::workbook::{CellValue, Sheet};

/// Первая колонка данных (B): скан заголовков, даты и значения
pub const DATA_COL_START: usize = 2;

// Строка дат — через 2 от маркера, тело — через 4
const DATE_ROW_OFFSET: usize = 2;
const BODY_ROW_OFFSET: usize = 4;

// ==========================================
// Block - один блок записей
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Строка маркера; она же строка заголовков
    pub header_row: usize,
    /// Строка с датами
    pub date_row: usize,
    /// Первая строка тела
    pub body_start: usize,
    /// Последняя строка тела (включительно)
    pub body_end: usize,
}

// ==========================================
// BlockSegmenter - поиск блоков и колонок дат
// ==========================================
pub struct BlockSegmenter;

impl BlockSegmenter {
    pub fn new() -> Self {
        Self
    }

    /// Найти кандидатов в блоки: все строки-маркеры сверху вниз.
    /// Конец блока — строка перед следующим маркером либо конец листа.
    pub fn find_blocks(&self, sheet: &Sheet) -> Vec<Block> {
        let mut starts = Vec::new();
        for row in 1..=sheet.max_row() {
            if let CellValue::Text(s) = sheet.cell(row, 1) {
                if s.trim() == BLOCK_MARKER {
                    starts.push(row);
                }
            }
        }

        starts
            .iter()
            .enumerate()
            .map(|(i, &start)| {
                let end = if i + 1 < starts.len() {
                    starts[i + 1] - 1
                } else {
                    sheet.max_row()
                };
                Block {
                    header_row: start,
                    date_row: start + DATE_ROW_OFFSET,
                    body_start: start + BODY_ROW_OFFSET,
                    body_end: end,
                }
            })
            .collect()
    }

    /// Проверка кандидата: первая ячейка строки дат обязана быть датой.
    /// Отсев случайных совпадений маркера в тексте листа.
    pub fn is_plausible(&self, sheet: &Sheet, block: &Block) -> bool {
        let ok = to_report_date(sheet.cell(block.date_row, DATA_COL_START)).is_some();
        if !ok {
            debug!(
                sheet = %sheet.name,
                header_row = block.header_row,
                "кандидат в блоки отброшен: первая ячейка дат не дата"
            );
        }
        ok
    }

    /// Колонки дат блока: шаг по листу равен шагу раскладки.
    /// Непустые недаты пропускаются, скан идёт до края листа —
    /// дырка в датах не означает конец блока.
    pub fn date_columns(&self, sheet: &Sheet, block: &Block, stride: usize) -> Vec<(usize, NaiveDate)> {
        let mut dates = Vec::new();
        if stride == 0 {
            return dates;
        }
        let mut col = DATA_COL_START;
        while col <= sheet.max_column() {
            if let Some(date) = to_report_date(sheet.cell(block.date_row, col)) {
                dates.push((col, date));
            }
            col += stride;
        }
        dates
    }
}

impl Default for BlockSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workbook::CellValue;

    fn marker_row() -> Vec<CellValue> {
        vec![CellValue::from(BLOCK_MARKER)]
    }

    fn empty_row() -> Vec<CellValue> {
        vec![CellValue::Empty]
    }

    #[test]
    fn test_find_blocks_bounds() {
        let mut rows = vec![marker_row()];
        rows.extend((0..6).map(|_| empty_row()));
        rows.push(marker_row());
        rows.extend((0..4).map(|_| empty_row()));
        let sheet = Sheet::from_rows("гамма-1", rows);

        let blocks = BlockSegmenter::new().find_blocks(&sheet);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].header_row, 1);
        assert_eq!(blocks[0].date_row, 3);
        assert_eq!(blocks[0].body_start, 5);
        assert_eq!(blocks[0].body_end, 7);
        assert_eq!(blocks[1].header_row, 8);
        assert_eq!(blocks[1].body_end, 12);
    }

    #[test]
    fn test_is_plausible_requires_first_date() {
        let mut rows = vec![marker_row(), empty_row()];
        rows.push(vec![CellValue::Empty, CellValue::from("не дата")]);
        let sheet = Sheet::from_rows("гамма-1", rows);
        let segmenter = BlockSegmenter::new();
        let blocks = segmenter.find_blocks(&sheet);
        assert!(!segmenter.is_plausible(&sheet, &blocks[0]));
    }

    #[test]
    fn test_date_columns_skip_gaps_without_stopping() {
        let mut rows = vec![marker_row(), empty_row()];
        // даты в колонках 2 и 6 при шаге 2; колонка 4 — мусор
        rows.push(vec![
            CellValue::Empty,
            CellValue::from("01.11.2025"),
            CellValue::Empty,
            CellValue::from("итого"),
            CellValue::Empty,
            CellValue::from("03.11.2025"),
        ]);
        let sheet = Sheet::from_rows("гамма-1", rows);
        let segmenter = BlockSegmenter::new();
        let blocks = segmenter.find_blocks(&sheet);
        let dates = segmenter.date_columns(&sheet, &blocks[0], 2);
        assert_eq!(dates.len(), 2);
        assert_eq!(dates[0].0, 2);
        assert_eq!(dates[1].0, 6);
    }
}
