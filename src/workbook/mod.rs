// ==========================================
// Дашборд «Команды и клиенты» - доступ к книгам Excel
// ==========================================
// Книга читается целиком в память: сетка ячеек с адресацией
// (строка, колонка) от единицы, как в самих таблицах.
// calamine дальше этого модуля не выходит.
// ==========================================

pub mod loader;

use calamine::{Data, Range};

pub use loader::load_workbook;

// ==========================================
// CellValue - значение ячейки
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl CellValue {
    /// Привести ячейку calamine к доменному значению.
    ///
    /// Ячейки-даты приводятся к тексту «ГГГГ-ММ-ДД ЧЧ:ММ:СС»:
    /// разбор дат в отчётах принимает только текст «дд.мм.гггг»,
    /// поэтому типизированная дата остаётся структурным не-значением.
    fn from_data(data: &Data) -> Self {
        match data {
            Data::Empty => CellValue::Empty,
            Data::String(s) => CellValue::Text(s.clone()),
            Data::Float(v) => CellValue::Number(*v),
            Data::Int(v) => CellValue::Number(*v as f64),
            Data::Bool(b) => CellValue::Bool(*b),
            Data::DateTime(dt) => match dt.as_datetime() {
                Some(naive) => CellValue::Text(naive.format("%Y-%m-%d %H:%M:%S").to_string()),
                None => CellValue::Number(dt.as_f64()),
            },
            Data::DateTimeIso(s) => CellValue::Text(s.clone()),
            Data::DurationIso(s) => CellValue::Text(s.clone()),
            Data::Error(_) => CellValue::Empty,
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Number(v)
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        CellValue::Number(v as f64)
    }
}

static EMPTY_CELL: CellValue = CellValue::Empty;

// ==========================================
// Sheet - лист книги
// ==========================================
#[derive(Debug, Clone)]
pub struct Sheet {
    pub name: String,
    rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    /// Лист из готовых строк (тесты и загрузчик)
    pub fn from_rows(name: &str, rows: Vec<Vec<CellValue>>) -> Self {
        Self {
            name: name.to_string(),
            rows,
        }
    }

    /// Лист из диапазона calamine; сетка дополняется от (1, 1),
    /// даже если диапазон начинается не с первой ячейки
    pub fn from_range(name: &str, range: &Range<Data>) -> Self {
        let mut rows = Vec::new();
        if let Some((end_row, end_col)) = range.end() {
            rows.reserve(end_row as usize + 1);
            for r in 0..=end_row {
                let mut row = Vec::with_capacity(end_col as usize + 1);
                for c in 0..=end_col {
                    let cell = range
                        .get_value((r, c))
                        .map(CellValue::from_data)
                        .unwrap_or(CellValue::Empty);
                    row.push(cell);
                }
                rows.push(row);
            }
        }
        Self::from_rows(name, rows)
    }

    /// Значение ячейки, строка и колонка от единицы.
    /// За пределами сетки — пустая ячейка.
    pub fn cell(&self, row: usize, col: usize) -> &CellValue {
        if row == 0 || col == 0 {
            return &EMPTY_CELL;
        }
        self.rows
            .get(row - 1)
            .and_then(|r| r.get(col - 1))
            .unwrap_or(&EMPTY_CELL)
    }

    /// Число строк
    pub fn max_row(&self) -> usize {
        self.rows.len()
    }

    /// Число колонок (по самой длинной строке)
    pub fn max_column(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }
}

// ==========================================
// Workbook - книга из листов
// ==========================================
#[derive(Debug, Clone)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new(sheets: Vec<Sheet>) -> Self {
        Self { sheets }
    }

    /// Найти лист: сначала точное имя, затем без учёта
    /// регистра и пробелов по краям
    pub fn find_sheet(&self, name: &str) -> Option<&Sheet> {
        if let Some(sheet) = self.sheets.iter().find(|s| s.name == name) {
            return Some(sheet);
        }
        let wanted = name.trim().to_lowercase();
        self.sheets
            .iter()
            .find(|s| s.name.trim().to_lowercase() == wanted)
    }
}
