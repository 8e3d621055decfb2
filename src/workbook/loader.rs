// ==========================================
// Дашборд «Команды и клиенты» - загрузка книги
// ==========================================
// Книга копируется во временный файл и читается из копии:
// исходник лежит в синхронизируемом каталоге и может быть
// занят Excel или клиентом синхронизации.
// Копирование и открытие повторяются ограниченное число раз.
// ==========================================

use std::fs;
use std::path::Path;
use std::thread;
use std::time::Duration;

use calamine::{open_workbook, Reader, Xlsx};
use tracing::{debug, warn};

use crate::error::{BuildError, BuildResult};
use crate::workbook::{Sheet, Workbook};

// Попыток открытия
const MAX_ATTEMPTS: u32 = 3;

// Пауза между попытками
const RETRY_DELAY: Duration = Duration::from_secs(5);

/// Загрузить книгу Excel целиком в память.
///
/// Все листы читаются сразу: временная копия удаляется
/// до возврата, наружу не выходит ни одного дескриптора.
pub fn load_workbook(path: &Path) -> BuildResult<Workbook> {
    if !path.exists() {
        return Err(BuildError::SourceMissing(path.display().to_string()));
    }

    let mut last_error = String::new();
    for attempt in 1..=MAX_ATTEMPTS {
        match read_via_temp_copy(path) {
            Ok(workbook) => {
                debug!(
                    path = %path.display(),
                    sheets = workbook.sheets.len(),
                    "книга загружена"
                );
                return Ok(workbook);
            }
            Err(err) => {
                last_error = err.to_string();
                if attempt < MAX_ATTEMPTS {
                    warn!(
                        path = %path.display(),
                        attempt,
                        max_attempts = MAX_ATTEMPTS,
                        error = %last_error,
                        "не удалось открыть книгу, повтор"
                    );
                    thread::sleep(RETRY_DELAY);
                }
            }
        }
    }

    Err(BuildError::WorkbookOpen {
        path: path.display().to_string(),
        attempts: MAX_ATTEMPTS,
        message: last_error,
    })
}

/// Одна попытка: копия во временный файл, чтение всех листов.
/// Временный файл удаляется при выходе в любом случае (RAII).
fn read_via_temp_copy(path: &Path) -> BuildResult<Workbook> {
    let temp = tempfile::Builder::new()
        .prefix("dashboard-src-")
        .suffix(".xlsx")
        .tempfile()?;
    fs::copy(path, temp.path())?;

    let mut book: Xlsx<_> = open_workbook(temp.path())?;

    let names: Vec<String> = book.sheet_names().to_vec();
    let mut sheets = Vec::with_capacity(names.len());
    for name in names {
        let range = book.worksheet_range(&name)?;
        sheets.push(Sheet::from_range(&name, &range));
    }

    Ok(Workbook::new(sheets))
}
