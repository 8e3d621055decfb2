// ==========================================
// Дашборд «Команды и клиенты» - типы ошибок сборки
// ==========================================
// Ошибки уровня ячеек сюда не попадают: кривые значения
// приводятся к значениям по умолчанию, а не к ошибкам
// ==========================================

use thiserror::Error;

/// Ошибки цикла сборки
#[derive(Error, Debug)]
pub enum BuildError {
    // ===== Исходные файлы =====
    #[error("исходный файл не найден: {0}")]
    SourceMissing(String),

    #[error("не удалось открыть книгу {path} после {attempts} попыток: {message}")]
    WorkbookOpen {
        path: String,
        attempts: u32,
        message: String,
    },

    // ===== Чтение книги =====
    #[error("ошибка чтения книги Excel: {0}")]
    WorkbookRead(String),

    // ===== Запись результата =====
    #[error("ошибка ввода-вывода: {0}")]
    Io(#[from] std::io::Error),

    #[error("ошибка сериализации JSON: {0}")]
    Json(#[from] serde_json::Error),

    // ===== Прочее =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<calamine::XlsxError> for BuildError {
    fn from(err: calamine::XlsxError) -> Self {
        BuildError::WorkbookRead(err.to_string())
    }
}

/// Псевдоним Result для цикла сборки
pub type BuildResult<T> = Result<T, BuildError>;
