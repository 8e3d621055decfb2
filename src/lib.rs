// ==========================================
// Дашборд «Команды и клиенты» - ядро сборщика
// ==========================================
// Источники: операционные отчёты (ежедневные) + отчёт по клиентам (ежемесячный)
// Результат: v3_data.json + dashboard_v7.html
// ==========================================

// ==========================================
// Модули
// ==========================================

// Доменный слой - записи и типы полей
pub mod domain;

// Конфигурация - статические таблицы и пути
pub mod config;

// Доступ к книгам Excel - сетка ячеек, безопасная загрузка
pub mod workbook;

// Извлечение и агрегация - вся логика разбора
pub mod engine;

// Сборка результата - JSON-пакет и HTML
pub mod output;

// Приложение - цикл сборки и режим наблюдения
pub mod app;

// Логирование
pub mod logging;

// Ошибки сборки
pub mod error;

// ==========================================
// Реэкспорт основных типов
// ==========================================

pub use config::{AppConfig, Paths, SheetConfig};
pub use domain::record::{
    ClientHours, ClientMass, ClientSla, ClientTickets, DailyRecord, EmployeeMonthly,
    SubgroupMonthly,
};
pub use domain::types::{Field, FieldLayout, HeaderKind};
pub use engine::aggregate::Hierarchy;
pub use engine::clients::ClientData;
pub use error::{BuildError, BuildResult};
pub use output::payload::DashboardData;
pub use workbook::{CellValue, Sheet, Workbook};

// ==========================================
// Константы
// ==========================================

// Версия пакета
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Название системы
pub const APP_NAME: &str = "Дашборд «Команды и клиенты»";
