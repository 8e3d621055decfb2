// ==========================================
// Дашборд «Команды и клиенты» - слой извлечения
// ==========================================
// Вся логика разбора и агрегации. Компоненты без состояния,
// конфигурация передаётся по ссылке.
// ==========================================

// Приведение значений ячеек
pub mod coerce;

// Определение раскладки колонок блока
pub mod layout;

// Поиск блоков и колонок дат
pub mod segment;

// Назначение подгрупп по строкам
pub mod subgroup;

// Сборка плоских дневных записей
pub mod normalize;

// Месячные агрегаты и иерархия
pub mod aggregate;

// Клиентская книга: четыре формы листов
pub mod clients;

pub use clients::{ClientData, ClientExtractor, ClientReconciler};
pub use layout::LayoutDetector;
pub use normalize::OpsExtractor;
pub use segment::{Block, BlockSegmenter};
pub use subgroup::{RowKind, SubgroupScanner};
