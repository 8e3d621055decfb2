// ==========================================
// Дашборд «Команды и клиенты» - доменный слой
// ==========================================

// Виды полей и раскладка колонок
pub mod types;

// Месяцы: названия, метки, сортировка
pub mod month;

// Плоские и агрегированные записи
pub mod record;
