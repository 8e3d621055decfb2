// ==========================================
// Дашборд «Команды и клиенты» - записи
// ==========================================
// Плоские дневные записи, месячные агрегаты и клиентские
// записи четырёх форм. Имена JSON-полей контрактные:
// их читает скрипт страницы.
// ==========================================

use serde::Serialize;

// ==========================================
// DailyRecord - одна запись (сотрудник × дата × блок)
// ==========================================
// Неизменяема после создания; потребляется только агрегатором
// и сериализацией
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyRecord {
    #[serde(rename = "e")]
    pub employee: String,
    #[serde(rename = "sg")]
    pub subgroup: String,
    #[serde(rename = "g")]
    pub group: String,
    /// Дата в формате ГГГГ-ММ-ДД
    #[serde(rename = "d")]
    pub date: String,
    /// Метка месяца «<месяц> <год>»
    #[serde(rename = "m")]
    pub month: String,
    /// Трудозатраты, часы (2 знака)
    #[serde(rename = "tzt")]
    pub hours: f64,
    /// Решённые заявки
    #[serde(rename = "tk_b")]
    pub tickets_resolved: i64,
    /// Решённые задачи
    #[serde(rename = "ts_b")]
    pub tasks_resolved: i64,
    /// Решённые регуляторные заявки
    #[serde(rename = "tk_r")]
    pub reg_tickets_resolved: i64,
    /// Решённые регуляторные задачи
    #[serde(rename = "ts_r")]
    pub reg_tasks_resolved: i64,
    /// Выезды
    #[serde(rename = "vz")]
    pub site_visits: i64,
    /// Порядковый номер месяца в общем списке (проставляется при сборке)
    #[serde(rename = "mo")]
    pub month_order: usize,
}

// ==========================================
// EmployeeMonthly - агрегат (сотрудник, подгруппа, месяц)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeMonthly {
    pub employee: String,
    pub subgroup: String,
    pub group: String,
    pub month: String,
    pub month_order: usize,
    /// Суммарные часы (1 знак)
    pub tzt: f64,
    /// Норма часов месяца: рабочие дни × 8
    pub norm: i64,
    /// Утилизация, % (1 знак); 0 при нулевой норме
    pub util: f64,
    pub tk_b: i64,
    pub ts_b: i64,
    pub tk_r: i64,
    pub ts_r: i64,
    /// Заявок на час; 0 при нулевых часах
    pub tph_b: f64,
    /// Задач на час
    pub tph_z: f64,
    /// Заявок и задач на час
    pub tph_all: f64,
    pub vz: i64,
}

// ==========================================
// SubgroupMonthly - агрегат (подгруппа, месяц)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubgroupMonthly {
    pub subgroup: String,
    pub group: String,
    pub month: String,
    pub month_order: usize,
    pub tzt: f64,
    /// Норма часов: рабочие дни × 8 × численность
    pub norm: i64,
    pub util: f64,
    pub tk_b: i64,
    pub ts_b: i64,
    pub tk_r: i64,
    pub ts_r: i64,
    /// Различных сотрудников за месяц
    pub employees: usize,
    /// Различных дат с данными
    pub days: usize,
    pub tph_b: f64,
    pub tph_z: f64,
    pub tph_all: f64,
    pub vz: i64,
}

// ==========================================
// Клиентские записи - четыре формы листов
// ==========================================

/// Строка листа «данные тзт»: часы по клиенту за месяц
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientHours {
    pub client: String,
    /// Название месяца в нижнем регистре
    pub month: String,
    /// Метка месяца «<месяц> <год>»
    pub ml: String,
    pub team: String,
    /// Вид трудозатрат («операционка», проект и т.п.)
    pub tzt_type: String,
    pub tzt: f64,
    #[serde(rename = "mo")]
    pub month_order: usize,
}

/// Строка сводных листов «заявки»/«задачи»: пара поступило/решено
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientTickets {
    pub client: String,
    pub month: String,
    pub ml: String,
    /// «заявки» или «задачи»
    #[serde(rename = "type")]
    pub kind: String,
    pub incoming: i64,
    pub resolved: i64,
    #[serde(rename = "mo")]
    pub month_order: usize,
}

/// Строка листа «sla»: проценты соблюдения по реакции и решению.
/// None — в ячейке прочерк, это «нет значения», а не ноль.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientSla {
    pub client: String,
    pub month: String,
    pub ml: String,
    pub sr: Option<f64>,
    pub si: Option<f64>,
    #[serde(rename = "mo")]
    pub month_order: usize,
}

/// Строка листа «массовые»: массовые инциденты за месяц
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientMass {
    pub client: String,
    pub month: String,
    pub ml: String,
    pub mi: i64,
    #[serde(rename = "mo")]
    pub month_order: usize,
}
