// ==========================================
// Дашборд «Команды и клиенты» - клиентская книга
// ==========================================
// Четыре листа разной формы под одной канонической личностью
// клиента. Каноника задаётся листом «данные тзт», остальные
// листы приводятся к ней без учёта регистра и через псевдонимы.
// ==========================================

use std::collections::HashMap;

use tracing::{info, warn};

use crate::config::tables::{
    CLIENT_HOURS_SHEET, CLIENT_MASS_SHEET, CLIENT_SLA_SHEET, CLIENT_TASKS_SHEET,
    CLIENT_TICKETS_SHEET, DEFAULT_HOURS_KIND, INFER_BASE_YEAR,
};
use crate::config::AppConfig;
use crate::domain::month::month_number;
use crate::domain::record::{ClientHours, ClientMass, ClientSla, ClientTickets};
use crate::engine::coerce::{header_text, label_text, round_to, to_f64, to_i64};
use crate::workbook::{CellValue, Sheet, Workbook};

// Сводные листы: данные после строки месяцев и подшапки
const PIVOT_DATA_START_ROW: usize = 3;

// Лист «массовые» без подшапки: данные сразу после месяцев
const MASS_DATA_START_ROW: usize = 2;

// Первая колонка месяцев в сводных листах
const PIVOT_MONTH_COL_START: usize = 2;

// ==========================================
// ClientData - результат разбора книги
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ClientData {
    pub hours: Vec<ClientHours>,
    pub tickets: Vec<ClientTickets>,
    pub sla: Vec<ClientSla>,
    pub mass: Vec<ClientMass>,
}

// ==========================================
// ClientReconciler - каноническое имя клиента
// ==========================================
pub struct ClientReconciler<'a> {
    /// нижний регистр → первое встреченное написание
    canonical: HashMap<String, String>,
    /// статические псевдонимы: нижний регистр → каноника
    aliases: &'a HashMap<String, String>,
}

impl<'a> ClientReconciler<'a> {
    pub fn new(aliases: &'a HashMap<String, String>) -> Self {
        Self {
            canonical: HashMap::new(),
            aliases,
        }
    }

    /// Запомнить написание из первичного листа.
    /// Канонической остаётся первая встреченная форма.
    pub fn remember(&mut self, name: &str) {
        self.canonical
            .entry(name.to_lowercase())
            .or_insert_with(|| name.to_string());
    }

    /// Привести имя к канонике: карта первичного листа,
    /// затем псевдонимы, затем имя как есть — новые клиенты
    /// из боковых листов проходят без изменений.
    pub fn resolve(&self, name: &str) -> String {
        let key = name.to_lowercase();
        if let Some(canonical) = self.canonical.get(&key) {
            return canonical.clone();
        }
        if let Some(alias) = self.aliases.get(&key) {
            return alias.clone();
        }
        name.to_string()
    }
}

/// Год каждого названия месяца в хронологической шапке.
///
/// Годов в шапке нет; месяцы идут вперёд, и год увеличивается
/// каждый раз, когда номер месяца уменьшается относительно
/// предыдущего (декабрь → январь). Всё до первого уменьшения
/// относится к стартовому году.
pub fn infer_month_years(names: &[String]) -> HashMap<String, i32> {
    let mut years = HashMap::new();
    let mut year = INFER_BASE_YEAR;
    let mut prev = 0u32;
    for name in names {
        let num = month_number(name).unwrap_or(0);
        if num != 0 && num < prev {
            year += 1;
        }
        prev = num;
        years.insert(name.clone(), year);
    }
    years
}

// ==========================================
// ClientExtractor - разбор клиентской книги
// ==========================================
pub struct ClientExtractor<'a> {
    cfg: &'a AppConfig,
}

impl<'a> ClientExtractor<'a> {
    pub fn new(cfg: &'a AppConfig) -> Self {
        Self { cfg }
    }

    /// Разобрать все четыре листа. Отсутствующий лист —
    /// предупреждение и ноль записей.
    pub fn extract_workbook(&self, workbook: &Workbook) -> ClientData {
        let mut recon = ClientReconciler::new(&self.cfg.client_aliases);

        let hours = match workbook.find_sheet(CLIENT_HOURS_SHEET) {
            Some(sheet) => parse_hours_sheet(sheet, &mut recon),
            None => {
                warn!(sheet = CLIENT_HOURS_SHEET, "лист не найден в книге");
                Vec::new()
            }
        };
        info!(sheet = CLIENT_HOURS_SHEET, records = hours.len(), "лист разобран");

        let mut tickets = self.parse_pair(workbook, CLIENT_TICKETS_SHEET, &recon);
        let tasks = self.parse_pair(workbook, CLIENT_TASKS_SHEET, &recon);
        info!(
            tickets = tickets.len(),
            tasks = tasks.len(),
            "сводные листы заявок и задач разобраны"
        );
        tickets.extend(tasks);

        let sla = match workbook.find_sheet(CLIENT_SLA_SHEET) {
            Some(sheet) => parse_sla_sheet(sheet, &recon),
            None => {
                warn!(sheet = CLIENT_SLA_SHEET, "лист не найден в книге");
                Vec::new()
            }
        };
        info!(sheet = CLIENT_SLA_SHEET, records = sla.len(), "лист разобран");

        let mass = match workbook.find_sheet(CLIENT_MASS_SHEET) {
            Some(sheet) => parse_mass_sheet(sheet, &recon),
            None => {
                warn!(sheet = CLIENT_MASS_SHEET, "лист не найден в книге");
                Vec::new()
            }
        };
        info!(sheet = CLIENT_MASS_SHEET, records = mass.len(), "лист разобран");

        ClientData {
            hours,
            tickets,
            sla,
            mass,
        }
    }

    fn parse_pair(
        &self,
        workbook: &Workbook,
        sheet_name: &str,
        recon: &ClientReconciler<'_>,
    ) -> Vec<ClientTickets> {
        match workbook.find_sheet(sheet_name) {
            Some(sheet) => parse_pair_sheet(sheet, sheet_name, recon),
            None => {
                warn!(sheet = sheet_name, "лист не найден в книге");
                Vec::new()
            }
        }
    }
}

/// Лист «данные тзт»: плоские строки клиент/месяц/год/команда/вид/часы.
/// Попутно наполняет каноническую карту имён.
fn parse_hours_sheet(sheet: &Sheet, recon: &mut ClientReconciler<'_>) -> Vec<ClientHours> {
    let mut records = Vec::new();

    for row in 2..=sheet.max_row() {
        let Some(client) = label_text(sheet.cell(row, 1)) else {
            continue;
        };
        let Some(month_raw) = label_text(sheet.cell(row, 2)) else {
            continue;
        };
        if client.is_empty() {
            continue;
        }

        recon.remember(&client);
        let month = month_raw.to_lowercase();

        let year_value = to_i64(sheet.cell(row, 3));
        let year = if year_value != 0 {
            year_value as i32
        } else {
            INFER_BASE_YEAR
        };

        let team = label_text(sheet.cell(row, 4)).unwrap_or_default();
        let kind =
            label_text(sheet.cell(row, 5)).unwrap_or_else(|| DEFAULT_HOURS_KIND.to_string());

        records.push(ClientHours {
            client,
            ml: format!("{} {}", month, year),
            month,
            team,
            tzt_type: kind,
            tzt: round_to(to_f64(sheet.cell(row, 6)), 2),
            month_order: 0,
        });
    }

    records
}

/// Колонки месяцев сводного листа: ячейки первой строки,
/// чей текст — название месяца
fn month_header_columns(sheet: &Sheet) -> Vec<(usize, String)> {
    let mut months = Vec::new();
    for col in PIVOT_MONTH_COL_START..=sheet.max_column() {
        if let Some(text) = header_text(sheet.cell(1, col)) {
            if month_number(&text).is_some() {
                months.push((col, text));
            }
        }
    }
    months
}

/// Сводный лист «заявки»/«задачи»: по паре колонок
/// (поступило, решено) на месяц
fn parse_pair_sheet(
    sheet: &Sheet,
    kind: &str,
    recon: &ClientReconciler<'_>,
) -> Vec<ClientTickets> {
    let months = month_header_columns(sheet);
    if months.is_empty() {
        return Vec::new();
    }
    let month_names: Vec<String> = months.iter().map(|(_, name)| name.clone()).collect();
    let years = infer_month_years(&month_names);

    let mut records = Vec::new();
    for row in PIVOT_DATA_START_ROW..=sheet.max_row() {
        let Some(raw_client) = non_empty_label(sheet.cell(row, 1)) else {
            continue;
        };
        let client = recon.resolve(&raw_client);

        for (col, month) in &months {
            let year = years.get(month).copied().unwrap_or(INFER_BASE_YEAR);
            records.push(ClientTickets {
                client: client.clone(),
                month: month.clone(),
                ml: format!("{} {}", month, year),
                kind: kind.to_string(),
                incoming: to_i64(sheet.cell(row, *col)),
                resolved: to_i64(sheet.cell(row, col + 1)),
                month_order: 0,
            });
        }
    }
    records
}

/// Лист «sla»: пара колонок (реакция, решение) на месяц.
/// Прочерк и пустая ячейка — «нет значения»; числовой ноль — ноль.
fn parse_sla_sheet(sheet: &Sheet, recon: &ClientReconciler<'_>) -> Vec<ClientSla> {
    let months = month_header_columns(sheet);
    if months.is_empty() {
        return Vec::new();
    }
    let month_names: Vec<String> = months.iter().map(|(_, name)| name.clone()).collect();
    let years = infer_month_years(&month_names);

    let mut records = Vec::new();
    for row in PIVOT_DATA_START_ROW..=sheet.max_row() {
        let Some(raw_client) = non_empty_label(sheet.cell(row, 1)) else {
            continue;
        };
        let client = recon.resolve(&raw_client);

        for (col, month) in &months {
            let year = years.get(month).copied().unwrap_or(INFER_BASE_YEAR);
            records.push(ClientSla {
                client: client.clone(),
                month: month.clone(),
                ml: format!("{} {}", month, year),
                sr: sla_value(sheet.cell(row, *col)),
                si: sla_value(sheet.cell(row, col + 1)),
                month_order: 0,
            });
        }
    }
    records
}

/// Лист «массовые»: одна колонка на месяц, данные сразу со второй строки
fn parse_mass_sheet(sheet: &Sheet, recon: &ClientReconciler<'_>) -> Vec<ClientMass> {
    let months = month_header_columns(sheet);
    if months.is_empty() {
        return Vec::new();
    }
    let month_names: Vec<String> = months.iter().map(|(_, name)| name.clone()).collect();
    let years = infer_month_years(&month_names);

    let mut records = Vec::new();
    for row in MASS_DATA_START_ROW..=sheet.max_row() {
        let Some(raw_client) = non_empty_label(sheet.cell(row, 1)) else {
            continue;
        };
        let client = recon.resolve(&raw_client);

        for (col, month) in &months {
            let year = years.get(month).copied().unwrap_or(INFER_BASE_YEAR);
            records.push(ClientMass {
                client: client.clone(),
                month: month.clone(),
                ml: format!("{} {}", month, year),
                mi: to_i64(sheet.cell(row, *col)),
                month_order: 0,
            });
        }
    }
    records
}

// Подпись клиента: пустая строка после trim тоже считается отсутствием
fn non_empty_label(cell: &CellValue) -> Option<String> {
    label_text(cell).filter(|s| !s.is_empty())
}

// Значение SLA: прочерк и пустота — None, число — значение как есть
fn sla_value(cell: &CellValue) -> Option<f64> {
    match cell {
        CellValue::Empty => None,
        CellValue::Text(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() || trimmed == "-" {
                None
            } else {
                Some(to_f64(cell))
            }
        }
        _ => Some(to_f64(cell)),
    }
}
