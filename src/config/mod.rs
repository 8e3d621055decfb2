// ==========================================
// Дашборд «Команды и клиенты» - слой конфигурации
// ==========================================
// Статические таблицы + пути до источников и результатов.
// Конфигурация неизменяема после старта.
// ==========================================

pub mod tables;

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use crate::domain::types::HeaderKind;

// ==========================================
// SheetConfig - конфигурация операционного листа
// ==========================================
/// Лист операционной книги: упорядоченный список подгрупп и родительская группа.
///
/// Порядок подгрупп определяет позиционное назначение строк внутри блока
/// и никогда не меняется на лету.
#[derive(Debug, Clone)]
pub struct SheetConfig {
    pub sheet: String,
    pub subgroups: Vec<String>,
    pub group: String,
}

// ==========================================
// AppConfig - статические таблицы
// ==========================================
pub struct AppConfig {
    /// Операционные листы в порядке вывода
    pub sheets: Vec<SheetConfig>,
    /// Текст заголовка (trim + нижний регистр) → вид поля
    pub header_map: HashMap<String, HeaderKind>,
    /// Служебные подписи строк (итоги, беклоги)
    pub skip_labels: HashSet<String>,
    /// Псевдонимы клиентов (нижний регистр → каноническое написание)
    pub client_aliases: HashMap<String, String>,
    /// Рабочие дни по меткам месяцев
    pub prod_calendar: HashMap<String, u32>,
}

impl AppConfig {
    /// Боевая конфигурация из статических таблиц
    pub fn production() -> Self {
        Self {
            sheets: tables::sheet_configs(),
            header_map: tables::header_map(),
            skip_labels: tables::skip_labels(),
            client_aliases: tables::client_aliases(),
            prod_calendar: tables::production_calendar(),
        }
    }
}

// ==========================================
// Paths - расположение файлов
// ==========================================
/// Пути до источников, результатов и каталога публикации.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Операционные отчёты (ежедневные)
    pub ops_file: PathBuf,
    /// Отчёт по клиентам (ежемесячный)
    pub client_file: PathBuf,
    /// JSON-пакет для страницы
    pub json_out: PathBuf,
    /// Готовая HTML-страница
    pub html_out: PathBuf,
    /// Фрагменты шаблона страницы
    pub css_fragment: PathBuf,
    pub body_fragment: PathBuf,
    pub js_fragment: PathBuf,
    /// Копия страницы для руководителей (best-effort)
    pub share_html: PathBuf,
}

impl Paths {
    /// Пути по умолчанию: источники в каталоге OneDrive,
    /// результаты и фрагменты в рабочем каталоге.
    pub fn default_locations() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        let source_dir = home.join("OneDrive").join("FinancesDocs");
        let share_dir = home.join("OneDrive").join("Leaders Dashboards");
        let work_dir = PathBuf::from(".");

        Self {
            ops_file: source_dir.join("Операционные отчеты (ежедневные).xlsx"),
            client_file: source_dir.join("Отчет по клиентам (ежемесячный).xlsx"),
            json_out: work_dir.join("v3_data.json"),
            html_out: work_dir.join("dashboard_v7.html"),
            css_fragment: work_dir.join("new_css.txt"),
            body_fragment: work_dir.join("new_body.txt"),
            js_fragment: work_dir.join("new_js.txt"),
            share_html: share_dir.join("teams-customers-dashboard.html"),
        }
    }

    /// Перенести результаты и фрагменты в другой каталог
    pub fn with_out_dir(mut self, dir: &Path) -> Self {
        self.json_out = dir.join("v3_data.json");
        self.html_out = dir.join("dashboard_v7.html");
        self.css_fragment = dir.join("new_css.txt");
        self.body_fragment = dir.join("new_body.txt");
        self.js_fragment = dir.join("new_js.txt");
        self
    }
}
