// ==========================================
// Дашборд «Команды и клиенты» - нормализация записей
// ==========================================
// Склейка компонентов: сегментация → раскладка → подгруппы →
// одна плоская запись на пару (строка сотрудника × колонка даты).
// ==========================================

use tracing::{debug, info, warn};

use crate::config::{AppConfig, SheetConfig};
use crate::domain::month::month_label;
use crate::domain::record::DailyRecord;
use crate::domain::types::{Field, FieldLayout};
use crate::engine::coerce::{round_to, to_f64, to_i64};
use crate::engine::layout::LayoutDetector;
use crate::engine::segment::{Block, BlockSegmenter};
use crate::engine::subgroup::{classify_label, RowKind, SubgroupScanner};
use crate::workbook::{Sheet, Workbook};

// ==========================================
// OpsExtractor - извлечение операционной книги
// ==========================================
pub struct OpsExtractor<'a> {
    cfg: &'a AppConfig,
}

impl<'a> OpsExtractor<'a> {
    pub fn new(cfg: &'a AppConfig) -> Self {
        Self { cfg }
    }

    /// Пройти все сконфигурированные листы книги.
    /// Отсутствующий лист — предупреждение и ноль записей, не ошибка.
    pub fn extract_workbook(&self, workbook: &Workbook) -> Vec<DailyRecord> {
        let mut all = Vec::new();
        for sheet_cfg in &self.cfg.sheets {
            match workbook.find_sheet(&sheet_cfg.sheet) {
                Some(sheet) => {
                    let records = self.extract_sheet(sheet, sheet_cfg);
                    info!(
                        sheet = %sheet_cfg.sheet,
                        records = records.len(),
                        "лист разобран"
                    );
                    all.extend(records);
                }
                None => warn!(sheet = %sheet_cfg.sheet, "лист не найден в книге"),
            }
        }
        info!(total = all.len(), "операционная книга разобрана");
        all
    }

    /// Разобрать один операционный лист
    pub fn extract_sheet(&self, sheet: &Sheet, sheet_cfg: &SheetConfig) -> Vec<DailyRecord> {
        let segmenter = BlockSegmenter::new();
        let detector = LayoutDetector::new(&self.cfg.header_map);
        let mut records = Vec::new();

        for block in segmenter.find_blocks(sheet) {
            if !segmenter.is_plausible(sheet, &block) {
                continue;
            }

            let layout = detector.detect(sheet, block.header_row);
            let dates = segmenter.date_columns(sheet, &block, layout.stride());
            if dates.is_empty() {
                debug!(
                    sheet = %sheet.name,
                    header_row = block.header_row,
                    "блок без дат отброшен"
                );
                continue;
            }

            self.extract_block(sheet, sheet_cfg, &block, &layout, &dates, &mut records);
        }

        records
    }

    /// Тело блока: строки сотрудников × колонки дат
    fn extract_block(
        &self,
        sheet: &Sheet,
        sheet_cfg: &SheetConfig,
        block: &Block,
        layout: &FieldLayout,
        dates: &[(usize, chrono::NaiveDate)],
        records: &mut Vec<DailyRecord>,
    ) {
        let mut scanner = SubgroupScanner::new(&sheet_cfg.subgroups);

        for row in block.body_start..=block.body_end {
            match classify_label(sheet.cell(row, 1), &self.cfg.skip_labels) {
                RowKind::Gap => scanner.note_gap(),
                RowKind::Employee(name) => {
                    let Some(subgroup) = scanner.next_employee() else {
                        continue;
                    };
                    for &(col_start, date) in dates {
                        records.push(self.build_record(
                            sheet, row, col_start, date, &name, subgroup, sheet_cfg, layout,
                        ));
                    }
                }
            }
        }
    }

    /// Одна запись: пройти раскладку от стартовой колонки даты.
    ///
    /// Правила полей повторяют реальную историю форматов отчётов:
    /// - часы хранятся с 2 знаками;
    /// - выезды записываются как есть И считаются за рег.задачи,
    ///   только если в раскладке нет отдельной колонки рег.задач;
    /// - счётчики заявок/задач округляются до целых;
    /// - пропущенные колонки не переносятся.
    #[allow(clippy::too_many_arguments)]
    fn build_record(
        &self,
        sheet: &Sheet,
        row: usize,
        col_start: usize,
        date: chrono::NaiveDate,
        employee: &str,
        subgroup: &str,
        sheet_cfg: &SheetConfig,
        layout: &FieldLayout,
    ) -> DailyRecord {
        let mut record = DailyRecord {
            employee: employee.to_string(),
            subgroup: subgroup.to_string(),
            group: sheet_cfg.group.clone(),
            date: date.format("%Y-%m-%d").to_string(),
            month: month_label(date),
            hours: 0.0,
            tickets_resolved: 0,
            tasks_resolved: 0,
            reg_tickets_resolved: 0,
            reg_tasks_resolved: 0,
            site_visits: 0,
            month_order: 0,
        };

        let has_dedicated_reg_tasks = layout.contains(Field::RegTasks);

        for (offset, field) in layout.fields().iter().enumerate() {
            let cell = sheet.cell(row, col_start + offset);
            match field {
                Field::Hours => record.hours = round_to(to_f64(cell), 2),
                Field::SiteVisits => {
                    let visits = to_i64(cell);
                    record.site_visits = visits;
                    if !has_dedicated_reg_tasks {
                        record.reg_tasks_resolved = visits;
                    }
                }
                Field::Tickets => record.tickets_resolved = to_i64(cell),
                Field::Tasks => record.tasks_resolved = to_i64(cell),
                Field::RegTickets => record.reg_tickets_resolved = to_i64(cell),
                Field::RegTasks => record.reg_tasks_resolved = to_i64(cell),
                Field::Skip => {}
            }
        }

        record
    }
}
