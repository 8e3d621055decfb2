// ==========================================
// Дашборд «Команды и клиенты» - назначение подгрупп
// ==========================================
// В одном блоке может лежать несколько подгрупп подряд,
// разделённых только пустыми строками и строками «Итого»/беклогов —
// собственных подписей у подгрупп нет. Единственный доступный
// сигнал — позиция и счёт разрывов.
// ==========================================

use std::collections::HashSet;

use crate::engine::coerce::label_text;
use crate::workbook::CellValue;

// ==========================================
// RowKind - классификация строки тела
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowKind {
    /// Пустая или служебная строка: разрыв между подгруппами
    Gap,
    /// Строка сотрудника с его именем
    Employee(String),
}

/// Классифицировать строку по подписи в первой колонке
pub fn classify_label(cell: &CellValue, skip_labels: &HashSet<String>) -> RowKind {
    match label_text(cell) {
        None => RowKind::Gap,
        Some(name) => {
            if skip_labels.contains(&name.to_lowercase()) {
                RowKind::Gap
            } else {
                RowKind::Employee(name)
            }
        }
    }
}

// ==========================================
// SubgroupScanner - сканер подгрупп
// ==========================================
// Явный конечный автомат: {ждём сотрудника, в разрыве}.
// Курсор по списку подгрупп монотонный и насыщается на последней:
// дальше последней подгруппы строки не уходят.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Читаем строки текущей подгруппы
    AwaitingEmployee,
    /// Встречен разрыв; следующий сотрудник откроет новую подгруппу
    InGap,
}

pub struct SubgroupScanner<'a> {
    subgroups: &'a [String],
    idx: usize,
    state: ScanState,
}

impl<'a> SubgroupScanner<'a> {
    pub fn new(subgroups: &'a [String]) -> Self {
        Self {
            subgroups,
            idx: 0,
            state: ScanState::AwaitingEmployee,
        }
    }

    /// Отметить строку-разрыв. Курсор не двигается:
    /// подряд идущие разрывы считаются одним.
    pub fn note_gap(&mut self) {
        self.state = ScanState::InGap;
    }

    /// Строка сотрудника: вернуть её подгруппу.
    /// Первый сотрудник после разрыва продвигает курсор,
    /// если тот ещё не на последней подгруппе.
    pub fn next_employee(&mut self) -> Option<&'a str> {
        if self.subgroups.is_empty() {
            return None;
        }
        if self.state == ScanState::InGap && self.idx < self.subgroups.len() - 1 {
            self.idx += 1;
        }
        self.state = ScanState::AwaitingEmployee;
        Some(self.subgroups[self.idx.min(self.subgroups.len() - 1)].as_str())
    }
}
