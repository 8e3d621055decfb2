// ==========================================
// Дашборд «Команды и клиенты» - виды полей и раскладка
// ==========================================
// Закрытые перечисления вместо строковых идентификаторов.
// Раскладка блока выводится из его строки заголовков и
// детерминированно разрешает неоднозначные колонки.
// ==========================================

use std::fmt;

// ==========================================
// HeaderKind - сырой вид колонки по тексту заголовка
// ==========================================
// RegCombined и Zni — маркеры неоднозначных колонок,
// разрешаются при построении раскладки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderKind {
    /// «решенные заявки»
    Tickets,
    /// «решенные задачи»
    Tasks,
    /// «решенные рег.заявки»
    RegTickets,
    /// «решенные рег.задачи»
    RegTasks,
    /// «выезды»
    SiteVisits,
    /// «тзт»
    Hours,
    /// «рег. заявки/задачи» — объединённая колонка, неделимая сумма
    RegCombined,
    /// «решенные зни»
    Zni,
}

// ==========================================
// Field - итоговый вид колонки в раскладке
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Tickets,
    Tasks,
    RegTickets,
    RegTasks,
    SiteVisits,
    Hours,
    /// Колонка читается, но не переносится в запись
    /// (например «решенные зни» при отдельной колонке рег.задач)
    Skip,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Tickets => "tk_b",
            Field::Tasks => "ts_b",
            Field::RegTickets => "tk_r",
            Field::RegTasks => "ts_r",
            Field::SiteVisits => "vz",
            Field::Hours => "tzt",
            Field::Skip => "-",
        };
        write!(f, "{}", name)
    }
}

// ==========================================
// FieldLayout - раскладка колонок одного блока
// ==========================================
// Шаг повторения (stride) = число полей: столько колонок
// занимает одна дата внутри блока
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldLayout {
    fields: Vec<Field>,
}

impl FieldLayout {
    /// Раскладка по умолчанию: блок без распознанных заголовков.
    /// Осознанная деградация, не ошибка: старые листы без шапки
    /// имеют ровно такой набор из пяти колонок.
    pub fn default_layout() -> Self {
        Self {
            fields: vec![
                Field::Tickets,
                Field::Tasks,
                Field::RegTickets,
                Field::RegTasks,
                Field::Hours,
            ],
        }
    }

    /// Построить раскладку из сырых видов колонок.
    ///
    /// Разрешение неоднозначностей:
    /// - объединённая «рег. заявки/задачи» всегда идёт в рег.заявки:
    ///   сумму не разделить, рег.задачи берутся только из отдельной колонки;
    /// - «решенные зни» считается за рег.задачи только при отсутствии
    ///   отдельной колонки рег.задач, иначе колонка пропускается.
    pub fn resolve(raw: Vec<HeaderKind>) -> Self {
        if raw.is_empty() {
            return Self::default_layout();
        }

        let has_reg_tasks = raw.contains(&HeaderKind::RegTasks);
        let fields = raw
            .into_iter()
            .map(|kind| match kind {
                HeaderKind::Tickets => Field::Tickets,
                HeaderKind::Tasks => Field::Tasks,
                HeaderKind::RegTickets => Field::RegTickets,
                HeaderKind::RegTasks => Field::RegTasks,
                HeaderKind::SiteVisits => Field::SiteVisits,
                HeaderKind::Hours => Field::Hours,
                HeaderKind::RegCombined => Field::RegTickets,
                HeaderKind::Zni => {
                    if has_reg_tasks {
                        Field::Skip
                    } else {
                        Field::RegTasks
                    }
                }
            })
            .collect();

        Self { fields }
    }

    /// Число колонок на одну дату
    pub fn stride(&self) -> usize {
        self.fields.len()
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn contains(&self, field: Field) -> bool {
        self.fields.contains(&field)
    }
}
