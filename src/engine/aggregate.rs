// ==========================================
// Дашборд «Команды и клиенты» - агрегация
// ==========================================
// Два прохода по плоскому списку: (сотрудник, подгруппа, месяц)
// и (подгруппа, месяц). Производные метрики считаются после
// суммирования и защищены от деления на ноль.
// ==========================================

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::config::tables::{DEFAULT_WORKING_DAYS, HOURS_PER_DAY};
use crate::config::SheetConfig;
use crate::domain::month::month_sort_key;
use crate::domain::record::{DailyRecord, EmployeeMonthly, SubgroupMonthly};
use crate::engine::coerce::round_to;

// ==========================================
// Hierarchy - группы → подгруппы → сотрудники
// ==========================================
// Порядок групп и подгрупп повторяет конфигурацию листов,
// сотрудники отсортированы по алфавиту
#[derive(Debug, Clone)]
pub struct Hierarchy {
    pub groups: Vec<GroupNode>,
    pub sg_to_group: HashMap<String, String>,
}

#[derive(Debug, Clone)]
pub struct GroupNode {
    pub name: String,
    pub subgroups: Vec<SubgroupNode>,
}

#[derive(Debug, Clone)]
pub struct SubgroupNode {
    pub name: String,
    pub employees: Vec<String>,
}

/// Иерархия по фактическим записям: подгруппы без данных не выводятся
pub fn build_hierarchy(daily: &[DailyRecord], sheets: &[SheetConfig]) -> Hierarchy {
    let mut sg_employees: HashMap<&str, BTreeSet<&str>> = HashMap::new();
    let mut sg_to_group: HashMap<String, String> = HashMap::new();
    for record in daily {
        sg_employees
            .entry(&record.subgroup)
            .or_default()
            .insert(&record.employee);
        sg_to_group.insert(record.subgroup.clone(), record.group.clone());
    }

    // группы в порядке первого появления в конфигурации
    let mut groups: Vec<GroupNode> = Vec::new();
    let mut group_index: HashMap<String, usize> = HashMap::new();
    for cfg in sheets {
        group_index.entry(cfg.group.clone()).or_insert_with(|| {
            groups.push(GroupNode {
                name: cfg.group.clone(),
                subgroups: Vec::new(),
            });
            groups.len() - 1
        });
    }

    for cfg in sheets {
        let Some(&gi) = group_index.get(&cfg.group) else {
            continue;
        };
        let group = &mut groups[gi];
        for sg in &cfg.subgroups {
            if let Some(employees) = sg_employees.get(sg.as_str()) {
                if !group.subgroups.iter().any(|node| &node.name == sg) {
                    group.subgroups.push(SubgroupNode {
                        name: sg.clone(),
                        employees: employees.iter().map(|e| e.to_string()).collect(),
                    });
                }
            }
        }
    }

    Hierarchy {
        groups,
        sg_to_group,
    }
}

/// Упорядоченный список меток месяцев и их порядковые номера (с единицы)
pub fn month_index(labels: impl Iterator<Item = String>) -> (Vec<String>, HashMap<String, usize>) {
    let unique: BTreeSet<String> = labels.collect();
    let mut months: Vec<String> = unique.into_iter().collect();
    months.sort_by_key(|label| month_sort_key(label));
    let order = months
        .iter()
        .enumerate()
        .map(|(i, label)| (label.clone(), i + 1))
        .collect();
    (months, order)
}

// ==========================================
// Суммы одного ключа агрегации
// ==========================================
#[derive(Default)]
struct Sums {
    hours: f64,
    tickets: i64,
    tasks: i64,
    reg_tickets: i64,
    reg_tasks: i64,
    visits: i64,
}

impl Sums {
    fn add(&mut self, record: &DailyRecord) {
        self.hours += record.hours;
        self.tickets += record.tickets_resolved;
        self.tasks += record.tasks_resolved;
        self.reg_tickets += record.reg_tickets_resolved;
        self.reg_tasks += record.reg_tasks_resolved;
        self.visits += record.site_visits;
    }
}

// Производные метрики: утилизация и производительность на час.
// Нулевой знаменатель даёт ноль, а не ошибку и не NaN.
fn utilization(hours: f64, norm: f64) -> f64 {
    if norm > 0.0 {
        round_to(hours / norm * 100.0, 1)
    } else {
        0.0
    }
}

fn per_hour(count: i64, hours: f64) -> f64 {
    if hours > 0.0 {
        round_to(count as f64 / hours, 4)
    } else {
        0.0
    }
}

fn working_days(calendar: &HashMap<String, u32>, month: &str) -> f64 {
    calendar.get(month).copied().unwrap_or(DEFAULT_WORKING_DAYS) as f64
}

/// Месячные агрегаты двух уровней.
///
/// Результаты отсортированы по ключу группировки — порядок
/// детерминирован для страницы и тестов.
pub fn aggregate_monthly(
    daily: &[DailyRecord],
    month_order: &HashMap<String, usize>,
    calendar: &HashMap<String, u32>,
) -> (Vec<EmployeeMonthly>, Vec<SubgroupMonthly>) {
    type EmpKey = (String, String, String);
    type SgKey = (String, String);

    let mut emp_sums: BTreeMap<EmpKey, Sums> = BTreeMap::new();
    let mut emp_group: HashMap<EmpKey, String> = HashMap::new();
    let mut sg_sums: BTreeMap<SgKey, Sums> = BTreeMap::new();
    let mut sg_group: HashMap<SgKey, String> = HashMap::new();
    let mut sg_employees: HashMap<SgKey, BTreeSet<String>> = HashMap::new();
    let mut sg_dates: HashMap<SgKey, BTreeSet<String>> = HashMap::new();

    for record in daily {
        let emp_key = (
            record.employee.clone(),
            record.subgroup.clone(),
            record.month.clone(),
        );
        emp_sums.entry(emp_key.clone()).or_default().add(record);
        emp_group.insert(emp_key, record.group.clone());

        let sg_key = (record.subgroup.clone(), record.month.clone());
        sg_sums.entry(sg_key.clone()).or_default().add(record);
        sg_group.insert(sg_key.clone(), record.group.clone());
        sg_employees
            .entry(sg_key.clone())
            .or_default()
            .insert(record.employee.clone());
        sg_dates.entry(sg_key).or_default().insert(record.date.clone());
    }

    let mut emp_monthly = Vec::with_capacity(emp_sums.len());
    for ((employee, subgroup, month), sums) in &emp_sums {
        let hours = round_to(sums.hours, 1);
        let norm = working_days(calendar, month) * HOURS_PER_DAY;
        let key = (employee.clone(), subgroup.clone(), month.clone());
        emp_monthly.push(EmployeeMonthly {
            employee: employee.clone(),
            subgroup: subgroup.clone(),
            group: emp_group[&key].clone(),
            month: month.clone(),
            month_order: month_order.get(month).copied().unwrap_or(0),
            tzt: hours,
            norm: norm as i64,
            util: utilization(hours, norm),
            tk_b: sums.tickets,
            ts_b: sums.tasks,
            tk_r: sums.reg_tickets,
            ts_r: sums.reg_tasks,
            tph_b: per_hour(sums.tickets, hours),
            tph_z: per_hour(sums.tasks, hours),
            tph_all: per_hour(sums.tickets + sums.tasks, hours),
            vz: sums.visits,
        });
    }

    let mut sg_monthly = Vec::with_capacity(sg_sums.len());
    for ((subgroup, month), sums) in &sg_sums {
        let key = (subgroup.clone(), month.clone());
        let headcount = sg_employees[&key].len();
        let hours = round_to(sums.hours, 1);
        let norm = working_days(calendar, month) * HOURS_PER_DAY * headcount as f64;
        sg_monthly.push(SubgroupMonthly {
            subgroup: subgroup.clone(),
            group: sg_group[&key].clone(),
            month: month.clone(),
            month_order: month_order.get(month).copied().unwrap_or(0),
            tzt: hours,
            norm: norm as i64,
            util: utilization(hours, norm),
            tk_b: sums.tickets,
            ts_b: sums.tasks,
            tk_r: sums.reg_tickets,
            ts_r: sums.reg_tasks,
            employees: headcount,
            days: sg_dates[&key].len(),
            tph_b: per_hour(sums.tickets, hours),
            tph_z: per_hour(sums.tasks, hours),
            tph_all: per_hour(sums.tickets + sums.tasks, hours),
            vz: sums.visits,
        });
    }

    (emp_monthly, sg_monthly)
}
