// ==========================================
// Дашборд «Команды и клиенты» - JSON-пакет
// ==========================================
// Один документ со всеми данными страницы. Имена ключей и
// порядок групп/подгрупп контрактные: их читает скрипт страницы.
// ==========================================

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::{json, Map, Value};
use tracing::info;

use crate::config::tables::DEFAULT_WORKING_DAYS;
use crate::config::AppConfig;
use crate::domain::month::month_sort_key;
use crate::domain::record::{
    ClientHours, ClientMass, ClientSla, ClientTickets, DailyRecord, EmployeeMonthly,
    SubgroupMonthly,
};
use crate::engine::aggregate::{aggregate_monthly, build_hierarchy, month_index, Hierarchy};
use crate::engine::clients::ClientData;
use crate::error::BuildResult;

// ==========================================
// DashboardData - весь пакет страницы
// ==========================================
#[derive(Debug, Serialize)]
pub struct DashboardData {
    /// группа → подгруппа → сотрудники
    pub hierarchy: Value,
    /// группа → список подгрупп
    pub group_map: Value,
    /// подгруппа → группа
    pub sg_to_group: Value,
    pub months_ops: Vec<String>,
    pub months_cl: Vec<String>,
    pub clients: Vec<String>,
    pub teams_cl: Vec<String>,
    pub daily: Vec<DailyRecord>,
    pub sg_monthly: Vec<SubgroupMonthly>,
    pub emp_monthly: Vec<EmployeeMonthly>,
    pub cl_tzt: Vec<ClientHours>,
    pub cl_tickets: Vec<ClientTickets>,
    pub cl_sla: Vec<ClientSla>,
    pub cl_mass: Vec<ClientMass>,
    /// метка месяца → рабочих дней
    pub prod_calendar: Value,
}

/// Собрать пакет: проставить порядок месяцев, агрегировать,
/// вывести списки клиентов и календарь
pub fn assemble(
    cfg: &AppConfig,
    mut daily: Vec<DailyRecord>,
    mut clients: ClientData,
) -> DashboardData {
    // 1. операционные данные
    let hierarchy = build_hierarchy(&daily, &cfg.sheets);
    let (months_ops, ops_order) = month_index(daily.iter().map(|r| r.month.clone()));
    for record in &mut daily {
        record.month_order = ops_order.get(&record.month).copied().unwrap_or(0);
    }
    let (emp_monthly, sg_monthly) = aggregate_monthly(&daily, &ops_order, &cfg.prod_calendar);

    // 2. клиентские данные: календарь месяцев задаёт лист тзт,
    //    боковые листы могут ссылаться и на месяцы вне него (mo = 0)
    let (months_cl, cl_order) = month_index(clients.hours.iter().map(|r| r.ml.clone()));
    for record in &mut clients.hours {
        record.month_order = cl_order.get(&record.ml).copied().unwrap_or(0);
    }
    for record in &mut clients.tickets {
        record.month_order = cl_order.get(&record.ml).copied().unwrap_or(0);
    }
    for record in &mut clients.sla {
        record.month_order = cl_order.get(&record.ml).copied().unwrap_or(0);
    }
    for record in &mut clients.mass {
        record.month_order = cl_order.get(&record.ml).copied().unwrap_or(0);
    }

    // клиенты со всех листов: некоторые есть только в заявках или sla
    let mut client_names: BTreeSet<&str> = BTreeSet::new();
    client_names.extend(clients.hours.iter().map(|r| r.client.as_str()));
    client_names.extend(clients.tickets.iter().map(|r| r.client.as_str()));
    client_names.extend(clients.sla.iter().map(|r| r.client.as_str()));
    client_names.extend(clients.mass.iter().map(|r| r.client.as_str()));
    let client_list: Vec<String> = client_names.into_iter().map(str::to_string).collect();

    let team_names: BTreeSet<&str> = clients.hours.iter().map(|r| r.team.as_str()).collect();
    let teams_cl: Vec<String> = team_names.into_iter().map(str::to_string).collect();

    // 3. календарь на объединение месяцев обоих источников
    let mut all_months: Vec<String> = months_ops
        .iter()
        .chain(months_cl.iter())
        .cloned()
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect();
    all_months.sort_by_key(|label| month_sort_key(label));
    let mut calendar = Map::new();
    for month in &all_months {
        let days = cfg
            .prod_calendar
            .get(month)
            .copied()
            .unwrap_or(DEFAULT_WORKING_DAYS);
        calendar.insert(month.clone(), json!(days));
    }

    info!(
        daily = daily.len(),
        emp_monthly = emp_monthly.len(),
        sg_monthly = sg_monthly.len(),
        cl_tzt = clients.hours.len(),
        cl_tickets = clients.tickets.len(),
        cl_sla = clients.sla.len(),
        cl_mass = clients.mass.len(),
        clients = client_list.len(),
        "пакет собран"
    );

    DashboardData {
        hierarchy: hierarchy_value(&hierarchy),
        group_map: group_map_value(&hierarchy),
        sg_to_group: sg_to_group_value(&hierarchy),
        months_ops,
        months_cl,
        clients: client_list,
        teams_cl,
        daily,
        sg_monthly,
        emp_monthly,
        cl_tzt: clients.hours,
        cl_tickets: clients.tickets,
        cl_sla: clients.sla,
        cl_mass: clients.mass,
        prod_calendar: Value::Object(calendar),
    }
}

/// Записать пакет: компактный JSON, UTF-8 без экранирования кириллицы
pub fn write_json(data: &DashboardData, path: &Path) -> BuildResult<()> {
    let body = serde_json::to_string(data)?;
    fs::write(path, &body)?;
    info!(
        path = %path.display(),
        size_kb = body.len() / 1024,
        "JSON записан"
    );
    Ok(())
}

// Порядок ключей во всех трёх картах повторяет порядок конфигурации
fn hierarchy_value(hierarchy: &Hierarchy) -> Value {
    let mut groups = Map::new();
    for group in &hierarchy.groups {
        let mut subgroups = Map::new();
        for sg in &group.subgroups {
            subgroups.insert(sg.name.clone(), json!(sg.employees));
        }
        groups.insert(group.name.clone(), Value::Object(subgroups));
    }
    Value::Object(groups)
}

fn group_map_value(hierarchy: &Hierarchy) -> Value {
    let mut groups = Map::new();
    for group in &hierarchy.groups {
        let names: Vec<&str> = group.subgroups.iter().map(|sg| sg.name.as_str()).collect();
        groups.insert(group.name.clone(), json!(names));
    }
    Value::Object(groups)
}

fn sg_to_group_value(hierarchy: &Hierarchy) -> Value {
    let mut map = Map::new();
    for group in &hierarchy.groups {
        for sg in &group.subgroups {
            map.insert(sg.name.clone(), json!(group.name));
        }
    }
    Value::Object(map)
}
