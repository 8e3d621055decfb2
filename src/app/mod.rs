// ==========================================
// Дашборд «Команды и клиенты» - цикл сборки
// ==========================================
// Одна сборка: две книги → извлечение → пакет → JSON → HTML →
// публикация. Режим наблюдения перезапускает сборку при смене
// mtime любого из источников.
// ==========================================

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant, SystemTime};

use tracing::{error, info};

use crate::config::{AppConfig, Paths};
use crate::engine::clients::ClientExtractor;
use crate::engine::normalize::OpsExtractor;
use crate::error::BuildResult;
use crate::output::{html, payload};
use crate::workbook::load_workbook;

/// Одна полная сборка
pub fn run_build(cfg: &AppConfig, paths: &Paths) -> BuildResult<()> {
    let started = Instant::now();

    info!(path = %paths.ops_file.display(), "разбор операционной книги");
    let ops_workbook = load_workbook(&paths.ops_file)?;
    let daily = OpsExtractor::new(cfg).extract_workbook(&ops_workbook);

    info!(path = %paths.client_file.display(), "разбор клиентской книги");
    let client_workbook = load_workbook(&paths.client_file)?;
    let clients = ClientExtractor::new(cfg).extract_workbook(&client_workbook);

    let data = payload::assemble(cfg, daily, clients);
    payload::write_json(&data, &paths.json_out)?;
    html::build_html(paths)?;
    html::copy_to_share(paths);

    info!(elapsed_s = started.elapsed().as_secs_f64(), "сборка завершена");
    Ok(())
}

/// Режим наблюдения: пересборка при изменении источников.
///
/// Ошибка первой сборки останавливает запуск; ошибка любой
/// последующей логируется, и цикл живёт дальше.
pub fn watch(cfg: &AppConfig, paths: &Paths, interval: Duration) -> BuildResult<()> {
    let sources = [paths.ops_file.clone(), paths.client_file.clone()];
    info!(
        files = sources.len(),
        interval_s = interval.as_secs(),
        "наблюдение за источниками"
    );

    run_build(cfg, paths)?;

    let mut last_mtimes: HashMap<PathBuf, Option<SystemTime>> = sources
        .iter()
        .map(|path| (path.clone(), mtime(path)))
        .collect();

    loop {
        thread::sleep(interval);

        let mut changed = false;
        for path in &sources {
            let current = mtime(path);
            if current.is_none() {
                continue;
            }
            if last_mtimes.get(path) != Some(&current) {
                changed = true;
                last_mtimes.insert(path.clone(), current);
            }
        }

        if changed {
            info!("изменение источников, пересборка");
            if let Err(err) = run_build(cfg, paths) {
                error!(error = %err, "ошибка сборки, цикл продолжается");
            }
        }
    }
}

fn mtime(path: &Path) -> Option<SystemTime> {
    path.metadata().and_then(|m| m.modified()).ok()
}
