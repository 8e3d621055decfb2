// ==========================================
// Дашборд «Команды и клиенты» - сборка HTML
// ==========================================
// Страница склеивается из трёх фрагментов (CSS, тело, скрипт)
// вокруг готового JSON. Копия уходит в каталог руководителей
// best-effort: неудача публикации не валит сборку.
// ==========================================

use std::fs;

use tracing::{info, warn};

use crate::config::Paths;
use crate::error::BuildResult;

/// Собрать dashboard_v7.html из фрагментов и записанного JSON.
/// Отсутствующий фрагмент — ошибка цикла сборки.
pub fn build_html(paths: &Paths) -> BuildResult<()> {
    let css = fs::read_to_string(&paths.css_fragment)?;
    let body = fs::read_to_string(&paths.body_fragment)?;
    let js = fs::read_to_string(&paths.js_fragment)?;
    let data_json = fs::read_to_string(&paths.json_out)?;

    let html = format!(
        r#"<!DOCTYPE html>
<html lang="ru">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<meta http-equiv="refresh" content="60">
<title>Информационная панель</title>
<script src="https://cdn.jsdelivr.net/npm/chart.js"></script>
<style>
{css}
</style>
</head>
{body}
<script>
const D = {data_json};
{js}
</script>
</html>"#
    );

    fs::write(&paths.html_out, &html)?;
    info!(
        path = %paths.html_out.display(),
        size_kb = html.len() / 1024,
        "HTML записан"
    );
    Ok(())
}

/// Скопировать страницу в каталог публикации.
/// Ошибка только логируется: синхронизируемый каталог может
/// быть временно недоступен.
pub fn copy_to_share(paths: &Paths) {
    match try_copy(paths) {
        Ok(()) => info!(path = %paths.share_html.display(), "копия опубликована"),
        Err(err) => warn!(
            path = %paths.share_html.display(),
            error = %err,
            "публикация не удалась"
        ),
    }
}

fn try_copy(paths: &Paths) -> std::io::Result<()> {
    if let Some(dir) = paths.share_html.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::copy(&paths.html_out, &paths.share_html)?;
    Ok(())
}
