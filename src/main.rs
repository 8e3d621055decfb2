// ==========================================
// Дашборд «Команды и клиенты» - точка входа
// ==========================================
// Разовая сборка либо режим наблюдения.
// Отсутствие исходных книг — немедленный выход:
// предусловие не ретраится.
// ==========================================

use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::Parser;
use tracing::{error, info};

use dashboard_builder::{app, config::Paths, logging, AppConfig};

#[derive(Parser)]
#[command(
    name = "dashboard-builder",
    version,
    about = "Сборщик дашборда «Команды и клиенты»"
)]
struct Cli {
    /// Следить за изменениями источников и пересобирать
    #[arg(long, short)]
    watch: bool,

    /// Интервал проверки источников, секунды
    #[arg(long, short, default_value_t = 30)]
    interval: u64,

    /// Путь к операционной книге (ежедневные отчёты)
    #[arg(long)]
    ops_file: Option<PathBuf>,

    /// Путь к клиентской книге (ежемесячный отчёт)
    #[arg(long)]
    client_file: Option<PathBuf>,

    /// Каталог результатов и фрагментов шаблона
    #[arg(long)]
    out_dir: Option<PathBuf>,
}

fn main() {
    logging::init();
    let cli = Cli::parse();

    info!("==================================================");
    info!("{}", dashboard_builder::APP_NAME);
    info!("версия: {}", dashboard_builder::VERSION);
    info!("==================================================");

    let mut paths = Paths::default_locations();
    if let Some(dir) = &cli.out_dir {
        paths = paths.with_out_dir(dir);
    }
    if let Some(ops) = cli.ops_file {
        paths.ops_file = ops;
    }
    if let Some(client) = cli.client_file {
        paths.client_file = client;
    }

    // Предусловие: обе книги на месте
    for path in [&paths.ops_file, &paths.client_file] {
        if !path.exists() {
            error!(path = %path.display(), "исходный файл не найден");
            process::exit(1);
        }
    }

    let cfg = AppConfig::production();

    let result = if cli.watch {
        app::watch(&cfg, &paths, Duration::from_secs(cli.interval))
    } else {
        app::run_build(&cfg, &paths)
    };

    if let Err(err) = result {
        error!(error = %err, "сборка не удалась");
        process::exit(1);
    }
}
