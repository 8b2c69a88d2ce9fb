use chef_menu::utils::error::ErrorSeverity;
use chef_menu::utils::logger;
use chef_menu::{CliConfig, MenuError, Session, Shell};
use clap::Parser;

fn start_session(config: &CliConfig) -> Result<Session, MenuError> {
    let toml = config.load_toml()?;
    if let Some(path) = &config.config {
        tracing::info!("📁 Loaded configuration from: {}", path.display());
    }

    let settings = config.resolve(toml.as_ref())?;
    tracing::debug!("Resolved settings: {:?}", settings);

    let seed = toml.map(|t| t.dishes).unwrap_or_default();
    Session::with_seed(settings, &seed)
}

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("🍽️ Starting chef-menu session");

    let session = match start_session(&config) {
        Ok(session) => session,
        Err(e) => {
            tracing::error!(
                "❌ Failed to start session: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(exit_code(&e));
        }
    };

    let mut shell = Shell::new(session);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    if let Err(e) = shell.run(stdin.lock(), &mut stdout) {
        tracing::error!("❌ Session aborted: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(exit_code(&e));
    }
}

// 根據錯誤嚴重程度決定退出碼
fn exit_code(e: &MenuError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    }
}
