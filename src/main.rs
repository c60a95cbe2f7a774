use clap::Parser;
use secret_santa::app::{export, DrawFlow, FixedAnswer, StdinConfirm, TerminalRenderer};
use secret_santa::core::ConfigProvider;
use secret_santa::utils::{logger, validation::Validate};
use secret_santa::{CliConfig, DrawEngine, LocalStorage, RosterConfig, SantaError};
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting secret-santa CLI");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config).await {
        tracing::error!(
            "❌ Draw failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("💡 {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        std::process::exit(e.severity().exit_code());
    }

    Ok(())
}

async fn run(config: &CliConfig) -> Result<(), SantaError> {
    // 驗證命令列參數
    if let Err(e) = config.validate() {
        eprintln!("❌ {}", e.user_friendly_message());
        return Err(e);
    }

    let storage = LocalStorage::new(".".to_string());

    // 載入名單並套用命令列覆蓋設定
    let mut roster = match &config.roster {
        Some(path) => {
            tracing::info!("📁 Loading roster from: {}", path);
            RosterConfig::load(&storage, path).await?
        }
        None => RosterConfig::default(),
    };
    config.apply_to(&mut roster);

    if let Err(e) = roster.validate() {
        eprintln!("❌ {}", e.user_friendly_message());
        return Err(e);
    }

    let language = roster.language();
    let mut session = roster.to_session();
    let mut engine = DrawEngine::from_seed(roster.seed()).with_max_attempts(roster.max_attempts());
    let mut renderer = TerminalRenderer::new(std::io::stdout(), language);

    let flow = DrawFlow {
        language,
        reveal_delay: Duration::from_millis(roster.reveal_delay_ms()),
        reveal: !config.no_reveal,
    };

    let assignment = if config.batch {
        flow.run(&mut session, &mut engine, &mut renderer, &mut FixedAnswer(false))
            .await?
    } else {
        let mut confirm = StdinConfirm::new(std::io::stdin().lock(), std::io::stdout());
        flow.run(&mut session, &mut engine, &mut renderer, &mut confirm)
            .await?
    };

    let Some(assignment) = assignment else {
        println!("{}", language.messages().draw_discarded);
        return Ok(());
    };

    if let Some(output) = &config.output {
        export::export_assignment(&storage, output, &assignment, session.registry()).await?;
        println!("📁 {} {}", language.messages().saved_to, output);
    }

    Ok(())
}
