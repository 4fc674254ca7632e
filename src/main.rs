use clap::Parser;
use sujets_client::utils::{logger, validation::Validate};
use sujets_client::{
    BufferedList, CliConfig, Command, HttpTopicApi, LoadOutcome, SubmitOutcome, SujetsError,
    TerminalList, TextInput, TopicListController,
};
use tokio::io::{AsyncBufReadExt, BufReader};

fn exit_with(e: &SujetsError) -> ! {
    tracing::error!("❌ {}", e);
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(1);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => exit_with(&e),
    };

    let verbose = settings.logging.verbose.unwrap_or(false);
    if settings.logging.json.unwrap_or(false) {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    if let Err(e) = settings.validate() {
        exit_with(&e);
    }
    tracing::debug!("Settings: {:?}", settings);

    let api = match HttpTopicApi::from_config(&settings.server) {
        Ok(api) => api,
        Err(e) => exit_with(&e),
    };
    tracing::info!("📡 Topics endpoint: {}", api.endpoint());

    match cli.command {
        Command::List => {
            let controller =
                TopicListController::new(api, TerminalList::new(std::io::stdout()), TextInput::new());

            if controller.start().await == LoadOutcome::Unchanged {
                eprintln!("❌ Could not load topics (run with --verbose for details)");
                std::process::exit(2);
            }
        }
        Command::Add { titre } => {
            // 列表可能重繪兩次 (載入、送出後重新載入)，結束時只印最後一次
            let controller =
                TopicListController::new(api, BufferedList::new(), TextInput::with_value(titre));

            controller.start().await;
            match controller.submit().await {
                SubmitOutcome::Skipped => tracing::info!("Nothing to submit, title is blank"),
                SubmitOutcome::Rejected => tracing::warn!("⚠️ Topic was not created"),
                SubmitOutcome::Created(_) => {}
            }
            controller.list().write_to(&mut std::io::stdout().lock())?;
        }
        Command::Interactive => {
            let controller = TopicListController::new(
                api,
                TerminalList::new(std::io::stdout()).with_heading("── sujets ──"),
                TextInput::new(),
            );
            controller.start().await;

            // 每一行輸入等同一次表單送出
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Some(line) = lines.next_line().await? {
                controller.input().set_value(line);
                controller.submit().await;
            }
        }
    }

    Ok(())
}
