use clap::Parser;
use hello_client::utils::{logger, validation::Validate};
use hello_client::{ActionEngine, CliConfig, ClientError, MemoryPage, PageConfig};

fn fail(e: &ClientError) -> ! {
    tracing::error!("❌ {}", e);
    eprintln!("❌ {}", e);
    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = cli.validate() {
        fail(&e);
    }

    let config: PageConfig = match cli.page_config() {
        Ok(config) => config,
        Err(e) => fail(&e),
    };
    if let Err(e) = config.validate() {
        fail(&e);
    }

    // 把命令列的值填進頁面輸入欄位，沒給就是空欄位
    let page = MemoryPage::new()
        .with_input(&config.greeting.get.input, cli.name.as_deref().unwrap_or(""))
        .with_input(
            &config.greeting.post.input,
            cli.post_name.as_deref().unwrap_or(""),
        );

    let engine = match ActionEngine::from_config(&config) {
        Ok(engine) => engine,
        Err(e) => fail(&e),
    };

    let actions = if cli.actions.is_empty() {
        engine.action_names()
    } else {
        cli.actions.clone()
    };

    tracing::info!("Talking to {}", config.server.base_url);
    let results = engine.dispatch_all(&actions, &page).await;

    let mut exit_code = 0;
    for (action, result) in results {
        match result {
            Ok(outcome) => println!("{}: {}", outcome.output(), outcome.content()),
            Err(e) => {
                tracing::error!("❌ {} failed: {}", action, e);
                eprintln!("❌ {}: {}", action, e);
                exit_code = exit_code.max(e.exit_code());
            }
        }
    }

    if exit_code > 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}
