use clap::Parser;
use punk_links::utils::error::PageError;
use punk_links::utils::{logger, validation::Validate};
use punk_links::{run_page, CliConfig, PageRun, TomlConfig};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting punk-links");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let result = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            match TomlConfig::from_file(path) {
                Ok(file_config) => run(&file_config).await,
                Err(e) => Err(e),
            }
        }
        None => run(&config).await,
    };

    match result {
        Ok(page) => report(&page),
        Err(e) => {
            tracing::error!(
                "❌ Page load failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            std::process::exit(e.exit_code());
        }
    }
}

async fn run<C>(config: &C) -> Result<PageRun, PageError>
where
    C: punk_links::core::ConfigProvider + Validate,
{
    config.validate()?;
    tracing::info!("✅ Configuration validated");
    run_page(config).await
}

fn report(page: &PageRun) {
    tracing::info!("✅ Page load finished ({})", page.state);
    for target in &page.snapshot.targets {
        println!(
            "#{}: {} bytes of markup, {} appended elements",
            target.id,
            target.inner_html.len(),
            target.child_count
        );
    }
    for file in &page.written_files {
        println!("📁 Wrote {}", file);
    }
}
