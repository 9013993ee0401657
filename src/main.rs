use anyhow::Context;
use clap::Parser;
use tdm_client::config::{BaseUrl, CliConfig, Command};
use tdm_client::core::display;
use tdm_client::utils::logger;
use tdm_client::{ApiClient, ScoreboardApi};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::info!("Starting tdm");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config).await {
        tracing::error!("command failed: {:#}", e);
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

async fn run(config: &CliConfig) -> anyhow::Result<()> {
    let base_url = BaseUrl::resolve(config.base_url.as_deref())
        .context("impossible de résoudre l'URL de base de l'API")?;
    tracing::info!("API base URL: {}", base_url);

    let client = ApiClient::new(base_url);
    let output = match &config.command {
        Command::Matches => {
            let matches = client.fetch_matches().await?;
            tracing::info!("{} match(s) charges", matches.len());
            display::render_matches(&matches)
        }
        Command::Match { id } => {
            let m = client.fetch_match_by_id(id).await?;
            display::render_match(&m)
        }
        Command::Classement { poule, match_id } => {
            let classement = match (poule, match_id) {
                (Some(code), _) => client.fetch_classement_by_poule(code).await?,
                (None, Some(id)) => client.fetch_classement_by_match(id).await?,
                // clap enforces one of the two
                (None, None) => unreachable!("clap requires --poule or --match"),
            };
            display::render_classement(&classement)?
        }
    };

    println!("{}", output);
    Ok(())
}
