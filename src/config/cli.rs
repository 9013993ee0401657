use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "tdm")]
#[command(about = "Table de marque: matchs et classements depuis l'API de résultats")]
pub struct CliConfig {
    /// Remplace l'URL de base de l'API (sinon TDM_API_BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Liste tous les matchs
    Matches,
    /// Affiche un match par identifiant
    Match { id: String },
    /// Affiche le classement d'une poule ou d'un match
    Classement {
        #[arg(long, conflicts_with = "match_id", required_unless_present = "match_id")]
        poule: Option<String>,

        #[arg(long = "match", value_name = "ID")]
        match_id: Option<String>,
    },
}
