use crate::prelude::*;
use clap::Parser;
use std::path::PathBuf;

mod classify;
mod config;
mod design;
mod error;
mod input;
mod prelude;
mod render;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Classify miRNA FASTA records and design stem-loop RT-qPCR primer pairs"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Path to a TOML file with primer settings
    #[clap(long, env = "MIRPRIMER_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Forward primer prefix, overrides the config file
    #[clap(long, env = "MIRPRIMER_PREFIX", global = true)]
    prefix: Option<String>,

    /// Stem-loop RT primer suffix, overrides the config file
    #[clap(long, env = "MIRPRIMER_SUFFIX", global = true)]
    suffix: Option<String>,

    /// Whether to display additional information.
    #[clap(long, env = "MIRPRIMER_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Design primer pairs for every sequence line of one or more records
    Design(crate::design::DesignOptions),

    /// Print the category of each given line
    Classify(crate::classify::ClassifyOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Design(options) => crate::design::run(options, app.global).await,
        SubCommands::Classify(options) => crate::classify::run(options, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
