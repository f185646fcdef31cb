use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Show one page of the catalog")]
    List {
        /// 1-based page number
        #[arg(long, default_value = "1", value_parser = clap::value_parser!(u64).range(1..))]
        page: u64,

        #[command(flatten)]
        filter: FilterArgs,
    },

    #[command(about = "Load the catalog batch by batch, as infinite scroll would")]
    Browse {
        /// Batches to load before printing
        #[arg(long, default_value = "1", value_parser = clap::value_parser!(u64).range(1..))]
        batches: u64,

        #[command(flatten)]
        filter: FilterArgs,
    },

    #[command(about = "Show one record in detail")]
    Show {
        /// Record id (positive integer)
        id: String,
    },

    #[command(about = "Inspect or create the configuration file")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Print the effective configuration")]
    Show,

    #[command(about = "Write a default configuration file")]
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Case-insensitive name search
    #[arg(long)]
    pub search: Option<String>,

    /// Only records with this type (repeatable; any match passes)
    #[arg(long = "type", value_name = "NAME")]
    pub types: Vec<String>,
}
