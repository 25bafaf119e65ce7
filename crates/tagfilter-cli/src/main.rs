mod commands;
mod html;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tagfilter")]
#[command(about = "Inspect fragment-driven tag filters on static post listings")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the active tags encoded in a fragment, as JSON
    Parse {
        /// Fragment, e.g. "#rust,web"
        fragment: String,
    },

    /// Print the fragment after toggling a tag
    Toggle {
        /// Current fragment ("" for none)
        fragment: String,
        /// Tag to add or remove
        tag: String,
    },

    /// Show which posts and tags a fragment selects on an HTML page
    Preview {
        /// Path to the HTML page
        page: PathBuf,

        /// Fragment the page is opened with
        #[arg(short, long, default_value = "")]
        fragment: String,

        /// Tag clicks to replay after load (repeatable)
        #[arg(long = "click")]
        clicks: Vec<String>,

        /// Filter config (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List declared tags on an HTML page with post counts
    Tags {
        /// Path to the HTML page
        page: PathBuf,

        /// Filter config (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { fragment } => {
            commands::fragment::parse(&fragment)?;
        }

        Commands::Toggle { fragment, tag } => {
            commands::fragment::toggle(&fragment, &tag)?;
        }

        Commands::Preview {
            page,
            fragment,
            clicks,
            config,
            json,
        } => {
            commands::preview::run(&page, &fragment, &clicks, config.as_deref(), json)?;
        }

        Commands::Tags { page, config } => {
            commands::tags::run(&page, config.as_deref())?;
        }
    }

    Ok(())
}
