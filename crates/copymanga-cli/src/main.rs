#[macro_use]
extern crate log;

mod fetch;
mod run;

use clap::{Parser, Subcommand, ValueEnum};
use copymanga::config::Config;
use copymanga_lib::models::ChapterKind;

#[derive(Parser)]
#[clap(version, about)]
struct Opts {
    /// Path to config file
    #[clap(long)]
    config: Option<String>,
    #[clap(subcommand)]
    subcmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch and print the chapter list of a comic
    Chapters { content_id: String },
    /// Fetch and print the image urls of a chapter
    Pages {
        content_id: String,
        chapter_id: String,
    },
    /// Parse a raw chapter title
    Title {
        raw: String,
        #[clap(long, value_enum, default_value_t = Kind::Normal)]
        kind: Kind,
    },
    /// Print the timestamp embedded in a chapter id
    Timestamp { uuid: String },
    /// Decrypt an encrypted payload
    Decrypt {
        #[clap(long)]
        key: String,
        payload: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Kind {
    Normal,
    OneShot,
    Special,
}

impl From<Kind> for ChapterKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Normal => ChapterKind::Normal,
            Kind::OneShot => ChapterKind::OneShot,
            Kind::Special => ChapterKind::Special,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let filter = match std::env::var("COPYMANGA_LOG") {
        Ok(level) => format!("copymanga={level},copymanga_cli={level}"),
        Err(_) => "warn".to_string(),
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let opts: Opts = Opts::parse();

    match opts.subcmd {
        Command::Chapters { content_id } => {
            let config = Config::open(opts.config)?;
            debug!("config: {:?}", config);
            run::chapters(config, &content_id).await?
        }
        Command::Pages {
            content_id,
            chapter_id,
        } => {
            let config = Config::open(opts.config)?;
            debug!("config: {:?}", config);
            run::pages(config, &content_id, &chapter_id).await?
        }
        Command::Title { raw, kind } => run::title(&raw, kind.into())?,
        Command::Timestamp { uuid } => run::timestamp(&uuid)?,
        Command::Decrypt { key, payload } => run::decrypt(&key, &payload)?,
    }

    Ok(())
}
