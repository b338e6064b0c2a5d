//! Command-line driver for the message timeline.
//!
//! Usage:
//!
//! ```text
//! crieur post --id <uuid> --author <name> --text <text>
//! crieur edit --id <uuid> --text <text>
//! crieur timeline --author <name>
//! ```
//!
//! Messages are stored in `PostgreSQL`; the connection is configured with
//! `CRIEUR_DATABASE_URL` (see [`crieur::config`]). Timelines are printed to
//! standard output as a JSON array; logs go to standard error.

use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use crieur::{
    config::CrieurConfig,
    messaging::{
        adapters::postgres::{PostgresMessageRepository, build_pool},
        domain::MessageId,
        services::{
            EditMessageHandler, EditMessageRequest, PostMessageHandler, PostMessageRequest,
            ViewTimelineHandler, ViewTimelineRequest,
        },
    },
    observability::init_tracing,
};
use eyre::WrapErr;
use mockable::DefaultClock;
use uuid::Uuid;

#[derive(Debug, Parser)]
#[command(name = "crieur", version, about = "Post messages and read timelines")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Post a new message.
    Post {
        /// Identifier chosen for the message.
        #[arg(long)]
        id: Uuid,
        /// Author name.
        #[arg(long)]
        author: String,
        /// Message text, at most 280 characters.
        #[arg(long)]
        text: String,
    },
    /// Replace the text of an existing message.
    Edit {
        /// Identifier of the message to edit.
        #[arg(long)]
        id: Uuid,
        /// New message text.
        #[arg(long)]
        text: String,
    },
    /// Print an author's timeline, newest first.
    Timeline {
        /// Author name.
        #[arg(long)]
        author: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = match CrieurConfig::load() {
        Ok(config) => config,
        Err(err) => {
            let _ignored = writeln!(std::io::stderr(), "crieur: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = init_tracing(config.log_format) {
        let _ignored = writeln!(std::io::stderr(), "crieur: {err}");
        return ExitCode::FAILURE;
    }

    match run(cli.command, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(report) => {
            tracing::error!("command failed: {report:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command, config: &CrieurConfig) -> eyre::Result<()> {
    let database_url = config.require_database_url()?;
    let pool = build_pool(database_url, config.max_pool_size)
        .wrap_err("connect to PostgreSQL")?;
    let repository = Arc::new(PostgresMessageRepository::new(pool));
    let clock = Arc::new(DefaultClock);

    match command {
        Command::Post { id, author, text } => {
            let handler = PostMessageHandler::new(repository, clock);
            handler
                .handle(PostMessageRequest::new(MessageId::from_uuid(id), author, text))
                .await
                .wrap_err("post message")?;
        }
        Command::Edit { id, text } => {
            let handler = EditMessageHandler::new(repository);
            handler
                .handle(EditMessageRequest::new(MessageId::from_uuid(id), text))
                .await
                .wrap_err("edit message")?;
        }
        Command::Timeline { author } => {
            let handler = ViewTimelineHandler::new(repository, clock);
            let entries = handler
                .handle(ViewTimelineRequest::new(author))
                .await
                .wrap_err("view timeline")?;
            let mut stdout = std::io::stdout().lock();
            serde_json::to_writer_pretty(&mut stdout, &entries)?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}
