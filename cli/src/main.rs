//! `todolist`: terminal front end for the todo service.

mod config;
mod logging;
mod render;
mod shell;
mod transport;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use todolist_core::{CreationController, ListController, RemoteTodoService, StatusFilter, TodoClient, TodoId};
use tracing::info;

use crate::render::render;
use crate::transport::UreqTransport;

#[derive(Parser)]
#[command(name = "todolist")]
#[command(about = "Create, filter, complete and delete todos on a todo service")]
struct Args {
    /// TOML config file (base_url, timeout_secs)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Todo service URL; overrides the config file and TODOLIST_BASE_URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show todos
    List {
        #[arg(long, default_value = "all")]
        filter: StatusFilter,
    },
    /// Add a todo
    Add { body: String },
    /// Flip a todo between pending and completed
    Toggle { id: TodoId },
    /// Delete a todo
    Delete { id: TodoId },
    /// Interactive session
    Shell,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();

    let config = config::resolve(args.config.as_deref(), args.base_url)?;
    info!(base_url = %config.base_url, "using todo service");
    let service = RemoteTodoService::new(
        TodoClient::new(&config.base_url),
        UreqTransport::new(Duration::from_secs(config.timeout_secs)),
    );

    let mut list = ListController::new();
    match args.command {
        Command::Shell => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            return shell::run(&service, stdin, &mut std::io::stdout()).await;
        }
        Command::List { filter } => {
            list.load(&service).await.context("could not load todos")?;
            list.set_filter(filter);
        }
        Command::Add { body } => {
            let mut creation = CreationController::new();
            creation.update_draft(body);
            let item = creation
                .submit_to(&service, &mut list)
                .await
                .context("could not add todo")?;
            info!(id = %item.id, "added");
        }
        Command::Toggle { id } => {
            list.load(&service).await.context("could not load todos")?;
            list.toggle_status(&service, id)
                .await
                .with_context(|| format!("could not toggle {id}"))?;
        }
        Command::Delete { id } => {
            list.load(&service).await.context("could not load todos")?;
            list.delete_item(&service, id)
                .await
                .with_context(|| format!("could not delete {id}"))?;
        }
    }
    print!("{}", render(&list));
    Ok(())
}
