// src/cli/mod.rs
pub mod args;
pub mod bookmark_commands;
pub mod display;
pub mod error;

use crate::application::services::BookmarkService;
use crate::cli::args::{Cli, Commands};
use crate::cli::error::{CliError, CliResult};
use std::sync::Arc;
use tracing::instrument;

#[instrument(skip_all, level = "debug")]
pub async fn execute_command(cli: Cli, service: Arc<dyn BookmarkService>) -> CliResult<()> {
    let service = service.as_ref();

    match cli.command {
        Some(Commands::Add {
            url,
            tags,
            title,
            description,
            share,
        }) => bookmark_commands::add(service, url, tags, title, description, share).await,
        Some(Commands::List {
            query,
            tag,
            is_json,
        }) => bookmark_commands::list(service, query, tag, is_json).await,
        Some(Commands::Show { id }) => bookmark_commands::show(service, id).await,
        Some(Commands::Open { id }) => bookmark_commands::open(service, id).await,
        Some(Commands::Update {
            id,
            url,
            title,
            description,
            tags,
        }) => bookmark_commands::update(service, id, url, title, description, tags).await,
        Some(Commands::Delete { ids }) => bookmark_commands::delete(service, ids).await,
        Some(Commands::Clear { yes }) => bookmark_commands::clear(service, yes).await,
        Some(Commands::Export { output }) => bookmark_commands::export(service, output).await,
        Some(Commands::Import { file }) => bookmark_commands::import(service, &file).await,
        None => Err(CliError::InvalidInput(
            "no command given; see --help".to_string(),
        )),
    }
}
