// src/cli/bookmark_commands.rs
use crate::application::services::BookmarkService;
use crate::cli::display;
use crate::cli::error::{CliError, CliResult};
use crate::domain::bookmark::BookmarkDraftBuilder;
use crate::domain::error::DomainError;
use crate::domain::search::{SearchQuery, TagFilter};
use crate::domain::tag::Tag;
use crate::infrastructure::json::to_json_array;
use crate::util::share::ShareTarget;
use std::path::{Path, PathBuf};
use tracing::instrument;

#[instrument(skip_all, level = "debug")]
pub async fn add(
    service: &dyn BookmarkService,
    url: Option<String>,
    tags: Option<String>,
    title: Option<String>,
    description: Option<String>,
    share: Option<String>,
) -> CliResult<()> {
    let mut draft = match share {
        Some(raw) => ShareTarget::parse(&raw)?.into_draft()?,
        None => {
            let url = url.clone().ok_or_else(|| {
                CliError::InvalidInput("a url is required unless --share is given".to_string())
            })?;
            BookmarkDraftBuilder::default()
                .url(url)
                .build()
                .map_err(DomainError::from)?
        }
    };

    // Explicit arguments win over share-target values.
    if let Some(url) = url {
        draft.url = url;
    }
    if let Some(title) = title {
        draft.title = title;
    }
    if draft.title.trim().is_empty() {
        // No title anywhere; fall back to the link itself.
        draft.title = draft.url.clone();
    }
    if let Some(description) = description {
        draft.description = description;
    }
    if let Some(tags) = tags {
        draft.tags = Tag::parse_list(&tags);
    }

    let bookmark = service.add_bookmark(draft).await?;
    println!("{}", display::format_bookmark(&bookmark));
    Ok(())
}

#[instrument(skip_all, level = "debug")]
pub async fn list(
    service: &dyn BookmarkService,
    query: Option<String>,
    tag: String,
    is_json: bool,
) -> CliResult<()> {
    let search = SearchQuery::new(query.unwrap_or_default(), TagFilter::parse(&tag)?);
    let bookmarks = service.list_bookmarks(&search).await?;

    if is_json {
        println!("{}", to_json_array(&bookmarks)?);
    } else {
        display::print_bookmarks(&bookmarks);
    }
    Ok(())
}

#[instrument(skip_all, level = "debug")]
pub async fn show(service: &dyn BookmarkService, id: i32) -> CliResult<()> {
    let bookmark = service
        .get_bookmark(id)
        .await?
        .ok_or(DomainError::NotFound(id))?;
    println!("{}", display::format_bookmark(&bookmark));
    Ok(())
}

#[instrument(skip_all, level = "debug")]
pub async fn open(service: &dyn BookmarkService, id: i32) -> CliResult<()> {
    let bookmark = service
        .get_bookmark(id)
        .await?
        .ok_or(DomainError::NotFound(id))?;

    eprintln!("Opening {}", bookmark.url);
    open::that(&bookmark.url)
        .map_err(|e| CliError::CommandFailed(format!("failed to open {}: {}", bookmark.url, e)))
}

#[instrument(skip_all, level = "debug")]
#[allow(clippy::too_many_arguments)]
pub async fn update(
    service: &dyn BookmarkService,
    id: i32,
    url: Option<String>,
    title: Option<String>,
    description: Option<String>,
    tags: Option<String>,
) -> CliResult<()> {
    // The store replaces records wholesale, so fetch the current record and
    // carry every untouched field (including created_at) forward.
    let mut bookmark = service
        .get_bookmark(id)
        .await?
        .ok_or(DomainError::NotFound(id))?;

    if let Some(url) = url {
        bookmark.url = url;
    }
    if let Some(title) = title {
        bookmark.title = title;
    }
    if let Some(description) = description {
        bookmark.description = description;
    }
    if let Some(tags) = tags {
        bookmark.tags = Tag::parse_list(&tags);
    }

    let updated = service.update_bookmark(bookmark).await?;
    println!("{}", display::format_bookmark(&updated));
    Ok(())
}

#[instrument(skip_all, level = "debug")]
pub async fn delete(service: &dyn BookmarkService, ids: String) -> CliResult<()> {
    // Parse the whole list up front so a bad entry aborts before anything
    // is deleted.
    let ids = ids
        .split(',')
        .map(|raw| {
            raw.trim()
                .parse::<i32>()
                .map_err(|_| CliError::InvalidIdFormat(raw.trim().to_string()))
        })
        .collect::<CliResult<Vec<i32>>>()?;

    for id in ids {
        if service.delete_bookmark(id).await? {
            eprintln!("Deleted bookmark {}", id);
        } else {
            eprintln!("Bookmark {} did not exist", id);
        }
    }
    Ok(())
}

#[instrument(skip_all, level = "debug")]
pub async fn clear(service: &dyn BookmarkService, yes: bool) -> CliResult<()> {
    if !yes {
        eprintln!("This deletes ALL bookmarks. Re-run with --yes to confirm.");
        return Err(CliError::OperationAborted);
    }

    service.delete_all().await?;
    eprintln!("All bookmarks deleted");
    Ok(())
}

#[instrument(skip_all, level = "debug")]
pub async fn export(service: &dyn BookmarkService, output: Option<PathBuf>) -> CliResult<()> {
    let json = service.export_bookmarks().await?;

    match output {
        Some(path) => {
            std::fs::write(&path, &json)?;
            eprintln!("Exported to {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

#[instrument(skip_all, level = "debug")]
pub async fn import(service: &dyn BookmarkService, file: &Path) -> CliResult<()> {
    let payload = std::fs::read_to_string(file)?;
    let report = service.import_bookmarks(&payload).await?;
    eprintln!(
        "Imported {} bookmark(s), skipped {}",
        report.imported, report.skipped
    );
    Ok(())
}
