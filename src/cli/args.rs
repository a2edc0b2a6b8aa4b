// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// A client-local bookmark manager for the terminal
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Turn debugging information on
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Print a default config file and exit
    #[arg(long = "generate-config")]
    pub generate_config: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a bookmark
    Add {
        /// the link to save
        url: Option<String>,

        /// list of tags, separated by comma, no blanks in between
        #[arg(short = 't', long = "tags")]
        tags: Option<String>,

        #[arg(long = "title", help = "title")]
        title: Option<String>,

        #[arg(short = 'd', long = "description", help = "description")]
        description: Option<String>,

        /// pre-fill from a share-target URL carrying title/text/url query parameters
        #[arg(long = "share", value_name = "URL")]
        share: Option<String>,
    },
    /// List bookmarks, newest first
    List {
        /// case-insensitive substring filter over title, url and tags
        query: Option<String>,

        /// only bookmarks carrying this tag ("all" disables the filter)
        #[arg(short = 't', long = "tag", default_value = "all")]
        tag: String,

        #[arg(long = "json", help = "output as json")]
        is_json: bool,
    },
    /// Show a single bookmark
    Show {
        id: i32,
    },
    /// Open a bookmark in the browser
    Open {
        id: i32,
    },
    /// Replace fields of an existing bookmark
    Update {
        id: i32,

        #[arg(long = "url", help = "new url")]
        url: Option<String>,

        #[arg(long = "title", help = "new title")]
        title: Option<String>,

        #[arg(short = 'd', long = "description", help = "new description")]
        description: Option<String>,

        /// replacement tag list, separated by comma ("" clears all tags)
        #[arg(short = 't', long = "tags")]
        tags: Option<String>,
    },
    /// Delete bookmarks
    Delete {
        /// list of ids, separated by comma, no blanks
        ids: String,
    },
    /// Delete ALL bookmarks
    Clear {
        #[arg(long = "yes", help = "skip the confirmation prompt")]
        yes: bool,
    },
    /// Export all bookmarks as a JSON array
    Export {
        /// write to this file instead of stdout
        #[arg(short = 'o', long = "output", value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Import bookmarks from a JSON array backup
    Import {
        file: PathBuf,
    },
}
