//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "scribe")]
#[command(about = "Personal journal: write, search, edit and export short entries", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Move a corrupt journal file aside and start with an empty journal
    #[arg(long, global = true)]
    pub recover: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a journal entry
    Add {
        /// Entry text
        content: String,

        /// Tag to attach (repeatable)
        #[arg(short, long = "tag")]
        tags: Vec<String>,
    },

    /// List all entries
    List,

    /// Search entries by keyword, tags, or creation date
    Search {
        /// Case-sensitive text to look for in content and tags
        keyword: Option<String>,

        /// Exact tag to match (repeatable, any of them matches)
        #[arg(short, long = "tag", conflicts_with = "keyword")]
        tags: Vec<String>,

        /// Earliest creation date (e.g., 2024-01-05, yesterday, 3 days ago)
        #[arg(long, conflicts_with_all = ["keyword", "tags"])]
        from: Option<String>,

        /// Latest creation date (inclusive)
        #[arg(long, conflicts_with_all = ["keyword", "tags"])]
        to: Option<String>,
    },

    /// Show one entry in full
    Show {
        id: u64,
    },

    /// Change the text or tags of an entry
    Edit {
        id: u64,

        /// New entry text (unchanged if omitted)
        #[arg(short, long)]
        content: Option<String>,

        /// Replace tags with these (repeatable)
        #[arg(short, long = "tag")]
        tags: Vec<String>,

        /// Remove all tags
        #[arg(long, conflicts_with = "tags")]
        clear_tags: bool,
    },

    /// Delete an entry
    Delete {
        id: u64,
    },

    /// List all distinct tags
    Tags,

    /// Export all entries to a file
    Export {
        /// Destination file
        path: PathBuf,

        /// json, csv or txt (default: from the file extension)
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Write a backup copy of the journal
    Backup {
        /// Backup file (default: configured backup file)
        #[arg(long)]
        to: Option<PathBuf>,

        /// Keep running, backing up at the configured interval
        #[arg(long)]
        watch: bool,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Interactive menu
    Menu,
}
