//! CLI argument definitions using clap
//!
//! Commands:
//! - kitbag blog <create|update|delete|show|list|stats|export|import|theme>
//! - kitbag weather [CITY]
//! - kitbag calc EXPR
//! - kitbag age --born DATE [--on DATE]
//! - kitbag rps [MOVE]
//! - kitbag init

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// kitbag - a strict, deterministic everyday-tools CLI
#[derive(Parser, Debug)]
#[command(name = "kitbag")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true, default_value = "./kitbag.json")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Work with the blog journal
    Blog {
        #[command(subcommand)]
        action: BlogAction,
    },

    /// Current weather for a city
    Weather {
        /// City name; defaults to the configured city
        city: Option<String>,
    },

    /// Evaluate an arithmetic expression
    Calc {
        /// Expression, e.g. "(2+3)*4" or "sqrt 16"
        expr: String,
    },

    /// Full years between a birth date and a reference date
    Age {
        /// Birth date, YYYY-MM-DD
        #[arg(long)]
        born: String,

        /// Reference date, YYYY-MM-DD; defaults to today
        #[arg(long)]
        on: Option<String>,
    },

    /// Rock paper scissors against the computer
    Rps {
        /// One-shot move (rock/paper/scissors); omit for an interactive
        /// session reading one move per line
        r#move: Option<String>,
    },

    /// Write a default config file and seed the blog store
    Init,
}

#[derive(Subcommand, Debug)]
pub enum BlogAction {
    /// Create a post
    Create {
        #[arg(long)]
        title: String,

        #[arg(long)]
        category: String,

        #[arg(long)]
        content: String,

        #[arg(long)]
        image_url: Option<String>,
    },

    /// Update fields of an existing post
    Update {
        id: i64,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        content: Option<String>,

        /// New image URL; pass an empty string to clear the image
        #[arg(long)]
        image_url: Option<String>,
    },

    /// Delete a post
    Delete {
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Show one post
    Show { id: i64 },

    /// List posts with filter, search, and sort
    List {
        /// Category to keep; "all" passes everything
        #[arg(long, default_value = "all")]
        category: String,

        /// Case-insensitive search over title, content, and category
        #[arg(long)]
        search: Option<String>,

        /// Sort order: newest, oldest, title, or read-time
        #[arg(long, default_value = "newest")]
        sort: String,
    },

    /// Post counts, categories, reading time, and recent posts
    Stats,

    /// Export all posts to a JSON document
    Export {
        /// Output path; defaults to blog-posts-<YYYY-MM-DD>.json
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Replace all posts from an exported JSON document
    Import {
        file: PathBuf,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Read or change the color theme
    Theme {
        /// light, dark, or toggle; omit to read the current theme
        value: Option<String>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
