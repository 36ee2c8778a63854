// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the unisearch command-line interface.
//!
//! Four subcommands over a site directory: `index` dumps the built index as
//! JSON, `search` prints grouped results the way the overlay would show
//! them, `navigate` replays a key sequence through the overlay, and `inspect`
//! summarizes every configured locale.

pub mod display;
pub mod logging;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "unisearch",
    about = "Grouped search over a multi-language site's catalog, navigation and news",
    version
)]
pub struct Cli {
    /// Debug-level logs on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Errors only
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where to read the site from and which locale to index.
#[derive(Args)]
pub struct SiteArgs {
    /// Site directory containing manifest.json
    #[arg(short, long)]
    pub input: String,

    /// Locale code (defaults to the manifest's default locale)
    #[arg(short, long)]
    pub locale: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the search index and write it as JSON
    Index {
        #[command(flatten)]
        site: SiteArgs,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Run a query and print grouped results
    Search {
        #[command(flatten)]
        site: SiteArgs,

        /// Search query (blank shows quick links)
        #[arg(default_value = "")]
        query: String,
    },

    /// Type a query, then replay a key sequence through the overlay
    Navigate {
        #[command(flatten)]
        site: SiteArgs,

        /// Comma-separated keys: down, up, enter, esc
        #[arg(short, long, value_delimiter = ',')]
        keys: Vec<String>,

        /// Search query
        query: String,
    },

    /// Show per-locale entry counts and source version
    Inspect {
        /// Site directory containing manifest.json
        #[arg(short, long)]
        input: String,
    },
}
