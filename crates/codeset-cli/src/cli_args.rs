//! CLI argument definitions for the codeset command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use clap::{ArgAction, Parser, Subcommand};
use codeset_cli::commands::expand::PipelineFlags;

/// codeset - Expand code notation and select matching rows
#[derive(Parser)]
#[command(name = "codeset")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Expand code expressions into concrete codes
    Expand {
        /// Code expressions (K50-K53, K50*, K50:K53, or regex with --regex)
        #[arg(required_unless_present = "groups", conflicts_with = "groups")]
        exprs: Vec<String>,

        /// JSON file mapping group names to expressions
        #[arg(long)]
        groups: Option<String>,

        /// Code universe file (.json array, or one code per line)
        #[arg(short, long)]
        universe: Option<String>,

        /// JSON file with pipeline options
        #[arg(long)]
        options: Option<String>,

        #[command(flatten)]
        flags: PipelineFlags,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Report rows of a CSV table that contain any of the given codes
    Rows {
        /// CSV file with a header row
        #[arg(short, long)]
        input: String,

        /// Codes or code expressions to look for
        #[arg(short, long, num_args = 1.., required = true)]
        codes: Vec<String>,

        /// Columns to search (may use notation, e.g. icd*)
        #[arg(long, num_args = 1.., required = true)]
        cols: Vec<String>,

        /// Separator for cells holding several codes
        #[arg(long)]
        sep: Option<String>,

        /// Expand code notation before matching
        #[arg(short, long)]
        expand: bool,

        /// Code universe file for expansion (default: codes found in the table)
        #[arg(short, long)]
        universe: Option<String>,

        /// JSON file with pipeline options
        #[arg(long)]
        options: Option<String>,

        #[command(flatten)]
        flags: PipelineFlags,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List the distinct codes in columns of a CSV table
    Unique {
        /// CSV file with a header row
        #[arg(short, long)]
        input: String,

        /// Columns to read (default: all; may use notation)
        #[arg(long, num_args = 1..)]
        cols: Vec<String>,

        /// Separator for cells holding several codes
        #[arg(long)]
        sep: Option<String>,

        /// Trim whitespace around each code
        #[arg(long)]
        strip: bool,
    },
}
