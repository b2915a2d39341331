//! Expand command implementation
//!
//! Expands code expressions (or named groups of them) into concrete codes.

use anyhow::Result;
use clap::Args;
use codeset_notation::{expand_code, CodeInput, CodeSet, CodeUniverse, ExpandOptions};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;
use tracing::info;

use super::json_output::{print_json, ExpandOutput, JsonError};
use crate::input::{load_groups, load_options, load_universe, InputError};

/// Flags that adjust the expansion pipeline.
///
/// Applied on top of the defaults, or on top of an `--options` file.
#[derive(Debug, Clone, Default, Args)]
pub struct PipelineFlags {
    /// Treat expressions as regular expressions (bypasses other notations)
    #[arg(long)]
    pub regex: bool,

    /// Disable hyphen ranges (K50-K53)
    #[arg(long)]
    pub no_hyphen: bool,

    /// Disable star wildcards (K50*)
    #[arg(long)]
    pub no_star: bool,

    /// Disable colon slices (K50:K53)
    #[arg(long)]
    pub no_colon: bool,

    /// Remove dots from expressions before expanding (K50.1 -> K501)
    #[arg(long)]
    pub drop_dot: bool,

    /// Remove leading zeros from expressions before expanding
    #[arg(long)]
    pub drop_leading_zero: bool,

    /// Keep single-expression results in expansion order
    #[arg(long)]
    pub no_sort_unique: bool,
}

impl PipelineFlags {
    /// Applies the flags to `options`. Flags only ever switch a setting away
    /// from its default.
    pub fn apply(&self, mut options: ExpandOptions) -> ExpandOptions {
        if self.regex {
            options = options.regex(true);
        }
        if self.no_hyphen {
            options = options.hyphen(false);
        }
        if self.no_star {
            options = options.star(false);
        }
        if self.no_colon {
            options = options.colon(false);
        }
        if self.drop_dot {
            options = options.drop_dot(true);
        }
        if self.drop_leading_zero {
            options = options.drop_leading_zero(true);
        }
        if self.no_sort_unique {
            options = options.sort_unique(false);
        }
        options
    }
}

/// Loads the universe (if any) and the pipeline options.
pub(crate) fn load_settings(
    universe_path: Option<&str>,
    options_path: Option<&str>,
    flags: &PipelineFlags,
) -> Result<(Option<CodeUniverse>, ExpandOptions), InputError> {
    let universe = universe_path
        .map(|path| load_universe(Path::new(path)))
        .transpose()?;
    let options = match options_path {
        Some(path) => load_options(Path::new(path))?,
        None => ExpandOptions::default(),
    };
    Ok((universe, flags.apply(options)))
}

fn load_input(exprs: &[String], groups_path: Option<&str>) -> Result<CodeInput, InputError> {
    match groups_path {
        Some(path) => load_groups(Path::new(path)),
        None => Ok(CodeInput::Sequence(exprs.to_vec())),
    }
}

/// Run the expand command
///
/// # Arguments
/// * `exprs` - Code expressions to expand
/// * `groups_path` - JSON file mapping group names to expressions (replaces `exprs`)
/// * `universe_path` - Code universe file (`.json` array or one code per line)
/// * `options_path` - JSON file with pipeline options
/// * `flags` - Pipeline flag overrides
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(
    exprs: &[String],
    groups_path: Option<&str>,
    universe_path: Option<&str>,
    options_path: Option<&str>,
    flags: &PipelineFlags,
    json_output: bool,
) -> Result<ExitCode> {
    if json_output {
        run_json(exprs, groups_path, universe_path, options_path, flags)
    } else {
        run_human(exprs, groups_path, universe_path, options_path, flags)
    }
}

fn run_human(
    exprs: &[String],
    groups_path: Option<&str>,
    universe_path: Option<&str>,
    options_path: Option<&str>,
    flags: &PipelineFlags,
) -> Result<ExitCode> {
    let input = load_input(exprs, groups_path)?;
    let (universe, options) = load_settings(universe_path, options_path, flags)?;

    let codes = expand_code(&input, universe.as_ref(), &options)?;
    info!(codes = codes.len(), "expansion finished");

    match &codes {
        CodeSet::Codes(codes) => {
            for code in codes {
                println!("{}", code);
            }
        }
        CodeSet::Groups(groups) => {
            for (name, codes) in groups {
                println!("{} ({})", name.bold(), codes.len());
                for code in codes {
                    println!("  {}", code);
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn run_json(
    exprs: &[String],
    groups_path: Option<&str>,
    universe_path: Option<&str>,
    options_path: Option<&str>,
    flags: &PipelineFlags,
) -> Result<ExitCode> {
    let loaded = load_input(exprs, groups_path).and_then(|input| {
        let (universe, options) = load_settings(universe_path, options_path, flags)?;
        Ok((input, universe, options))
    });
    let (input, universe, options) = match loaded {
        Ok(loaded) => loaded,
        Err(e) => {
            print_json(&ExpandOutput::failure(vec![JsonError::from(&e)]))?;
            return Ok(ExitCode::from(1));
        }
    };

    match expand_code(&input, universe.as_ref(), &options) {
        Ok(codes) => {
            print_json(&ExpandOutput::success(codes.into()))?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            let error = JsonError::new(e.code(), e.to_string());
            print_json(&ExpandOutput::failure(vec![error]))?;
            Ok(ExitCode::from(1))
        }
    }
}
