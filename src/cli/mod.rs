// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the sortab command-line interface.
//!
//! Construction-time tooling for lookup tables kept as JSON data files:
//! `check` verifies order, `find` looks keys up the way the compiled table
//! would, `inspect` reports shape and probe budget, `sort` prints the table
//! in canonical order.

pub mod display;

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sortab",
    about = "Verify and query sorted lookup tables",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    ///
    /// `RUST_LOG` takes precedence when set.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Verify that a table file is sorted and fits the index range
    Check {
        /// Path to the JSON table file
        file: PathBuf,
    },

    /// Look keys up in a table file
    Find {
        /// Path to the JSON table file
        file: PathBuf,

        /// Keys to look up (integers unless --text is given)
        #[arg(required = true, allow_negative_numbers = true)]
        keys: Vec<String>,

        /// Treat every key as a string, even if it parses as an integer
        #[arg(long)]
        text: bool,
    },

    /// Show table size, key kind, probe budget and sortedness
    Inspect {
        /// Path to the JSON table file
        file: PathBuf,
    },

    /// Print the table sorted by key (stable for equal keys)
    Sort {
        /// Path to the JSON table file
        file: PathBuf,
    },
}

impl Cli {
    /// Log level implied by `-v` flags.
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
