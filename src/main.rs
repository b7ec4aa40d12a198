// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, trace};

use sortab::utils::max_probes;
use sortab::{first_unordered, Error, ExitCode, TableFile, TableKey};

mod cli;
use cli::display::{error_line, field, hit_label, section_bot, section_top, sortedness};
use cli::{Cli, Commands};

fn main() -> process::ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_level());

    let outcome = match &cli.command {
        Commands::Check { file } => run_check(file),
        Commands::Find { file, keys, text } => run_find(file, keys, *text),
        Commands::Inspect { file } => run_inspect(file),
        Commands::Sort { file } => run_sort(file),
    };

    let code = match outcome {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{}", error_line(&format!("{:#}", err)));
            exit_code_for(&err)
        }
    };
    trace!("exiting with {} ({})", code, code.code());
    code.into()
}

/// `RUST_LOG` overrides the level picked from `-v`.
fn init_logging(level: log::LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    err.downcast_ref::<Error>()
        .map_or(ExitCode::Failure, Error::exit_code)
}

fn load(path: &Path) -> Result<TableFile> {
    TableFile::load(path).with_context(|| format!("loading table {}", path.display()))
}

/// Verify order and length; the report box is only printed for good tables.
fn run_check(path: &Path) -> Result<ExitCode> {
    let table = load(path)?;
    let sorted = table
        .verify()
        .map_err(Error::from)
        .with_context(|| format!("checking {}", path.display()))?;

    info!("{}: {} entries verified", path.display(), sorted.len());
    section_top(&format!("CHECK {}", table.label(&path.display().to_string())));
    field("entries", &sorted.len().to_string());
    field("order", &sortedness(true));
    section_bot();
    Ok(ExitCode::Success)
}

/// Look keys up against a verified table. Any miss makes the run fail.
fn run_find(path: &Path, raw_keys: &[String], force_text: bool) -> Result<ExitCode> {
    let table = load(path)?;
    let sorted = table
        .verify()
        .map_err(Error::from)
        .with_context(|| format!("refusing to search {}", path.display()))?;

    let keys: Vec<TableKey> = raw_keys
        .iter()
        .map(|arg| TableKey::parse(arg, force_text))
        .collect();
    trace!("looking up {} keys in {} entries", keys.len(), sorted.len());

    let mut missing = 0usize;
    for (key, hit) in keys.iter().zip(sorted.find_batch(&keys)) {
        match hit {
            Some(row) => println!(
                "{} {} -> {}",
                hit_label(true),
                key,
                row.value.as_deref().unwrap_or("-")
            ),
            None => {
                missing += 1;
                println!("{} {}", hit_label(false), key);
            }
        }
    }

    if missing > 0 {
        info!("{} of {} keys missing", missing, keys.len());
        Ok(ExitCode::Failure)
    } else {
        Ok(ExitCode::Success)
    }
}

/// Report on a table without failing on disorder.
fn run_inspect(path: &Path) -> Result<ExitCode> {
    let table = load(path)?;
    let len = table.entries.len();

    let order = match first_unordered(&table.entries) {
        None => sortedness(true),
        Some(position) => format!("{} at {}", sortedness(false), position),
    };

    section_top(&format!("TABLE {}", table.label(&path.display().to_string())));
    field("entries", &len.to_string());
    field("keys", &table.key_kind().to_string());
    field("max probes", &max_probes(len).to_string());
    field("order", &order);
    if len > sortab::MAX_TABLE_LEN {
        field("limit", &format!("exceeds {}", sortab::MAX_TABLE_LEN));
    }
    section_bot();
    Ok(ExitCode::Success)
}

/// Print the table in canonical order on stdout.
fn run_sort(path: &Path) -> Result<ExitCode> {
    let table = load(path)?.into_sorted();
    let json = table.to_json().context("serializing sorted table")?;
    println!("{}", json);
    Ok(ExitCode::Success)
}
