// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! JSON table descriptions for construction-time checking.
//!
//! Tables compiled into a program are usually generated from a data file.
//! This module reads that file so the `sortab` tool can verify it, look keys
//! up in it, and emit it in canonical sorted order before it is turned into
//! a `const` array.
//!
//! # Format
//!
//! ```json
//! {
//!   "name": "log levels",
//!   "entries": [
//!     { "key": 1, "value": "crit" },
//!     { "key": 4, "value": "info" },
//!     { "key": "warn" }
//!   ]
//! }
//! ```
//!
//! Keys are integers or strings. When both appear, every integer orders
//! before every string.

use std::cmp::Ordering;
use std::fmt;
use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::entry::{InOrder, TableEntry};
use crate::error::Error;
use crate::verify::contracts::check_table_sorted;
use crate::verify::{InvariantError, SortedTable};

/// A key as written in a table file.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TableKey {
    Int(i64),
    Text(String),
}

impl TableKey {
    /// Interpret a command-line argument as a key.
    ///
    /// Arguments that parse as `i64` become [`TableKey::Int`] unless
    /// `force_text` is set.
    pub fn parse(arg: &str, force_text: bool) -> Self {
        if !force_text {
            if let Ok(n) = arg.parse::<i64>() {
                return TableKey::Int(n);
            }
        }
        TableKey::Text(arg.to_string())
    }
}

impl fmt::Display for TableKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableKey::Int(n) => write!(f, "{}", n),
            TableKey::Text(s) => write!(f, "{:?}", s),
        }
    }
}

/// One row of a table file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub key: TableKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl TableEntry<TableKey> for TableRow {
    fn compare_key(&self, key: &TableKey) -> Ordering {
        key.cmp(&self.key)
    }
}

impl InOrder for TableRow {
    fn are_in_order(first: &Self, second: &Self) -> bool {
        first.key <= second.key
    }
}

/// What kind of keys a table holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Empty,
    Int,
    Text,
    Mixed,
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KeyKind::Empty => "empty",
            KeyKind::Int => "integer",
            KeyKind::Text => "string",
            KeyKind::Mixed => "mixed",
        };
        f.write_str(name)
    }
}

/// A table file as loaded from disk.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TableFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub entries: Vec<TableRow>,
}

impl TableFile {
    /// Parse a table from JSON text.
    pub fn from_json(raw: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Read and parse a table file.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let raw = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_json(&raw)?;
        debug!("loaded {} entries from {}", table.entries.len(), path.display());
        Ok(table)
    }

    /// Serialize back to pretty JSON.
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check length and order, borrowing the rows as a searchable table.
    pub fn verify(&self) -> Result<SortedTable<'_, TableRow>, InvariantError> {
        SortedTable::new(&self.entries)
    }

    /// Sort rows by key. Rows with equal keys keep their file order.
    pub fn into_sorted(mut self) -> Self {
        self.entries.sort_by(|a, b| a.key.cmp(&b.key));
        check_table_sorted(&self.entries);
        self
    }

    /// Classify the keys in the table.
    pub fn key_kind(&self) -> KeyKind {
        let ints = self
            .entries
            .iter()
            .filter(|row| matches!(row.key, TableKey::Int(_)))
            .count();
        match (ints, self.entries.len()) {
            (_, 0) => KeyKind::Empty,
            (i, n) if i == n => KeyKind::Int,
            (0, _) => KeyKind::Text,
            _ => KeyKind::Mixed,
        }
    }

    /// Label for reports: the `name` field, or `fallback`.
    pub fn label<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.name.as_deref().unwrap_or(fallback)
    }
}
