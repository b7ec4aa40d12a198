//! Binary search over static sorted lookup tables, with sortedness you can
//! prove before the program runs.
//!
//! A lookup table here is a fixed, ascending array of records owned by the
//! caller, usually a `const` or `static`. The crate provides:
//!
//! - a comparator contract ([`TableEntry`], [`InOrder`]) so keys can differ
//!   in type from the rows they select,
//! - a single bisection engine behind [`find`] and friends, at most
//!   `floor(log2 n) + 1` comparisons, no allocation, no state,
//! - a sortedness verifier that runs at compile time ([`assert_sorted!`]), at
//!   construction ([`SortedTable`]) or in tests ([`is_sorted`]).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │  entry.rs   │────▶│  search.rs   │◀────│  verify/         │
//! │ (TableEntry,│     │ (bisect,     │     │ (is_sorted,      │
//! │  InOrder,   │     │  find, ...)  │     │  SortedTable,    │
//! │  Record)    │     │              │     │  contracts)      │
//! └─────────────┘     └──────────────┘     └──────────────────┘
//!        │                                          ▲
//!        ▼                                          │
//! ┌─────────────┐                          ┌──────────────────┐
//! │  macros.rs  │  const-time proof        │  table_file.rs   │
//! │(assert_sorted!)                        │ (JSON tables for │
//! └─────────────┘                          │  the sortab CLI) │
//!                                          └──────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use sortab::{assert_sorted, find, Record};
//!
//! const TABLE: [Record<u32, &str>; 4] = [
//!     Record::new(1, "a"),
//!     Record::new(5, "b"),
//!     Record::new(9, "c"),
//!     Record::new(12, "d"),
//! ];
//! assert_sorted!(TABLE, by_key = key);
//!
//! assert_eq!(find(&9, &TABLE).map(|r| r.value), Some("c"));
//! assert!(find(&4, &TABLE).is_none());
//! ```

// Module declarations
mod entry;
pub mod error;
mod macros;
mod search;
pub mod table_file;
pub mod utils;
pub mod verify;

#[doc(hidden)]
pub mod testing;

// Re-exports for public API
pub use entry::{InOrder, Record, TableEntry};
pub use error::{Error, ExitCode};
pub use search::{find, find_batch, find_by, find_in, position_in, MAX_TABLE_LEN};
pub use table_file::{KeyKind, TableFile, TableKey, TableRow};
pub use verify::{first_unordered, is_sorted, is_sorted_slice, InvariantError, SortedTable};
