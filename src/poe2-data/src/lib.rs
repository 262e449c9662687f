//! # poe2-data
//!
//! Path of Exile 2 game data extraction library.
//!
//! This library provides the pieces needed to pull structured game-data
//! tables out of a PoE 2 installation:
//! - A catalog of the known data tables, grouped by category
//! - Data sources that read archive-internal paths from an installation
//! - Row normalization into flat, JSON-serializable dictionaries
//! - Installation discovery across the common install locations
//! - The catalog of community mirrors used as a download fallback
//!
//! Decoding of the GGPK container and the `.dat64` tables themselves is a
//! delegated concern behind the [`TableSource`] trait; the shipped sources
//! read already-extracted data trees.
//!
//! ## Example
//!
//! ```no_run
//! use poe2_data::{table_name, DirSource, TableSource, CATEGORIES};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let source = DirSource::open("extracted")?;
//!
//! for category in CATEGORIES {
//!     for path in category.files {
//!         let rows = source.read_table(path)?;
//!         println!("{}: {} rows", table_name(path), rows.len());
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod community;
pub mod discover;
pub mod rows;
pub mod source;
pub mod tables;

// Re-export commonly used items
#[doc(inline)]
pub use community::{download_url, Mirror, SnapshotFile, MIRRORS, SNAPSHOT_FILES};
#[doc(inline)]
pub use discover::{find_install, probe};
#[doc(inline)]
pub use rows::{bytes_cell, normalize_rows, normalize_value, Row, RowError};
#[doc(inline)]
pub use source::{open_source, DirSource, SourceError, SourceResult, TableSource};
#[doc(inline)]
pub use tables::{category_by_name, table_name, Category, CATEGORIES, PASSIVE_TREE_PATHS};
