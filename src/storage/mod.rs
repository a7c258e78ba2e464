//! Storage layer: JSON-lines instance files
//!
//! - `models`: record structures
//! - `table`: embedded season-table conversion
//! - `jsonl`: line-by-line reading and writing

pub mod jsonl;
pub mod models;
pub mod table;


pub use jsonl::{open_instances, read_instances, write_instances, InstanceReader, InstanceWriter};
pub use models::{DraftInput, Instance};
pub use table::SeasonTable;
