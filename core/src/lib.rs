//! Recover metadata about deleted files from the Windows `Recycle Bin`.
//!
//! Supports the per file `$I` metadata format used since Windows Vista and the
//! legacy `INFO2` aggregate index.

mod artifacts;
pub mod core;
mod error;
mod filesystem;
mod output;
pub mod structs;
mod utils;

pub use artifacts::os::windows::recyclebin::error::RecycleBinError;
pub use common::windows::{RecycleBin, RecycleSource};
pub use error::TomlError;
