use chrono::{DateTime, Utc};
use serde::Serialize;

/// Metadata about a single file sitting in the Windows `Recycle Bin`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecycleBin {
    pub original_name: String,
    pub original_path: String,
    pub directory: String,
    pub size: u64,
    /**`None` when the stored FILETIME is zero */
    pub deleted: Option<DateTime<Utc>>,
    pub source: RecycleSource,
}

/// Where a `RecycleBin` entry was parsed from
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "format", rename_all = "snake_case")]
pub enum RecycleSource {
    /**Legacy `INFO2` aggregate index */
    Info2 {
        index_path: String,
        /**Zero based record number */
        record: u32,
        /**Absolute offset of the record in the index */
        offset: u64,
    },
    /**Per file `$I` metadata */
    Metadata {
        metadata_file: String,
        recycled_name: String,
        version: u64,
        /**Path to the paired `$R` file, if it still exists */
        content_path: Option<String>,
        can_read_content: bool,
        sid: String,
    },
}
