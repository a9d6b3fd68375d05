use serde::Deserialize;

#[derive(Debug, Deserialize, Default, Clone)]
pub struct RecycleBinOptions {
    /**Parse a single `$I` file instead of globbing the system drive */
    pub alt_file: Option<String>,
    pub alt_drive: Option<char>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct Info2Options {
    /**Parse a single `INFO2` index instead of globbing the system drive */
    pub alt_file: Option<String>,
    pub alt_drive: Option<char>,
}
