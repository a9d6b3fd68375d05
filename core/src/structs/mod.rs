pub mod artifacts;
pub mod toml;
