use crate::{
    artifacts::{
        collection::collect,
        os::windows::recyclebin::{
            error::RecycleBinError,
            parser::{
                grab_info2_data, grab_info2_path, grab_recycle_bin_data, grab_recycle_bin_path,
            },
        },
    },
    error::TomlError,
    filesystem::files::read_file,
    structs::toml::DumpsterToml,
    utils::logging::create_log_file,
};
use common::windows::RecycleBin;
use log::{error, info, warn};
use simplelog::{Config, WriteLogger};

/// Parse a TOML file at provided path
pub fn parse_toml_file(path: &str) -> Result<(), TomlError> {
    let buffer = match read_file(path) {
        Ok(results) => results,
        Err(err) => {
            error!("[dumpster] Could not read TOML file {path}: {err:?}");
            return Err(TomlError::NoFile);
        }
    };

    let mut collection = DumpsterToml::parse_dumpster_toml(&buffer)?;
    dumpster_collection(&mut collection)
}

/// Parse an already read TOML file
pub fn parse_toml_data(data: &[u8]) -> Result<(), TomlError> {
    let mut collection = DumpsterToml::parse_dumpster_toml(data)?;
    dumpster_collection(&mut collection)
}

/// Collect every artifact in the TOML config. Logs are written next to the output
pub fn dumpster_collection(collection: &mut DumpsterToml) -> Result<(), TomlError> {
    if let Ok((log_file, level)) = create_log_file(&collection.output) {
        // Only one logger can be installed per process, repeat collections keep the first one
        if let Err(err) = WriteLogger::init(level, Config::default(), log_file) {
            warn!("[dumpster] Logger already installed, keeping existing logger: {err:?}");
        }
    }

    match collect(collection) {
        Ok(_) => info!("[dumpster] Core parsed TOML data"),
        Err(err) => {
            error!("[dumpster] Core failed to parse collection: {err:?}");
            return Err(TomlError::BadToml);
        }
    }
    Ok(())
}

/// Parse a single `$I` file from the `Recycle Bin`
pub fn parse_recycle_bin_file(path: &str) -> Result<RecycleBin, RecycleBinError> {
    grab_recycle_bin_path(path)
}

/// Parse every record in a legacy `INFO2` index
pub fn parse_info2_file(path: &str) -> Result<Vec<RecycleBin>, RecycleBinError> {
    grab_info2_path(path)
}

/// Parse `$I` bytes already in memory, such as data read from a disk image
pub fn parse_recycle_bin_data(data: &[u8]) -> Result<RecycleBin, RecycleBinError> {
    grab_recycle_bin_data(data)
}

/// Parse `INFO2` bytes already in memory. A short or truncated index returns the complete records
pub fn parse_info2_data(data: &[u8]) -> Vec<RecycleBin> {
    grab_info2_data(data)
}

#[cfg(test)]
mod tests {
    use super::{
        dumpster_collection, parse_info2_data, parse_info2_file, parse_recycle_bin_data,
        parse_recycle_bin_file, parse_toml_data, parse_toml_file,
    };
    use crate::structs::toml::DumpsterToml;
    use std::path::PathBuf;

    fn test_data(name: &str) -> String {
        let mut test_location = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        test_location.push("tests/test_data/windows");
        test_location.push(name);
        test_location.display().to_string()
    }

    #[test]
    fn test_parse_toml_file() {
        parse_toml_file(&test_data("recyclebin.toml")).unwrap();
    }

    #[test]
    fn test_parse_toml_file_missing() {
        assert!(parse_toml_file(&test_data("missing.toml")).is_err());
    }

    #[test]
    fn test_parse_toml_data() {
        let test = br#"
[output]
name = "toml_data"
endpoint_id = "abcd"
collection_id = 1
directory = "./tmp"
output = "local"
format = "json"
compress = true

[[artifacts]]
artifact_name = "info2"
[artifacts.info2]
alt_file = "./tests/test_data/windows/recyclebin/INFO2"
"#;
        parse_toml_data(test).unwrap();
    }

    #[test]
    fn test_parse_recycle_bin_file() {
        let result = parse_recycle_bin_file(&test_data(
            "recyclebin/S-1-5-21-2981021111-3218961410-4207262418-1001/$IWHBX3J.txt",
        ))
        .unwrap();
        assert_eq!(result.size, 12);
    }

    #[test]
    fn test_parse_info2_file() {
        let result = parse_info2_file(&test_data("recyclebin/INFO2")).unwrap();
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_parse_recycle_bin_data() {
        let mut test = vec![2, 0, 0, 0, 0, 0, 0, 0];
        test.extend_from_slice(&1024u64.to_le_bytes());
        test.extend_from_slice(&0u64.to_le_bytes());
        test.extend_from_slice(&4u32.to_le_bytes());
        test.extend_from_slice(&[67, 0, 58, 0, 92, 0, 97, 0, 0, 0]);

        let result = parse_recycle_bin_data(&test).unwrap();
        assert_eq!(result.original_path, "C:\\a");
        assert!(parse_recycle_bin_data(&[]).is_err());
    }

    #[test]
    fn test_parse_info2_data() {
        let mut test = vec![5, 0, 0, 0, 0, 0, 0, 0];
        test.resize(20, 0);
        assert!(parse_info2_data(&test).is_empty());
    }

    #[test]
    fn test_dumpster_collection_twice() {
        let test = br#"
[output]
name = "collection_twice"
endpoint_id = "abcd"
collection_id = 2
directory = "./tmp"
output = "local"
format = "jsonl"
compress = false

[[artifacts]]
artifact_name = "info2"
[artifacts.info2]
alt_file = "./tests/test_data/windows/recyclebin/INFO2"
"#;
        let mut collection = DumpsterToml::parse_dumpster_toml(test).unwrap();
        dumpster_collection(&mut collection).unwrap();
        dumpster_collection(&mut collection).unwrap();
    }
}
