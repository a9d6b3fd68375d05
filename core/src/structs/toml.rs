use super::artifacts::os::windows::{Info2Options, RecycleBinOptions};
use crate::error::TomlError;
use log::error;
use serde::Deserialize;
use std::str::from_utf8;

#[derive(Debug, Deserialize)]
pub struct DumpsterToml {
    pub output: Output,
    pub artifacts: Vec<Artifacts>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Output {
    pub name: String,
    pub endpoint_id: String,
    pub collection_id: u64,
    pub directory: String,
    /**Only `local` is supported */
    pub output: String,
    /**`json` or `jsonl` */
    pub format: String,
    pub compress: bool,
    pub logging: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Artifacts {
    /**Based on artifact parse one of the artifact types */
    pub artifact_name: String,
    pub recyclebin: Option<RecycleBinOptions>,
    pub info2: Option<Info2Options>,
}

impl DumpsterToml {
    /// Parse the TOML collection file
    pub fn parse_dumpster_toml(toml_data: &[u8]) -> Result<DumpsterToml, TomlError> {
        let toml_string = match from_utf8(toml_data) {
            Ok(result) => result,
            Err(err) => {
                error!("[dumpster] TOML data is not valid UTF8: {err:?}");
                return Err(TomlError::BadToml);
            }
        };

        let mut collector: DumpsterToml = match toml::from_str(toml_string) {
            Ok(results) => results,
            Err(err) => {
                error!("[dumpster] Failed to parse TOML data. Error: {err:?}");
                return Err(TomlError::BadToml);
            }
        };

        // Format is always lowercase
        collector.output.format = collector.output.format.to_lowercase();
        Ok(collector)
    }
}

#[cfg(test)]
mod tests {
    use super::DumpsterToml;
    use crate::filesystem::files::read_file;
    use std::path::PathBuf;

    #[test]
    fn test_parse_dumpster_toml() {
        let mut test_location = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        test_location.push("tests/test_data/windows/recyclebin.toml");

        let buffer = read_file(&test_location.display().to_string()).unwrap();
        let result = DumpsterToml::parse_dumpster_toml(&buffer).unwrap();

        assert_eq!(result.output.name, "recyclebin_collection");
        assert_eq!(result.output.directory, "./tmp");
        assert_eq!(result.output.format, "jsonl");
        assert_eq!(result.output.output, "local");
        assert_eq!(result.output.compress, false);
        assert_eq!(result.output.logging.as_deref(), Some("warn"));

        assert_eq!(result.artifacts.len(), 2);
        assert_eq!(result.artifacts[0].artifact_name, "recyclebin");
        assert!(result.artifacts[0]
            .recyclebin
            .as_ref()
            .unwrap()
            .alt_file
            .as_ref()
            .unwrap()
            .ends_with("$IWHBX3J.txt"));
        assert_eq!(result.artifacts[1].artifact_name, "info2");
        assert!(result.artifacts[1].info2.is_some());
    }

    #[test]
    fn test_parse_dumpster_toml_uppercase_format() {
        let test = br#"
[output]
name = "test"
endpoint_id = "abcd"
collection_id = 0
directory = "./tmp"
output = "local"
format = "JSON"
compress = true

[[artifacts]]
artifact_name = "recyclebin"
"#;
        let result = DumpsterToml::parse_dumpster_toml(test).unwrap();
        assert_eq!(result.output.format, "json");
        assert!(result.output.logging.is_none());
        assert!(result.artifacts[0].recyclebin.is_none());
    }

    #[test]
    #[should_panic(expected = "BadToml")]
    fn test_parse_dumpster_bad_toml() {
        let test = b"[output]\nname = 1";
        DumpsterToml::parse_dumpster_toml(test).unwrap();
    }
}
