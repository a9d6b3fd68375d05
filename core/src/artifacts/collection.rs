use super::os::windows::{
    artifacts::{info2, recycle_bin},
    error::WinArtifactError,
};
use crate::structs::toml::DumpsterToml;
use log::{error, info, warn};

/// Parse the TOML collector and get artifacts
pub(crate) fn collect(collector: &mut DumpsterToml) -> Result<(), WinArtifactError> {
    if collector.output.format != "json" && collector.output.format != "jsonl" {
        error!(
            "[dumpster] Unsupported output format: {}",
            collector.output.format
        );
        return Err(WinArtifactError::Format);
    }

    // Loop through all supported artifacts
    for artifacts in &collector.artifacts {
        match artifacts.artifact_name.as_str() {
            "recyclebin" => {
                let default_options = Default::default();
                let options = artifacts.recyclebin.as_ref().unwrap_or(&default_options);
                match recycle_bin(options, &mut collector.output) {
                    Ok(_) => info!("[dumpster] Collected recyclebin"),
                    Err(err) => {
                        error!("[dumpster] Failed to parse recyclebin, error: {err:?}");
                        continue;
                    }
                }
            }
            "info2" => {
                let default_options = Default::default();
                let options = artifacts.info2.as_ref().unwrap_or(&default_options);
                match info2(options, &mut collector.output) {
                    Ok(_) => info!("[dumpster] Collected info2"),
                    Err(err) => {
                        error!("[dumpster] Failed to parse info2, error: {err:?}");
                        continue;
                    }
                }
            }
            _ => warn!(
                "[dumpster] Unsupported artifact: {}",
                artifacts.artifact_name
            ),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::collect;
    use crate::{filesystem::files::read_file, structs::toml::DumpsterToml};
    use std::path::PathBuf;

    #[test]
    fn test_collect() {
        let mut test_location = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        test_location.push("tests/test_data/windows/recyclebin.toml");

        let buffer = read_file(&test_location.display().to_string()).unwrap();
        let mut collector = DumpsterToml::parse_dumpster_toml(&buffer).unwrap();
        collect(&mut collector).unwrap();
    }

    #[test]
    fn test_collect_bad_format() {
        let test = br#"
[output]
name = "bad_format"
endpoint_id = "abcd"
collection_id = 0
directory = "./tmp"
output = "local"
format = "csv"
compress = false

[[artifacts]]
artifact_name = "recyclebin"
"#;
        let mut collector = DumpsterToml::parse_dumpster_toml(test).unwrap();
        assert!(collect(&mut collector).is_err());
    }
}
