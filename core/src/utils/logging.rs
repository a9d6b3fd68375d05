use super::{error::DumpsterError, uuid::generate_uuid};
use crate::structs::toml::Output;
use log::{error, LevelFilter};
use std::{
    fs::{create_dir_all, File, OpenOptions},
    io::Write,
};

/// Create log output file and logging level based on TOML `Output` configuration
pub(crate) fn create_log_file(output: &Output) -> Result<(File, LevelFilter), DumpsterError> {
    let path = format!("{}/{}", output.directory, output.name);
    if let Err(err) = create_dir_all(&path) {
        error!("[dumpster] Failed to create logging output directory for {path}. Error: {err:?}");
        return Err(DumpsterError::CreateDirectory);
    }

    let log_file = match File::create(format!("{path}/{}.log", generate_uuid())) {
        Ok(result) => result,
        Err(err) => {
            error!("[dumpster] Failed to create log file at {path}. Error: {err:?}");
            return Err(DumpsterError::LogFile);
        }
    };

    let level = match output.logging.as_deref().map(str::to_lowercase).as_deref() {
        Some("error") => LevelFilter::Error,
        Some("info") => LevelFilter::Info,
        Some("debug") => LevelFilter::Debug,
        _ => LevelFilter::Warn,
    };

    Ok((log_file, level))
}

/// Append to the `status.log` file that maps artifact names to output files
pub(crate) fn collection_status(
    artifact_name: &str,
    output: &Output,
    output_name: &str,
) -> Result<(), DumpsterError> {
    let path = format!("{}/{}", output.directory, output.name);
    if let Err(err) = create_dir_all(&path) {
        error!("[dumpster] Failed to create status output directory for {path}. Error: {err:?}");
        return Err(DumpsterError::CreateDirectory);
    }

    let status_result = OpenOptions::new()
        .append(true)
        .create(true)
        .open(format!("{path}/status.log"));
    let mut status = match status_result {
        Ok(result) => result,
        Err(err) => {
            error!("[dumpster] Failed to open or create status.log at {path}. Error: {err:?}");
            return Err(DumpsterError::LogFile);
        }
    };

    // Ex: recyclebin:c639679b-40ec-4aca-9ed1-dc740c38731c.jsonl
    let status_message = format!("{artifact_name}:{output_name}.{}\n", output.format);
    if let Err(err) = status.write_all(status_message.as_bytes()) {
        error!("[dumpster] Failed to update status.log at {path}. Error: {err:?}");
    }
    Ok(())
}
