use super::{
    error::WinArtifactError,
    recyclebin::parser::{grab_info2, grab_recycle_bin},
};
use crate::{
    output::formats::{json::json_format, jsonl::jsonl_format},
    structs::{
        artifacts::os::windows::{Info2Options, RecycleBinOptions},
        toml::Output,
    },
    utils::time::time_now,
};
use common::windows::RecycleBin;
use log::error;
use serde_json::Value;

/// Parse the Windows `$I` `Recycle Bin` artifact
pub(crate) fn recycle_bin(
    options: &RecycleBinOptions,
    output: &mut Output,
) -> Result<(), WinArtifactError> {
    let start_time = time_now();

    let bin_data = match grab_recycle_bin(options) {
        Ok(results) => results,
        Err(err) => {
            error!("[dumpster] Failed to parse Recycle Bin: {err:?}");
            return Err(WinArtifactError::RecycleBin);
        }
    };

    let output_name = "recyclebin";
    serialize_output(&bin_data, output_name, output, &start_time)
}

/// Parse the legacy Windows `INFO2` `Recycle Bin` artifact
pub(crate) fn info2(options: &Info2Options, output: &mut Output) -> Result<(), WinArtifactError> {
    let start_time = time_now();

    let info2_data = match grab_info2(options) {
        Ok(results) => results,
        Err(err) => {
            error!("[dumpster] Failed to parse INFO2: {err:?}");
            return Err(WinArtifactError::Info2);
        }
    };

    let output_name = "info2";
    serialize_output(&info2_data, output_name, output, &start_time)
}

fn serialize_output(
    entries: &[RecycleBin],
    output_name: &str,
    output: &mut Output,
    start_time: &u64,
) -> Result<(), WinArtifactError> {
    let serde_data = match serde_json::to_value(entries) {
        Ok(results) => results,
        Err(err) => {
            error!("[dumpster] Failed to serialize {output_name}: {err:?}");
            return Err(WinArtifactError::Serialize);
        }
    };
    output_data(&serde_data, output_name, output, start_time)
}

/// Output Windows artifacts
pub(crate) fn output_data(
    serde_data: &Value,
    output_name: &str,
    output: &mut Output,
    start_time: &u64,
) -> Result<(), WinArtifactError> {
    let output_status = match output.format.as_str() {
        "json" => json_format(serde_data, output_name, output, start_time),
        "jsonl" => jsonl_format(serde_data, output_name, output, start_time),
        _ => {
            error!("[dumpster] Unknown formatter provided: {}", output.format);
            return Err(WinArtifactError::Format);
        }
    };

    if let Err(err) = output_status {
        error!("[dumpster] Could not output data: {err:?}");
        return Err(WinArtifactError::Output);
    }
    Ok(())
}
