use super::error::LocalError;
use crate::structs::toml::Output;
use log::error;
use std::{
    fs::{create_dir_all, OpenOptions},
    io::Write,
};

/// Output to local directory provided by TOML input
pub(crate) fn local_output(
    data: &[u8],
    output: &Output,
    output_name: &str,
    extension: &str,
) -> Result<(), LocalError> {
    let output_path = format!("{}/{}", output.directory, output.name);

    if let Err(err) = create_dir_all(&output_path) {
        error!("[dumpster] Failed to create output directory for {output_path}. Error: {err:?}");
        return Err(LocalError::CreateDirectory);
    }

    let json_file_result = OpenOptions::new()
        .append(true)
        .create(true)
        .open(format!("{output_path}/{output_name}.{extension}"));

    let mut json_file = match json_file_result {
        Ok(results) => results,
        Err(err) => {
            error!("[dumpster] Failed to create output file {output_name} at {output_path}. Error: {err:?}");
            return Err(LocalError::CreateFile);
        }
    };

    if let Err(err) = json_file.write_all(data) {
        error!("[dumpster] Failed to write output to file {output_name} at {output_path}. Error: {err:?}");
        return Err(LocalError::WriteJson);
    }
    Ok(())
}
