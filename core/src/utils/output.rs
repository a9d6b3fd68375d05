use super::error::DumpsterError;
use crate::{output::local::output::local_output, structs::toml::Output};
use log::error;

/// Output artifact data based on output type
pub(crate) fn output_artifact(
    artifact_data: &[u8],
    output: &Output,
    output_name: &str,
) -> Result<(), DumpsterError> {
    match output.output.as_str() {
        "local" => {
            let extension = if output.compress {
                format!("{}.gz", output.format)
            } else {
                output.format.clone()
            };

            let local_result = local_output(artifact_data, output, output_name, &extension);
            if let Err(err) = local_result {
                error!("[dumpster] Failed to output to local system: {err:?}");
                return Err(DumpsterError::Local);
            }
        }
        _ => {
            error!("[dumpster] Unknown output type: {}", output.output);
            return Err(DumpsterError::UnknownOutput);
        }
    }
    Ok(())
}
