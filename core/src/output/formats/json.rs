use super::error::FormatError;
use crate::{
    structs::toml::Output,
    utils::{
        compression::compress_gzip_data, logging::collection_status, output::output_artifact,
        time::time_now, uuid::generate_uuid,
    },
};
use log::{error, info};
use serde_json::{json, Value};

/// Output to a single `json` document
pub(crate) fn json_format(
    serde_data: &Value,
    output_name: &str,
    output: &mut Output,
    start_time: &u64,
) -> Result<(), FormatError> {
    let collection_output = json![{
        "metadata": {
            "endpoint_id": output.endpoint_id,
            "uuid": generate_uuid(),
            "id": output.collection_id,
            "artifact_name": output_name,
            "complete_time": time_now(),
            "start_time": start_time,
        },
        "data": serde_data,
    }];

    let serde_collection = match serde_json::to_vec(&collection_output) {
        Ok(results) => results,
        Err(err) => {
            error!("[dumpster] Failed to serialize json output: {err:?}");
            return Err(FormatError::Serialize);
        }
    };

    let output_data = if output.compress {
        match compress_gzip_data(&serde_collection) {
            Ok(result) => result,
            Err(err) => {
                error!("[dumpster] Failed to compress data: {err:?}");
                return Err(FormatError::Output);
            }
        }
    } else {
        serde_collection
    };

    let uuid = generate_uuid();
    match output_artifact(&output_data, output, &uuid) {
        Ok(_) => info!("[dumpster] {output_name} json output success"),
        Err(err) => {
            error!("[dumpster] Failed to output {output_name} json: {err:?}");
            return Err(FormatError::Output);
        }
    }
    let _ = collection_status(output_name, output, &uuid);

    Ok(())
}
