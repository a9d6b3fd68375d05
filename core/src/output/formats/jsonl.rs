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

/// Output to `jsonl` files. Arrays are written one entry per line
pub(crate) fn jsonl_format(
    serde_data: &Value,
    output_name: &str,
    output: &mut Output,
    start_time: &u64,
) -> Result<(), FormatError> {
    let mut collection_output = json![{
        "metadata": {
            "endpoint_id": output.endpoint_id,
            "id": output.collection_id,
            "artifact_name": output_name,
            "complete_time": time_now(),
            "start_time": start_time,
        }
    }];

    let uuid = generate_uuid();
    let collection_data = match serde_data.as_array() {
        // If array is empty just output metadata
        Some(entries) if entries.is_empty() => {
            collection_output["metadata"]["uuid"] = Value::String(generate_uuid());
            let mut line = serde_json::to_string(&collection_output).unwrap_or_default();
            line.push('\n');
            line
        }
        Some(entries) => {
            let mut json_lines = Vec::with_capacity(entries.len());
            for entry in entries {
                json_lines.push(create_line(&mut collection_output, entry)?);
            }
            json_lines.join("")
        }
        None => create_line(&mut collection_output, serde_data)?,
    };

    write_json(collection_data.as_bytes(), output, &uuid)?;
    let _ = collection_status(output_name, output, &uuid);

    Ok(())
}

/// Write JSONL bytes to file
fn write_json(data: &[u8], output: &Output, output_name: &str) -> Result<(), FormatError> {
    let output_data = if output.compress {
        match compress_gzip_data(data) {
            Ok(result) => result,
            Err(err) => {
                error!("[dumpster] Failed to compress data: {err:?}");
                return Err(FormatError::Output);
            }
        }
    } else {
        data.to_vec()
    };

    match output_artifact(&output_data, output, output_name) {
        Ok(_) => info!("[dumpster] {output_name} jsonl output success"),
        Err(err) => {
            error!("[dumpster] Failed to output {output_name} jsonl: {err:?}");
            return Err(FormatError::Output);
        }
    }

    Ok(())
}

/// Create a single JSON line
fn create_line(base_data: &mut Value, artifact_data: &Value) -> Result<String, FormatError> {
    base_data["data"] = artifact_data.clone();
    base_data["metadata"]["uuid"] = Value::String(generate_uuid());

    match serde_json::to_string(base_data) {
        Ok(results) => Ok(format!("{results}\n")),
        Err(err) => {
            error!("[dumpster] Failed to serialize jsonl output: {err:?}");
            Err(FormatError::Serialize)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{create_line, jsonl_format};
    use crate::{structs::toml::Output, utils::time::time_now};
    use serde_json::json;
    use std::fs::read_to_string;

    #[test]
    fn test_jsonl_format() {
        let mut output = Output {
            name: String::from("jsonl_test"),
            directory: String::from("./tmp"),
            format: String::from("jsonl"),
            compress: false,
            endpoint_id: String::from("abcd"),
            collection_id: 0,
            output: String::from("local"),
            logging: None,
        };
        let start_time = time_now();

        let data = json!([{"original_name": "a"}, {"original_name": "b"}]);
        jsonl_format(&data, "recyclebin", &mut output, &start_time).unwrap();
        jsonl_format(&json!([]), "recyclebin", &mut output, &start_time).unwrap();

        let status = read_to_string("./tmp/jsonl_test/status.log").unwrap();
        assert!(status.contains("recyclebin:"));
    }

    #[test]
    fn test_create_line() {
        let mut base = json!({"metadata": {"endpoint_id": "abcd"}});
        let line = create_line(&mut base, &json!({"size": 12})).unwrap();

        assert!(line.ends_with('\n'));
        let value: serde_json::Value = serde_json::from_str(line.trim_end()).unwrap();
        assert_eq!(value["data"]["size"], 12);
        assert_eq!(value["metadata"]["endpoint_id"], "abcd");
        assert!(value["metadata"]["uuid"].is_string());
    }
}
