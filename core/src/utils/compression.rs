use super::error::DumpsterError;
use flate2::{write::GzEncoder, Compression};
use log::error;
use std::io::Write;

/// Compress output data with GZIP before it is written
pub(crate) fn compress_gzip_data(data: &[u8]) -> Result<Vec<u8>, DumpsterError> {
    let mut encoder = GzEncoder::new(Vec::with_capacity(data.len() / 2), Compression::default());
    if let Err(err) = encoder.write_all(data) {
        error!("[compression] Could not gzip {} bytes: {err:?}", data.len());
        return Err(DumpsterError::CompressCreate);
    }

    match encoder.finish() {
        Ok(compressed) => Ok(compressed),
        Err(err) => {
            error!("[compression] Could not finish gzip stream: {err:?}");
            Err(DumpsterError::GzipFinish)
        }
    }
}
