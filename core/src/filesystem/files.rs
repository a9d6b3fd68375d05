use super::error::FileSystemError;
use log::error;
use std::{
    fs::{metadata, read},
    io::ErrorKind,
    path::Path,
};

/// Check if path is a regular file. Directories and special entries return false
pub(crate) fn is_file(path: &str) -> bool {
    Path::new(path).is_file()
}

/// Read a file that is less than 2GB in size
pub(crate) fn read_file(path: &str) -> Result<Vec<u8>, FileSystemError> {
    if !is_file(path) {
        return Err(FileSystemError::NotFile);
    }

    let max_size = 2147483648; // 2GB
    if get_file_size(path) >= max_size {
        return Err(FileSystemError::LargeFile);
    }

    match read(path) {
        Ok(result) => Ok(result),
        Err(err) if err.kind() == ErrorKind::PermissionDenied => {
            error!("[core] Failed to open file {path}: {err:?}");
            Err(FileSystemError::OpenFile)
        }
        Err(err) => {
            error!("[core] Failed to read file {path}: {err:?}");
            Err(FileSystemError::ReadFile)
        }
    }
}

/// Get the size of a file. Returns 0 if the size cannot be determined
pub(crate) fn get_file_size(path: &str) -> u64 {
    metadata(path).map(|meta| meta.len()).unwrap_or(0)
}

/// Get last component of provided path. Windows (`\`) and Unix (`/`) separators are both supported
pub(crate) fn get_filename(path: &str) -> String {
    path.rsplit(['/', '\\']).next().unwrap_or(path).to_string()
}

/// Get everything before the last path separator. Returns an empty string if there is no separator
pub(crate) fn get_parent(path: &str) -> String {
    match path.rsplit_once(['/', '\\']) {
        Some((parent, _)) => parent.to_string(),
        None => String::new(),
    }
}
