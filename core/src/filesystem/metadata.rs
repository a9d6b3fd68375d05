use super::error::FileSystemError;
use log::error;

#[derive(Debug)]
pub(crate) struct GlobInfo {
    pub(crate) full_path: String,
    pub(crate) is_file: bool,
}

/// Execute a provided Glob pattern (Ex: C:\$RECYCLE.BIN\*\$I*) and return results
pub(crate) fn glob_paths(glob_pattern: &str) -> Result<Vec<GlobInfo>, FileSystemError> {
    let paths = match glob::glob(glob_pattern) {
        Ok(result) => result,
        Err(err) => {
            error!("[core] Could not glob {glob_pattern}: {err:?}");
            return Err(FileSystemError::BadGlob);
        }
    };

    let info = paths
        .flatten()
        .map(|entry| GlobInfo {
            full_path: entry.to_str().unwrap_or_default().to_string(),
            is_file: entry.is_file(),
        })
        .collect();

    Ok(info)
}
