/**
 * Windows `Recycle Bin` files contain metadata about "deleted" files
 * Two formats are supported:
 *   `$I` files (Vista+), one small metadata file per deleted file, paired with a `$R` file holding the content
 *   `INFO2` (9x/XP), a single index describing every deleted file for a user
 *
 * References:
 * `https://github.com/libyal/dtformats/blob/main/documentation/Windows%20Recycle.Bin%20file%20formats.asciidoc`
 * `https://cybersecurity.att.com/blogs/security-essentials/digital-dumpster-diving-exploring-the-intricacies-of-recycle-bin-forensics`
 */
use super::{error::RecycleBinError, info2::parse_info2, recycle::parse_recycle_bin};
use crate::{
    filesystem::{
        files::{get_filename, is_file, read_file},
        metadata::glob_paths,
    },
    structs::artifacts::os::windows::{Info2Options, RecycleBinOptions},
    utils::environment::get_systemdrive,
};
use common::windows::{RecycleBin, RecycleSource};
use log::error;
use std::path::Path;

/// Grab `$I` data in the Windows `Recycle Bin` based on options
pub(crate) fn grab_recycle_bin(
    options: &RecycleBinOptions,
) -> Result<Vec<RecycleBin>, RecycleBinError> {
    if let Some(file) = &options.alt_file {
        let result = grab_recycle_bin_path(file)?;
        return Ok(vec![result]);
    }

    let drive = recycle_drive(&options.alt_drive)?;
    grab_recycle_bin_glob(&format!("{drive}:\\$RECYCLE.BIN\\*\\$I*"))
}

/// Parse every `$I` file matching the provided glob. Files that fail to parse are skipped
pub(crate) fn grab_recycle_bin_glob(pattern: &str) -> Result<Vec<RecycleBin>, RecycleBinError> {
    let entries = match glob_paths(pattern) {
        Ok(result) => result,
        Err(err) => {
            error!("[recyclebin] Could not glob recycle bin path {pattern}: {err:?}");
            return Err(RecycleBinError::Glob);
        }
    };

    let recycle = entries
        .iter()
        .filter(|entry| entry.is_file)
        .filter_map(|entry| grab_recycle_bin_path(&entry.full_path).ok())
        .collect();

    Ok(recycle)
}

/// Grab data from the provided Windows `$I` path
pub(crate) fn grab_recycle_bin_path(path: &str) -> Result<RecycleBin, RecycleBinError> {
    let data = match read_file(path) {
        Ok(result) => result,
        Err(err) => {
            error!("[recyclebin] Failed to read recycle bin file {path}: {err:?}");
            return Err(RecycleBinError::ReadFile);
        }
    };

    let mut bin = match grab_recycle_bin_data(&data) {
        Ok(result) => result,
        Err(err) => {
            error!("[recyclebin] Failed to parse recycle bin file {path}");
            return Err(err);
        }
    };

    if let RecycleSource::Metadata {
        metadata_file,
        recycled_name,
        content_path,
        can_read_content,
        sid,
        ..
    } = &mut bin.source
    {
        *metadata_file = path.to_string();
        *recycled_name = get_filename(path);
        if let Some(content) = content_file(path) {
            *can_read_content = is_file(&content);
            *content_path = Some(content);
        }

        // Parent directory is named after the SID of the user that deleted the file
        let dir = Path::new(path).parent().and_then(|parent| parent.file_name());
        if let Some(name) = dir {
            *sid = name.to_string_lossy().to_string();
        }
    }
    Ok(bin)
}

/// Parse `$I` bytes already in memory. No `$R` pairing is possible without a path
pub(crate) fn grab_recycle_bin_data(data: &[u8]) -> Result<RecycleBin, RecycleBinError> {
    match parse_recycle_bin(data) {
        Ok((_, result)) => Ok(result),
        Err(_err) => Err(RecycleBinError::ParseFile),
    }
}

/// Get the `$R` file that holds the content for a `$I` file, if it still exists
fn content_file(path: &str) -> Option<String> {
    let metadata = Path::new(path);
    let name = metadata.file_name()?.to_str()?;
    let suffix = name.strip_prefix("$I")?;

    let content = metadata.with_file_name(format!("$R{suffix}"));
    if !content.exists() {
        return None;
    }
    Some(content.to_str()?.to_string())
}

/// Grab legacy `INFO2` data in the Windows `Recycle Bin` based on options
pub(crate) fn grab_info2(options: &Info2Options) -> Result<Vec<RecycleBin>, RecycleBinError> {
    if let Some(file) = &options.alt_file {
        return grab_info2_path(file);
    }

    let drive = recycle_drive(&options.alt_drive)?;
    let mut entries = grab_info2_glob(&format!("{drive}:\\RECYCLER\\*\\INFO2"))?;
    entries.append(&mut grab_info2_glob(&format!("{drive}:\\RECYCLED\\INFO2"))?);
    Ok(entries)
}

/// Parse every `INFO2` index matching the provided glob. Indexes that cannot be read are skipped
pub(crate) fn grab_info2_glob(pattern: &str) -> Result<Vec<RecycleBin>, RecycleBinError> {
    let indexes = match glob_paths(pattern) {
        Ok(result) => result,
        Err(err) => {
            error!("[recyclebin] Could not glob INFO2 path {pattern}: {err:?}");
            return Err(RecycleBinError::Glob);
        }
    };

    let mut entries = Vec::new();
    for index in indexes.iter().filter(|index| index.is_file) {
        match grab_info2_path(&index.full_path) {
            Ok(mut result) => entries.append(&mut result),
            Err(_err) => continue,
        }
    }
    Ok(entries)
}

/// Grab all records from the provided `INFO2` path
pub(crate) fn grab_info2_path(path: &str) -> Result<Vec<RecycleBin>, RecycleBinError> {
    let data = match read_file(path) {
        Ok(result) => result,
        Err(err) => {
            error!("[recyclebin] Failed to read INFO2 file {path}: {err:?}");
            return Err(RecycleBinError::ReadFile);
        }
    };

    Ok(parse_info2(&data, path))
}

/// Parse `INFO2` bytes already in memory
pub(crate) fn grab_info2_data(data: &[u8]) -> Vec<RecycleBin> {
    parse_info2(data, "")
}

/// Use the alternative drive if provided, otherwise the system drive
fn recycle_drive(alt_drive: &Option<char>) -> Result<char, RecycleBinError> {
    if let Some(drive) = alt_drive {
        return Ok(*drive);
    }

    match get_systemdrive() {
        Ok(result) => Ok(result),
        Err(err) => {
            error!("[recyclebin] Could not get systemdrive: {err:?}");
            Err(RecycleBinError::Systemdrive)
        }
    }
}
