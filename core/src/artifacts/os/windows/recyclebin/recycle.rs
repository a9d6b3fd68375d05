use crate::{
    filesystem::files::{get_filename, get_parent},
    utils::{
        nom_helper::{nom_data, nom_unsigned_eight_bytes, nom_unsigned_four_bytes},
        strings::{extract_utf16_path, extract_utf16_string},
        time::filetime_to_datetime,
    },
};
use common::windows::{RecycleBin, RecycleSource};
use log::{error, warn};
use nom::error::{Error, ErrorKind};

/// `$I` version 2 header (Windows 10+)
const SIGNATURE: [u8; 8] = [2, 0, 0, 0, 0, 0, 0, 0];
/// `$I` version 1 header (Windows Vista through 8.1)
const VERSION_ONE: [u8; 8] = [1, 0, 0, 0, 0, 0, 0, 0];
const BYTE_ORDER_MARK: [u8; 2] = [0xff, 0xfe];
/// The version 2 header must start at or before this offset
pub(crate) const MAX_SIGNATURE_OFFSET: usize = 100;
/// Version 1 stores the path in a fixed 260 character field
const VERSION_ONE_PATH_SIZE: u64 = 520;
/// Header, size, deletion time and path
const VERSION_ONE_SIZE: usize = 8 + 8 + 8 + VERSION_ONE_PATH_SIZE as usize;

pub(crate) const UNKNOWN: &str = "Unknown";

/// Parse the `$I` file data from the `Recycle Bin`
pub(crate) fn parse_recycle_bin(data: &[u8]) -> nom::IResult<&[u8], RecycleBin> {
    // A short file with a version 1 prefix is leading junk, scan for the version 2 header instead
    if data.starts_with(&VERSION_ONE) && data.len() >= VERSION_ONE_SIZE {
        return parse_version_one(data);
    }

    let offset = match find_signature(data) {
        Some(result) => result,
        None => {
            error!("[recyclebin] No $I header found in the first {MAX_SIGNATURE_OFFSET} bytes");
            return Err(nom::Err::Error(Error::new(data, ErrorKind::Tag)));
        }
    };

    let (input, _header) = nom_data(data, (offset + SIGNATURE.len()) as u64)?;
    let (input, size) = nom_unsigned_eight_bytes(input)?;
    let (input, deletion) = nom_unsigned_eight_bytes(input)?;
    let (input, name_size) = nom_unsigned_four_bytes(input)?;

    if name_size == 0 {
        return Ok((input, recycle_entry(None, size, &deletion, 2)));
    }

    let utf_adjust = 2;
    let (input, full_path) = match nom_data(input, name_size as u64 * utf_adjust) {
        Ok((remaining, name_data)) => (remaining, Some(extract_utf16_path(name_data))),
        Err(_err) => {
            warn!(
                "[recyclebin] $I path should be {name_size} characters but only {} bytes remain",
                input.len()
            );
            (input, None)
        }
    };

    Ok((input, recycle_entry(full_path, size, &deletion, 2)))
}

/**
 * Find where the version 2 header starts. Leading junk bytes are stepped over one at a time
 * and byte order marks two at a time. Gives up once the header would start past `MAX_SIGNATURE_OFFSET`
 */
pub(crate) fn find_signature(data: &[u8]) -> Option<usize> {
    let mut offset = 0;
    while offset <= MAX_SIGNATURE_OFFSET {
        let window = data.get(offset..offset + SIGNATURE.len())?;
        if window == SIGNATURE {
            return Some(offset);
        }

        if window.starts_with(&BYTE_ORDER_MARK) {
            offset += BYTE_ORDER_MARK.len();
            continue;
        }
        offset += 1;
    }
    None
}

/// Parse the older fixed width `$I` format
fn parse_version_one(data: &[u8]) -> nom::IResult<&[u8], RecycleBin> {
    let (input, _header) = nom_data(data, VERSION_ONE.len() as u64)?;
    let (input, size) = nom_unsigned_eight_bytes(input)?;
    let (input, deletion) = nom_unsigned_eight_bytes(input)?;

    let (input, name_data) = nom_data(input, VERSION_ONE_PATH_SIZE)?;
    let full_path = extract_utf16_string(name_data);

    Ok((input, recycle_entry(Some(full_path), size, &deletion, 1)))
}

/// Assemble the entry. An empty or missing path is reported as `Unknown`
fn recycle_entry(full_path: Option<String>, size: u64, deletion: &u64, version: u64) -> RecycleBin {
    let full_path = full_path.filter(|path| !path.is_empty());

    RecycleBin {
        original_name: full_path
            .as_deref()
            .map_or_else(|| UNKNOWN.to_string(), get_filename),
        directory: full_path.as_deref().map(get_parent).unwrap_or_default(),
        original_path: full_path.unwrap_or_else(|| UNKNOWN.to_string()),
        size,
        deleted: filetime_to_datetime(deletion),
        source: RecycleSource::Metadata {
            metadata_file: String::new(),
            recycled_name: String::new(),
            version,
            content_path: None,
            can_read_content: false,
            sid: String::new(),
        },
    }
}
