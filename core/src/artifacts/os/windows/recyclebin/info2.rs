/**
 * The `INFO2` file is the aggregate index used by the Windows 9x/XP era `Recycle Bin`.
 * A 20 byte header is followed by fixed size records:
 *   size (u64), deletion FILETIME (u64), UTF16 name (264 bytes, null terminated or full width)
 *
 * A short or truncated index is not an error, parsing stops at the last complete record
 */
use super::recycle::UNKNOWN;
use crate::{
    filesystem::files::{get_filename, get_parent},
    utils::{
        nom_helper::{nom_data, nom_unsigned_eight_bytes, nom_unsigned_four_bytes},
        strings::extract_utf16_string,
        time::filetime_to_datetime,
    },
};
use common::windows::{RecycleBin, RecycleSource};
use log::{debug, warn};

const HEADER_SIZE: u64 = 20;
const RECORD_SIZE: u64 = 280;
const NAME_SIZE: u64 = 264;

/// Parse all complete records in an `INFO2` index
pub(crate) fn parse_info2(data: &[u8], index_path: &str) -> Vec<RecycleBin> {
    let mut entries = Vec::new();

    let (mut input, header) = match nom_data(data, HEADER_SIZE) {
        Ok(result) => result,
        Err(_err) => {
            debug!("[recyclebin] INFO2 {index_path} is smaller than the header, nothing recorded");
            return entries;
        }
    };
    let (count, version) = match parse_header(header) {
        Ok((_, result)) => result,
        Err(_err) => return entries,
    };
    debug!("[recyclebin] INFO2 {index_path} version {version} has {count} records");

    for record in 0..count {
        let (remaining, record_data) = match nom_data(input, RECORD_SIZE) {
            Ok(result) => result,
            Err(_err) => {
                warn!("[recyclebin] INFO2 {index_path} is truncated. Expected {count} records, got {record}");
                break;
            }
        };
        input = remaining;

        let offset = HEADER_SIZE + record as u64 * RECORD_SIZE;
        match parse_record(record_data, index_path, record, offset) {
            Ok((_, entry)) => entries.push(entry),
            Err(_err) => {
                warn!("[recyclebin] Could not parse INFO2 record {record} at offset {offset}");
                break;
            }
        }
    }

    entries
}

/// Get the record count and format version from the header
fn parse_header(data: &[u8]) -> nom::IResult<&[u8], (u32, u32)> {
    let (input, version) = nom_unsigned_four_bytes(data)?;
    let (input, count) = nom_unsigned_four_bytes(input)?;

    Ok((input, (count, version)))
}

/// Parse a single 280 byte record
fn parse_record<'a>(
    data: &'a [u8],
    index_path: &str,
    record: u32,
    offset: u64,
) -> nom::IResult<&'a [u8], RecycleBin> {
    let (input, size) = nom_unsigned_eight_bytes(data)?;
    let (input, deletion) = nom_unsigned_eight_bytes(input)?;
    let (input, name_data) = nom_data(input, NAME_SIZE)?;

    let name = extract_utf16_string(name_data);
    let (original_name, original_path, directory) = if name.is_empty() {
        (UNKNOWN.to_string(), UNKNOWN.to_string(), String::new())
    } else {
        (get_filename(&name), name.clone(), get_parent(&name))
    };

    let entry = RecycleBin {
        original_name,
        original_path,
        directory,
        size,
        deleted: filetime_to_datetime(&deletion),
        source: RecycleSource::Info2 {
            index_path: index_path.to_string(),
            record,
            offset,
        },
    };

    Ok((input, entry))
}
