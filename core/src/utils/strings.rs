use log::warn;
use std::char::{decode_utf16, REPLACEMENT_CHARACTER};

/**
 * Get a UTF16 string from provided bytes data. Stops at the first null character
 *
 * Deleted file metadata is often partially corrupt, so invalid surrogates are replaced instead of failing
 */
pub(crate) fn extract_utf16_string(data: &[u8]) -> String {
    let min_byte_size = 2;
    let wide_chars = data
        .chunks_exact(min_byte_size)
        .map(|wide_char| u16::from_le_bytes([wide_char[0], wide_char[1]]))
        .take_while(|wide_char| *wide_char != 0);

    lossy_utf16(wide_chars)
}

/**
 * Get a UTF16 string from a length prefixed field. A single trailing null character is dropped if present
 *
 * Any other null characters are kept as part of the string
 */
pub(crate) fn extract_utf16_path(data: &[u8]) -> String {
    let min_byte_size = 2;
    let mut wide_chars: Vec<u16> = data
        .chunks_exact(min_byte_size)
        .map(|wide_char| u16::from_le_bytes([wide_char[0], wide_char[1]]))
        .collect();

    if wide_chars.last() == Some(&0) {
        wide_chars.pop();
    }

    lossy_utf16(wide_chars)
}

/// Decode UTF16 characters, replacing anything malformed with U+FFFD
fn lossy_utf16<I: IntoIterator<Item = u16>>(wide_chars: I) -> String {
    let mut replaced = false;
    let value: String = decode_utf16(wide_chars)
        .map(|result| {
            result.unwrap_or_else(|_err| {
                replaced = true;
                REPLACEMENT_CHARACTER
            })
        })
        .collect();

    if replaced {
        warn!("[strings] Replaced malformed UTF16 characters in: {value}");
    }
    value
}

#[cfg(test)]
mod tests {
    use super::{extract_utf16_path, extract_utf16_string};

    #[test]
    fn test_extract_utf16_string() {
        let test = [
            67, 0, 58, 0, 92, 0, 97, 0, 46, 0, 116, 0, 120, 0, 116, 0, 0, 0,
        ];
        assert_eq!(extract_utf16_string(&test), "C:\\a.txt");
    }

    #[test]
    fn test_extract_utf16_string_embedded_null() {
        let mut test = vec![0u8; 264];
        test[..6].copy_from_slice(&[97, 0, 98, 0, 99, 0]);
        // Garbage after the terminator
        test[8..12].copy_from_slice(&[120, 0, 121, 0]);
        test[200] = 0xff;

        assert_eq!(extract_utf16_string(&test), "abc");
    }

    #[test]
    fn test_extract_utf16_string_full_width() {
        let test: Vec<u8> = "abcd".encode_utf16().flat_map(|c| c.to_le_bytes()).collect();
        assert_eq!(extract_utf16_string(&test), "abcd");
    }

    #[test]
    fn test_extract_utf16_string_odd_length() {
        let test = [97, 0, 98, 0, 99];
        assert_eq!(extract_utf16_string(&test), "ab");
    }

    #[test]
    fn test_extract_utf16_string_lossy() {
        // Unpaired high surrogate
        let test = [97, 0, 0x00, 0xd8, 98, 0];
        assert_eq!(extract_utf16_string(&test), "a\u{fffd}b");
    }

    #[test]
    fn test_extract_utf16_path() {
        let path = "C:\\Users\\bob\\Documents\\résumé.docx";
        let mut test: Vec<u8> = path.encode_utf16().flat_map(|c| c.to_le_bytes()).collect();
        test.extend_from_slice(&[0, 0]);

        assert_eq!(extract_utf16_path(&test), path);
    }

    #[test]
    fn test_extract_utf16_path_no_null() {
        let test = [67, 0, 58, 0, 92, 0, 97, 0];
        assert_eq!(extract_utf16_path(&test), "C:\\a");
    }

    #[test]
    fn test_extract_utf16_path_single_null_dropped() {
        let test = [97, 0, 0, 0, 0, 0];
        assert_eq!(extract_utf16_path(&test), "a\0");
    }

    #[test]
    fn test_extract_utf16_path_empty() {
        assert_eq!(extract_utf16_path(&[]), "");
        assert_eq!(extract_utf16_path(&[0, 0]), "");
    }
}
