/**
 * When parsing binary formats often we parse X bytes and convert bytes to a number
 * With nom we can do that in two steps, ex:  
 *   `take X bytes`  
 *   `le_uX` to number
 *
 * Every Recycle Bin structure is little endian, so these helpers only read little endian values
 */
use nom::{
    bytes::complete::take,
    number::complete::{le_u32, le_u64},
};
use std::mem::size_of;

/// Nom four (4) little endian bytes to u32
pub(crate) fn nom_unsigned_four_bytes(data: &[u8]) -> nom::IResult<&[u8], u32> {
    let (input, value_data) = take(size_of::<u32>())(data)?;
    let (_, value) = le_u32(value_data)?;

    Ok((input, value))
}

/// Nom eight (8) little endian bytes to u64
pub(crate) fn nom_unsigned_eight_bytes(data: &[u8]) -> nom::IResult<&[u8], u64> {
    let (input, value_data) = take(size_of::<u64>())(data)?;
    let (_, value) = le_u64(value_data)?;

    Ok((input, value))
}

/// Nom an arbitrary amount of data and return the bytes remaining and bytes nom'd
pub(crate) fn nom_data(data: &[u8], count: u64) -> nom::IResult<&[u8], &[u8]> {
    let (input, value) = take(count)(data)?;

    Ok((input, value))
}
