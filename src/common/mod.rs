use crate::error::{FormatError, Result};
use std::io::Read;

/// Width of every lump and texture name field in the format
pub const NAME_LEN: usize = 8;

/// Decode a fixed-width name field.  Everything from the first NUL byte on is
/// padding; each remaining byte maps to one character.
pub fn slice_to_name(slice: &[u8]) -> String {
    slice
        .iter()
        .take_while(|&&byte| byte != 0)
        .copied()
        .map(char::from)
        .collect()
}

/// Read exactly `N` bytes, reporting a short read as a truncated `what`
pub(crate) fn read_array<const N: usize>(
    reader: &mut impl Read,
    what: &'static str,
) -> Result<[u8; N]> {
    let mut bytes = [0u8; N];
    reader
        .read_exact(&mut bytes[..])
        .map_err(|e| FormatError::from_io(e, what))?;
    Ok(bytes)
}

/// Read `length` bytes into a boxed slice
pub(crate) fn read_raw(
    reader: &mut impl Read,
    length: usize,
    what: &'static str,
) -> Result<Box<[u8]>> {
    let mut bytes = vec![0u8; length].into_boxed_slice();
    reader
        .read_exact(&mut bytes)
        .map_err(|e| FormatError::from_io(e, what))?;
    Ok(bytes)
}
