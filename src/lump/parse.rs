use byteorder::{LittleEndian, ReadBytesExt};
use std::io::Read;

use crate::common::{read_array, read_raw};
use crate::error::{FormatError, Result};
use crate::lump::{Blockmap, Record};

/// Read a `length`-byte lump as an array of `T`.  The lump must hold a whole
/// number of records.
pub fn parse_records<T: Record>(
    reader: &mut impl Read,
    length: u32,
) -> Result<Vec<T>> {
    let size = length as usize;

    if size % T::SIZE != 0 {
        return Err(FormatError::Misaligned {
            size: length,
            width: T::SIZE,
        });
    }

    let count = size / T::SIZE;
    let mut records = Vec::with_capacity(count);

    for _ in 0..count {
        let record =
            T::read(reader).map_err(|e| FormatError::from_io(e, T::KIND))?;
        records.push(record);
    }

    Ok(records)
}

/// Read the end-screen text lump.  The lump is a grid of 2-byte cells, a
/// character followed by its color attribute; only the characters are kept.
/// A trailing half cell is ignored.
pub fn parse_end_text(reader: &mut impl Read, length: u32) -> Result<String> {
    let cells = read_raw(reader, length as usize, "end text")?;

    Ok(cells
        .chunks_exact(2)
        .map(|cell| char::from(cell[0]))
        .collect())
}

pub fn parse_blockmap(reader: &mut impl Read, length: u32) -> Result<Blockmap> {
    let body = (length as usize)
        .checked_sub(Blockmap::HEAD_SIZE)
        .ok_or(FormatError::Truncated("blockmap header"))?;

    if body % 2 != 0 {
        return Err(FormatError::Misaligned {
            size: body as u32,
            width: 2,
        });
    }

    let head = read_array::<{ Blockmap::HEAD_SIZE }>(reader, "blockmap header")?;
    let field = |i: usize| i16::from_le_bytes([head[i], head[i + 1]]);

    let mut cells = vec![0i16; body / 2];
    reader
        .read_i16_into::<LittleEndian>(&mut cells)
        .map_err(|e| FormatError::from_io(e, "blockmap"))?;

    Ok(Blockmap {
        x_origin: field(0),
        y_origin: field(2),
        columns: field(4),
        rows: field(6),
        cells,
    })
}
