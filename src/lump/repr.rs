use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{self, Read};

use crate::common::{slice_to_name, NAME_LEN};

/// A fixed-width little-endian record, many of which are packed back-to-back
/// in a single lump
pub trait Record: Sized {
    /// Encoded width in bytes
    const SIZE: usize;

    /// What to call a record of this kind in error messages
    const KIND: &'static str;

    fn read<R: Read>(reader: &mut R) -> io::Result<Self>;
}

fn read_name<R: Read>(reader: &mut R) -> io::Result<[u8; NAME_LEN]> {
    let mut name = [0u8; NAME_LEN];
    reader.read_exact(&mut name)?;
    Ok(name)
}

fn read_i16<R: Read>(reader: &mut R) -> io::Result<i16> {
    reader.read_i16::<LittleEndian>()
}

/// Map object placement
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Thing {
    pub x: i16,
    pub y: i16,
    pub angle: i16,
    pub kind: i16,
    pub flags: i16,
}

impl Record for Thing {
    const SIZE: usize = 10;
    const KIND: &'static str = "thing";

    fn read<R: Read>(reader: &mut R) -> io::Result<Self> {
        Ok(Thing {
            x: read_i16(reader)?,
            y: read_i16(reader)?,
            angle: read_i16(reader)?,
            kind: read_i16(reader)?,
            flags: read_i16(reader)?,
        })
    }
}

/// Wall between two vertexes, with up to two sides
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Linedef {
    pub start_vertex: i16,
    pub end_vertex: i16,
    pub flags: i16,
    pub special_type: i16,
    pub sector_tag: i16,
    pub front_sidedef: i16,
    /// -1 for one-sided lines
    pub back_sidedef: i16,
}

impl Linedef {
    pub fn is_two_sided(&self) -> bool {
        self.back_sidedef >= 0
    }
}

impl Record for Linedef {
    const SIZE: usize = 14;
    const KIND: &'static str = "linedef";

    fn read<R: Read>(reader: &mut R) -> io::Result<Self> {
        Ok(Linedef {
            start_vertex: read_i16(reader)?,
            end_vertex: read_i16(reader)?,
            flags: read_i16(reader)?,
            special_type: read_i16(reader)?,
            sector_tag: read_i16(reader)?,
            front_sidedef: read_i16(reader)?,
            back_sidedef: read_i16(reader)?,
        })
    }
}

/// Texturing for one side of a linedef
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Sidedef {
    pub x_offset: i16,
    pub y_offset: i16,
    pub upper_texture: [u8; NAME_LEN],
    pub lower_texture: [u8; NAME_LEN],
    pub middle_texture: [u8; NAME_LEN],
    pub sector: i16,
}

impl Sidedef {
    pub fn upper_texture_name(&self) -> String {
        slice_to_name(&self.upper_texture)
    }

    pub fn lower_texture_name(&self) -> String {
        slice_to_name(&self.lower_texture)
    }

    pub fn middle_texture_name(&self) -> String {
        slice_to_name(&self.middle_texture)
    }
}

impl Record for Sidedef {
    const SIZE: usize = 30;
    const KIND: &'static str = "sidedef";

    fn read<R: Read>(reader: &mut R) -> io::Result<Self> {
        Ok(Sidedef {
            x_offset: read_i16(reader)?,
            y_offset: read_i16(reader)?,
            upper_texture: read_name(reader)?,
            lower_texture: read_name(reader)?,
            middle_texture: read_name(reader)?,
            sector: read_i16(reader)?,
        })
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Vertex {
    pub x: i16,
    pub y: i16,
}

impl Record for Vertex {
    const SIZE: usize = 4;
    const KIND: &'static str = "vertex";

    fn read<R: Read>(reader: &mut R) -> io::Result<Self> {
        Ok(Vertex {
            x: read_i16(reader)?,
            y: read_i16(reader)?,
        })
    }
}

/// Part of a linedef bounding a subsector
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Seg {
    pub start_vertex: i16,
    pub end_vertex: i16,
    pub angle: i16,
    pub linedef: i16,
    /// 0 when the seg runs along the linedef, 1 when opposite
    pub direction: i16,
    pub offset: i16,
}

impl Record for Seg {
    const SIZE: usize = 12;
    const KIND: &'static str = "seg";

    fn read<R: Read>(reader: &mut R) -> io::Result<Self> {
        Ok(Seg {
            start_vertex: read_i16(reader)?,
            end_vertex: read_i16(reader)?,
            angle: read_i16(reader)?,
            linedef: read_i16(reader)?,
            direction: read_i16(reader)?,
            offset: read_i16(reader)?,
        })
    }
}

/// Convex run of consecutive segs
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Subsector {
    pub seg_count: i16,
    pub first_seg: i16,
}

impl Record for Subsector {
    const SIZE: usize = 4;
    const KIND: &'static str = "subsector";

    fn read<R: Read>(reader: &mut R) -> io::Result<Self> {
        Ok(Subsector {
            seg_count: read_i16(reader)?,
            first_seg: read_i16(reader)?,
        })
    }
}

/// BSP tree node.  Bounding boxes are `[top, bottom, left, right]`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Node {
    pub x: i16,
    pub y: i16,
    pub dx: i16,
    pub dy: i16,
    pub right_bbox: [i16; 4],
    pub left_bbox: [i16; 4],
    pub right_child: i16,
    pub left_child: i16,
}

impl Node {
    /// Children with the high bit set index a subsector rather than a node
    pub const SUBSECTOR_BIT: u16 = 0x8000;

    /// Subsector index referenced by `child`, if it is a leaf
    pub fn subsector(child: i16) -> Option<u16> {
        let child = child as u16;

        if child & Self::SUBSECTOR_BIT != 0 {
            Some(child & !Self::SUBSECTOR_BIT)
        } else {
            None
        }
    }
}

impl Record for Node {
    const SIZE: usize = 28;
    const KIND: &'static str = "node";

    fn read<R: Read>(reader: &mut R) -> io::Result<Self> {
        let x = read_i16(reader)?;
        let y = read_i16(reader)?;
        let dx = read_i16(reader)?;
        let dy = read_i16(reader)?;
        let mut right_bbox = [0i16; 4];
        reader.read_i16_into::<LittleEndian>(&mut right_bbox)?;
        let mut left_bbox = [0i16; 4];
        reader.read_i16_into::<LittleEndian>(&mut left_bbox)?;

        Ok(Node {
            x,
            y,
            dx,
            dy,
            right_bbox,
            left_bbox,
            right_child: read_i16(reader)?,
            left_child: read_i16(reader)?,
        })
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Sector {
    pub floor_height: i16,
    pub ceiling_height: i16,
    pub floor_flat: [u8; NAME_LEN],
    pub ceiling_flat: [u8; NAME_LEN],
    pub light_level: i16,
    pub special_type: i16,
    pub tag: i16,
}

impl Sector {
    pub fn floor_flat_name(&self) -> String {
        slice_to_name(&self.floor_flat)
    }

    pub fn ceiling_flat_name(&self) -> String {
        slice_to_name(&self.ceiling_flat)
    }
}

impl Record for Sector {
    const SIZE: usize = 26;
    const KIND: &'static str = "sector";

    fn read<R: Read>(reader: &mut R) -> io::Result<Self> {
        Ok(Sector {
            floor_height: read_i16(reader)?,
            ceiling_height: read_i16(reader)?,
            floor_flat: read_name(reader)?,
            ceiling_flat: read_name(reader)?,
            light_level: read_i16(reader)?,
            special_type: read_i16(reader)?,
            tag: read_i16(reader)?,
        })
    }
}

/// Collision grid over a map.  `cells` holds everything after the 8-byte
/// header: one offset per cell (in 16-bit words from the lump start) followed
/// by the block lists those offsets point into.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Blockmap {
    pub x_origin: i16,
    pub y_origin: i16,
    pub columns: i16,
    pub rows: i16,
    pub cells: Vec<i16>,
}

impl Blockmap {
    pub const HEAD_SIZE: usize = 8;

    /// Per-cell offsets, clamped to the data actually present
    pub fn offsets(&self) -> &[i16] {
        let columns = usize::try_from(self.columns).unwrap_or(0);
        let rows = usize::try_from(self.rows).unwrap_or(0);
        let count = (columns * rows).min(self.cells.len());
        &self.cells[..count]
    }
}
