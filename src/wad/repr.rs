use std::mem::size_of;

use crate::common::{slice_to_name, NAME_LEN};
use crate::error::FormatError;

pub const IWAD_MAGIC: [u8; 4] = *b"IWAD";
pub const PWAD_MAGIC: [u8; 4] = *b"PWAD";

/// On-disk width of a directory record
pub const ENTRY_SIZE: usize = 16;

/// Whether an archive is a complete game (IWAD) or an add-on layered on top
/// of one (PWAD)
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ArchiveKind {
    Internal,
    Patch,
}

impl ArchiveKind {
    pub fn magic(self) -> [u8; 4] {
        match self {
            ArchiveKind::Internal => IWAD_MAGIC,
            ArchiveKind::Patch => PWAD_MAGIC,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(C, packed)]
pub struct Head {
    magic: [u8; 4],
    lump_count: u32,
    directory_offset: u32,
}

impl Head {
    pub fn new(kind: ArchiveKind, lump_count: u32, directory_offset: u32) -> Self {
        Head {
            magic: kind.magic(),
            lump_count,
            directory_offset,
        }
    }

    pub fn kind(&self) -> ArchiveKind {
        if self.magic == PWAD_MAGIC {
            ArchiveKind::Patch
        } else {
            ArchiveKind::Internal
        }
    }

    pub fn magic(&self) -> [u8; 4] {
        self.magic
    }

    pub fn lump_count(&self) -> u32 {
        self.lump_count
    }

    pub fn directory_offset(&self) -> u32 {
        self.directory_offset
    }

    /// Number of bytes the directory occupies
    pub fn directory_length(&self) -> u64 {
        u64::from(self.lump_count) * ENTRY_SIZE as u64
    }
}

impl TryFrom<[u8; size_of::<Head>()]> for Head {
    type Error = FormatError;

    fn try_from(bytes: [u8; size_of::<Head>()]) -> Result<Self, Self::Error> {
        let (magic_bytes, rest) = bytes.split_at(4);
        let magic = <[u8; 4]>::try_from(magic_bytes).unwrap();

        if magic != IWAD_MAGIC && magic != PWAD_MAGIC {
            return Err(FormatError::BadMagic(magic));
        }

        let (count_bytes, offset_bytes) = rest.split_at(4);
        let lump_count =
            u32::from_le_bytes(<[u8; 4]>::try_from(count_bytes).unwrap());
        let directory_offset =
            u32::from_le_bytes(<[u8; 4]>::try_from(offset_bytes).unwrap());

        Ok(Head {
            magic,
            lump_count,
            directory_offset,
        })
    }
}

/// Provides the location of a lump within the archive, its length, and its
/// name (8 bytes on disk, NUL-padded)
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Entry {
    offset: u32,
    size: u32,
    name: String,
}

impl Entry {
    pub fn new(offset: u32, size: u32, name: impl Into<String>) -> Self {
        Entry {
            offset,
            size,
            name: name.into(),
        }
    }

    /// Archive offset of lump
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Length of lump in bytes
    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// One past the last byte of the lump
    pub fn end(&self) -> u64 {
        u64::from(self.offset) + u64::from(self.size)
    }
}

impl From<[u8; ENTRY_SIZE]> for Entry {
    fn from(bytes: [u8; ENTRY_SIZE]) -> Self {
        let (offset_bytes, rest) = bytes.split_at(4);
        let offset =
            u32::from_le_bytes(<[u8; 4]>::try_from(offset_bytes).unwrap());

        let (size_bytes, name_bytes) = rest.split_at(4);
        let size = u32::from_le_bytes(<[u8; 4]>::try_from(size_bytes).unwrap());

        debug_assert_eq!(name_bytes.len(), NAME_LEN);

        Entry {
            offset,
            size,
            name: slice_to_name(name_bytes),
        }
    }
}
