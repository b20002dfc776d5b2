use crate::common::{read_array, read_raw};
use crate::error::{FormatError, Result};
use crate::lump::{self, Blockmap, Colormap, Palette, Picture, Record};
use crate::wad::repr::{Entry, Head, ENTRY_SIZE};
use io::{Read, Seek, SeekFrom};
use std::io;
use std::mem::size_of;

/// Random-access reader over one archive.  Construction reads the header and
/// the whole directory; lump data is only touched by the `parse_*` methods.
#[derive(Debug)]
pub struct Parser<'a, Reader: Seek + Read> {
    cursor: &'a mut Reader,
    start: u64,
    length: u64,
    header: Head,
    directory: Vec<Entry>,
}

impl<'a, Reader: Seek + Read> Parser<'a, Reader> {
    pub fn new(cursor: &'a mut Reader) -> Result<Self> {
        let start = cursor.stream_position()?;
        let (header, directory) = parse_directory(cursor)?;
        let length = cursor.seek(SeekFrom::End(0))?.saturating_sub(start);

        Ok(Self {
            cursor,
            start,
            length,
            header,
            directory,
        })
    }

    pub fn header(&self) -> Head {
        self.header
    }

    pub fn directory(&self) -> &[Entry] {
        &self.directory
    }

    /// Length of the archive in bytes
    pub fn length(&self) -> u64 {
        self.length
    }

    pub fn parse_records<T: Record>(&mut self, entry: &Entry) -> Result<Vec<T>> {
        self.seek_to_entry(entry)?;
        lump::parse_records(self.cursor, entry.size())
    }

    pub fn parse_palettes(&mut self, entry: &Entry) -> Result<Vec<Palette>> {
        self.parse_records(entry)
    }

    pub fn parse_colormaps(&mut self, entry: &Entry) -> Result<Vec<Colormap>> {
        self.parse_records(entry)
    }

    pub fn parse_end_text(&mut self, entry: &Entry) -> Result<String> {
        self.seek_to_entry(entry)?;
        lump::parse_end_text(self.cursor, entry.size())
    }

    pub fn parse_picture(&mut self, entry: &Entry) -> Result<Picture> {
        self.seek_to_entry(entry)?;
        lump::parse_picture(self.cursor, entry.size())
    }

    pub fn parse_blockmap(&mut self, entry: &Entry) -> Result<Blockmap> {
        self.seek_to_entry(entry)?;
        lump::parse_blockmap(self.cursor, entry.size())
    }

    pub fn read_raw(&mut self, entry: &Entry) -> Result<Box<[u8]>> {
        self.seek_to_entry(entry)?;
        read_raw(self.cursor, entry.size() as usize, "lump")
    }

    fn seek_to_entry(&mut self, entry: &Entry) -> Result<()> {
        if entry.end() > self.length {
            return Err(FormatError::OutOfBounds {
                what: "lump",
                offset: entry.offset().into(),
                length: entry.size().into(),
                limit: self.length,
            });
        }

        log::trace!("Reading lump `{}` at {}", entry.name(), entry.offset());
        self.cursor
            .seek(SeekFrom::Start(self.start + u64::from(entry.offset())))?;
        Ok(())
    }
}

/// Read the 12-byte archive header from the reader's current position
pub fn parse_header(reader: &mut impl Read) -> Result<Head> {
    let header_bytes = read_array::<{ size_of::<Head>() }>(reader, "header")?;
    Head::try_from(header_bytes)
}

/// Read the header and directory of an archive starting at the cursor's
/// current position.  Entries come back in archive order.
pub fn parse_directory(
    cursor: &mut (impl Seek + Read),
) -> Result<(Head, Vec<Entry>)> {
    let start = cursor.stream_position()?;
    let end = cursor.seek(SeekFrom::End(0))?;
    cursor.seek(SeekFrom::Start(start))?;

    let header = parse_header(cursor)?;
    let directory =
        read_directory(cursor, start, end.saturating_sub(start), &header)?;
    Ok((header, directory))
}

fn read_directory(
    cursor: &mut (impl Seek + Read),
    start: u64,
    length: u64,
    header: &Head,
) -> Result<Vec<Entry>> {
    let dir_offset = u64::from(header.directory_offset());

    if dir_offset > length {
        return Err(FormatError::OutOfBounds {
            what: "directory",
            offset: dir_offset,
            length: header.directory_length(),
            limit: length,
        });
    }

    cursor.seek(SeekFrom::Start(start + dir_offset))?;

    // Capacity is capped by what the source can actually hold
    let room = (length - dir_offset) / ENTRY_SIZE as u64;
    let capacity = u64::from(header.lump_count()).min(room) as usize;
    let mut entries = Vec::<Entry>::with_capacity(capacity);

    for _ in 0..header.lump_count() {
        let entry_bytes = read_array::<ENTRY_SIZE>(cursor, "directory entry")?;
        let entry = Entry::from(entry_bytes);
        log::debug!(
            "Found lump `{}` ({} bytes at {})",
            entry.name(),
            entry.size(),
            entry.offset()
        );
        entries.push(entry);
    }

    Ok(entries)
}
