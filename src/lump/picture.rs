use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{Cursor, Read};

use crate::common::{read_array, read_raw};
use crate::error::{FormatError, Result};

/// `top_offset` value that ends a column
pub const POST_SENTINEL: u8 = 0xFF;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct PictureHead {
    pub width: i16,
    pub height: i16,
    pub left_offset: i16,
    pub top_offset: i16,
}

impl PictureHead {
    pub const SIZE: usize = 8;
}

impl From<[u8; PictureHead::SIZE]> for PictureHead {
    fn from(bytes: [u8; PictureHead::SIZE]) -> Self {
        let field = |i: usize| i16::from_le_bytes([bytes[i], bytes[i + 1]]);

        PictureHead {
            width: field(0),
            height: field(2),
            left_offset: field(4),
            top_offset: field(6),
        }
    }
}

/// Vertical run of opaque pixels starting at row `top_offset`
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Post {
    pub top_offset: u8,
    pub pixels: Box<[u8]>,
}

impl Post {
    /// Palette index at `row`, if this post covers it
    pub fn pixel(&self, row: usize) -> Option<u8> {
        row.checked_sub(usize::from(self.top_offset))
            .and_then(|i| self.pixels.get(i))
            .copied()
    }
}

/// One pixel column.  Rows not covered by any post are transparent.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Column {
    posts: Vec<Post>,
}

impl Column {
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn pixel(&self, row: usize) -> Option<u8> {
        self.posts.iter().find_map(|post| post.pixel(row))
    }
}

/// Column-major, run-length encoded indexed-color image used for sprites,
/// wall patches and most interface graphics
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Picture {
    head: PictureHead,
    columns: Vec<Column>,
}

impl Picture {
    pub fn head(&self) -> PictureHead {
        self.head
    }

    pub fn width(&self) -> i16 {
        self.head.width
    }

    pub fn height(&self) -> i16 {
        self.head.height
    }

    /// Horizontal distance from the picture's origin to its left edge
    pub fn left_offset(&self) -> i16 {
        self.head.left_offset
    }

    /// Vertical distance from the picture's origin to its top edge
    pub fn top_offset(&self) -> i16 {
        self.head.top_offset
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Palette index at `(x, y)`, or `None` where the picture is transparent
    pub fn pixel(&self, x: usize, y: usize) -> Option<u8> {
        self.columns.get(x).and_then(|column| column.pixel(y))
    }

    /// Expand into a row-major `width * height` grid.  Post pixels that fall
    /// below `height` are dropped.
    pub fn to_indexed(&self) -> Vec<Option<u8>> {
        let width = self.columns.len();
        let height = usize::try_from(self.head.height).unwrap_or(0);
        let mut grid = vec![None; width * height];

        for (x, column) in self.columns.iter().enumerate() {
            for post in column.posts() {
                let top = usize::from(post.top_offset);

                for (i, &pixel) in post.pixels.iter().enumerate() {
                    let y = top + i;

                    if y >= height {
                        break;
                    }

                    grid[y * width + x] = Some(pixel);
                }
            }
        }

        grid
    }
}

/// Read a `length`-byte picture lump from the reader's current position
pub fn parse_picture(reader: &mut impl Read, length: u32) -> Result<Picture> {
    let bytes = read_raw(reader, length as usize, "picture")?;
    decode_picture(&bytes)
}

/// Decode a picture from the bytes of its lump.  Column offsets are relative
/// to the start of `bytes` and may appear in any order or alias each other.
pub fn decode_picture(bytes: &[u8]) -> Result<Picture> {
    let mut cursor = Cursor::new(bytes);
    let head = PictureHead::from(read_array::<{ PictureHead::SIZE }>(
        &mut cursor,
        "picture header",
    )?);

    let width = usize::try_from(head.width).map_err(|_| {
        FormatError::InvalidPicture(format!("negative width {}", head.width))
    })?;

    let mut offsets = Vec::with_capacity(width);

    for _ in 0..width {
        let offset = cursor
            .read_u32::<LittleEndian>()
            .map_err(|e| FormatError::from_io(e, "column offset"))?;
        offsets.push(offset);
    }

    let limit = bytes.len() as u64;
    let mut columns = Vec::with_capacity(width);

    for offset in offsets {
        let offset = u64::from(offset);

        if offset >= limit {
            return Err(FormatError::OutOfBounds {
                what: "picture column",
                offset,
                length: 1,
                limit,
            });
        }

        cursor.set_position(offset);
        columns.push(parse_column(&mut cursor)?);
    }

    log::trace!(
        "Decoded {}x{} picture with {} columns",
        head.width,
        head.height,
        columns.len()
    );

    Ok(Picture { head, columns })
}

fn read_post_byte(reader: &mut impl Read) -> Result<u8> {
    reader
        .read_u8()
        .map_err(|e| FormatError::from_io(e, "post"))
}

fn parse_column(cursor: &mut Cursor<&[u8]>) -> Result<Column> {
    let mut posts = Vec::new();

    loop {
        let top_offset = read_post_byte(cursor)?;

        if top_offset == POST_SENTINEL {
            break;
        }

        let pixel_count = read_post_byte(cursor)?;
        read_post_byte(cursor)?;
        let pixels = read_raw(cursor, usize::from(pixel_count), "post pixels")?;
        read_post_byte(cursor)?;

        posts.push(Post { top_offset, pixels });
    }

    Ok(Column { posts })
}
