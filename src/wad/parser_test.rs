use crate::error::FormatError;
use crate::lump::{Thing, Vertex};
use crate::wad::{self, ArchiveKind, Parser};
use std::io::{Cursor, Seek, SeekFrom};

fn entry_bytes(offset: u32, size: u32, name: &[u8]) -> Vec<u8> {
    let mut entry: Vec<u8> = Vec::new();
    let mut padded = [0u8; 8];
    padded[..name.len()].copy_from_slice(name);

    entry.extend(offset.to_le_bytes());
    entry.extend(size.to_le_bytes());
    entry.extend(padded);

    entry
}

fn vertex_bytes() -> Vec<u8> {
    let mut bytes: Vec<u8> = Vec::new();

    for (x, y) in [(100i16, 200i16), (-50, 300), (i16::MIN, i16::MAX)] {
        bytes.extend(x.to_le_bytes());
        bytes.extend(y.to_le_bytes());
    }

    bytes
}

fn good_wad_bytes() -> Vec<u8> {
    let vertexes = vertex_bytes();
    let things = [0u8; 20];
    let directory_offset: u32 =
        (12 + vertexes.len() + things.len()).try_into().unwrap();

    let mut wad: Vec<u8> = Vec::new();
    wad.extend(b"PWAD");
    wad.extend((2u32).to_le_bytes());
    wad.extend(directory_offset.to_le_bytes());

    let vertex_offset: u32 = wad.len().try_into().unwrap();
    wad.extend(&vertexes);

    let things_offset: u32 = wad.len().try_into().unwrap();
    wad.extend(things);

    wad.extend(entry_bytes(
        vertex_offset,
        vertexes.len().try_into().unwrap(),
        b"VERTEXES",
    ));
    wad.extend(entry_bytes(things_offset, 20, b"THINGS"));

    wad
}

#[test]
fn parse_good_directory() {
    let mut wad_file = Cursor::new(good_wad_bytes());
    let (header, directory) = wad::parse_directory(&mut wad_file).unwrap();

    assert_eq!(header.kind(), ArchiveKind::Patch);
    assert_eq!(directory.len(), header.lump_count() as usize);
    assert_eq!(directory[0].name(), "VERTEXES");
    assert_eq!(directory[0].size(), 12);
    assert_eq!(directory[1].name(), "THINGS");
    assert_eq!(directory[1].offset(), 24);
}

#[test]
fn parser_reads_records() {
    let mut wad_file = Cursor::new(good_wad_bytes());
    let mut parser = Parser::new(&mut wad_file).unwrap();
    let entry = parser.directory()[0].clone();
    let vertexes: Vec<Vertex> = parser.parse_records(&entry).unwrap();

    assert_eq!(
        vertexes,
        [
            Vertex { x: 100, y: 200 },
            Vertex { x: -50, y: 300 },
            Vertex {
                x: i16::MIN,
                y: i16::MAX
            },
        ]
    );

    let entry = parser.directory()[1].clone();
    let things: Vec<Thing> = parser.parse_records(&entry).unwrap();
    assert_eq!(things.len(), 2);
}

#[test]
fn parser_respects_stream_start() {
    let mut bytes = vec![0xAAu8; 5];
    bytes.extend(good_wad_bytes());
    let mut wad_file = Cursor::new(bytes);
    wad_file.seek(SeekFrom::Start(5)).unwrap();

    let mut parser = Parser::new(&mut wad_file).unwrap();
    assert_eq!(parser.length(), good_wad_bytes().len() as u64);

    let entry = parser.directory()[0].clone();
    let vertexes: Vec<Vertex> = parser.parse_records(&entry).unwrap();
    assert_eq!(vertexes[1], Vertex { x: -50, y: 300 });
}

#[test]
fn parse_bad_magic_wad() {
    let mut wad_file = Cursor::new(b"WAD2\0\0\0\0\x0c\0\0\0");
    let e = wad::parse_directory(&mut wad_file).unwrap_err();

    assert!(matches!(e, FormatError::BadMagic(_)));
}

#[test]
fn parse_bad_short_wad() {
    let mut wad_file = Cursor::new(b"IWAD");
    let e = wad::parse_directory(&mut wad_file).unwrap_err();

    assert!(matches!(e, FormatError::Truncated(_)));
}

#[test]
fn parse_truncated_directory() {
    let mut wad_file = Cursor::new(b"IWAD\x01\0\0\0\x0c\0\0\0\0\0\0\0");
    let e = wad::parse_directory(&mut wad_file).unwrap_err();

    assert!(matches!(e, FormatError::Truncated("directory entry")));
}

#[test]
fn parse_directory_offset_past_end() {
    let mut wad_file = Cursor::new(b"IWAD\x01\0\0\0\xff\0\0\0");
    let e = wad::parse_directory(&mut wad_file).unwrap_err();

    assert!(matches!(
        e,
        FormatError::OutOfBounds {
            what: "directory",
            offset: 255,
            ..
        }
    ));
}

#[test]
fn parse_empty_directory() {
    let mut wad_file = Cursor::new(b"IWAD\0\0\0\0\x0c\0\0\0");
    let (header, directory) = wad::parse_directory(&mut wad_file).unwrap();

    assert_eq!(header.lump_count(), 0);
    assert!(directory.is_empty());
}

#[test]
fn huge_lump_count_fails_cleanly() {
    let mut wad_file = Cursor::new(b"IWAD\xff\xff\xff\xff\x0c\0\0\0");
    let e = wad::parse_directory(&mut wad_file).unwrap_err();

    assert!(matches!(e, FormatError::Truncated(_)));
}

#[test]
fn lump_past_end_is_out_of_bounds() {
    let mut wad: Vec<u8> = Vec::new();
    wad.extend(b"IWAD\x01\0\0\0\x0c\0\0\0");
    wad.extend(entry_bytes(12, 400, b"THINGS"));

    let mut wad_file = Cursor::new(wad);
    let mut parser = Parser::new(&mut wad_file).unwrap();
    let entry = parser.directory()[0].clone();
    let e = parser.parse_records::<Thing>(&entry).unwrap_err();

    assert!(matches!(
        e,
        FormatError::OutOfBounds {
            what: "lump",
            offset: 12,
            length: 400,
            limit: 28
        }
    ));
}

#[test]
fn read_raw_lump() {
    let mut wad_file = Cursor::new(good_wad_bytes());
    let mut parser = Parser::new(&mut wad_file).unwrap();
    let entry = parser.directory()[1].clone();

    assert_eq!(&parser.read_raw(&entry).unwrap()[..], &[0u8; 20][..]);
}
