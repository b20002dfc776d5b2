use super::{ArchiveKind, Entry, Head};
use crate::error::FormatError;
use std::mem::size_of;

fn head_bytes(magic: &[u8; 4], count: u32, offset: u32) -> [u8; 12] {
    let mut bytes = [0u8; 12];
    bytes[..4].copy_from_slice(magic);
    bytes[4..8].copy_from_slice(&count.to_le_bytes());
    bytes[8..].copy_from_slice(&offset.to_le_bytes());
    bytes
}

#[test]
fn head_is_twelve_bytes() {
    assert_eq!(size_of::<Head>(), 12);
}

#[test]
fn iwad_head_from_bytes() {
    let head = Head::try_from(head_bytes(b"IWAD", 1264, 4_175_796)).unwrap();
    assert_eq!(head.kind(), ArchiveKind::Internal);
    assert_eq!(head.lump_count(), 1264);
    assert_eq!(head.directory_offset(), 4_175_796);
    assert_eq!(head.directory_length(), 1264 * 16);
}

#[test]
fn pwad_head_from_bytes() {
    let head = Head::try_from(head_bytes(b"PWAD", 3, 12)).unwrap();
    assert_eq!(head.kind(), ArchiveKind::Patch);
    assert_eq!(head.magic(), *b"PWAD");
}

#[test]
fn head_bad_magic() {
    let e = Head::try_from(head_bytes(b"WAD2", 0, 12)).unwrap_err();
    assert!(matches!(e, FormatError::BadMagic(magic) if &magic == b"WAD2"));
}

#[test]
fn head_new_matches_kind() {
    let head = Head::new(ArchiveKind::Patch, 0, 12);
    assert_eq!(head.magic(), *b"PWAD");
    assert_eq!(Head::new(ArchiveKind::Internal, 0, 12).kind(), ArchiveKind::Internal);
}

#[test]
fn entry_from_bytes() {
    let mut bytes = [0u8; 16];
    bytes[..4].copy_from_slice(&(67_500_u32).to_le_bytes());
    bytes[4..8].copy_from_slice(&(10_752_u32).to_le_bytes());
    bytes[8..15].copy_from_slice(b"PLAYPAL");

    let entry = Entry::from(bytes);
    assert_eq!(entry.offset(), 67_500);
    assert_eq!(entry.size(), 10_752);
    assert_eq!(entry.name(), "PLAYPAL");
    assert_eq!(entry.end(), 67_500 + 10_752);
}

#[test]
fn entry_full_width_name() {
    let mut bytes = [0u8; 16];
    bytes[8..].copy_from_slice(b"SSECTORS");
    assert_eq!(Entry::from(bytes).name(), "SSECTORS");
}

#[test]
fn entry_end_does_not_overflow() {
    let entry = Entry::new(u32::MAX, u32::MAX, "HUGE");
    assert_eq!(entry.end(), 2 * u64::from(u32::MAX));
}
