use super::{
    Blockmap, Colormap, Linedef, Node, Palette, Record, Rgb, Sector, Seg,
    Sidedef, Subsector, Thing, Vertex,
};

fn words(values: &[i16]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

fn read<T: Record>(bytes: &[u8]) -> T {
    assert_eq!(bytes.len(), T::SIZE);
    T::read(&mut &bytes[..]).unwrap()
}

#[test]
fn thing_from_bytes() {
    let thing: Thing = read(&words(&[1056, -3616, 90, 1, 7]));
    assert_eq!(
        thing,
        Thing {
            x: 1056,
            y: -3616,
            angle: 90,
            kind: 1,
            flags: 7
        }
    );
}

#[test]
fn linedef_from_bytes() {
    let line: Linedef = read(&words(&[0, 1, 1, 0, 0, 0, -1]));
    assert_eq!(line.start_vertex, 0);
    assert_eq!(line.end_vertex, 1);
    assert_eq!(line.front_sidedef, 0);
    assert_eq!(line.back_sidedef, -1);
    assert!(!line.is_two_sided());
}

#[test]
fn sidedef_from_bytes() {
    let mut bytes = words(&[8, -16]);
    bytes.extend(b"STARTAN3");
    bytes.extend(b"-\0\0\0\0\0\0\0");
    bytes.extend(b"DOOR3\0\0\0");
    bytes.extend(words(&[42]));

    let side: Sidedef = read(&bytes);
    assert_eq!(side.x_offset, 8);
    assert_eq!(side.y_offset, -16);
    assert_eq!(side.upper_texture_name(), "STARTAN3");
    assert_eq!(side.lower_texture_name(), "-");
    assert_eq!(side.middle_texture_name(), "DOOR3");
    assert_eq!(side.sector, 42);
}

#[test]
fn vertex_seg_subsector_from_bytes() {
    assert_eq!(read::<Vertex>(&words(&[-768, 512])), Vertex { x: -768, y: 512 });

    let seg: Seg = read(&words(&[3, 4, 16384, 12, 1, 32]));
    assert_eq!(seg.angle, 16384);
    assert_eq!(seg.linedef, 12);
    assert_eq!(seg.direction, 1);
    assert_eq!(seg.offset, 32);

    let sub: Subsector = read(&words(&[4, 120]));
    assert_eq!(
        sub,
        Subsector {
            seg_count: 4,
            first_seg: 120
        }
    );
}

#[test]
fn node_from_bytes() {
    let node: Node = read(&words(&[
        1784, -3448, 0, 192, 1, 2, 3, 4, 5, 6, 7, 8, 12, -32768,
    ]));
    assert_eq!(node.x, 1784);
    assert_eq!(node.dy, 192);
    assert_eq!(node.right_bbox, [1, 2, 3, 4]);
    assert_eq!(node.left_bbox, [5, 6, 7, 8]);
    assert_eq!(Node::subsector(node.right_child), None);
    assert_eq!(Node::subsector(node.left_child), Some(0));
    assert_eq!(Node::subsector(-32768 + 5), Some(5));
}

#[test]
fn sector_from_bytes() {
    let mut bytes = words(&[0, 72]);
    bytes.extend(b"FLOOR4_8");
    bytes.extend(b"CEIL3_5\0");
    bytes.extend(words(&[160, 9, 3]));

    let sector: Sector = read(&bytes);
    assert_eq!(sector.ceiling_height, 72);
    assert_eq!(sector.floor_flat_name(), "FLOOR4_8");
    assert_eq!(sector.ceiling_flat_name(), "CEIL3_5");
    assert_eq!(sector.light_level, 160);
    assert_eq!(sector.special_type, 9);
    assert_eq!(sector.tag, 3);
}

#[test]
fn palette_groups_triples() {
    let bytes: Vec<u8> = (0..768u32).map(|i| (i % 251) as u8).collect();
    let palette: Palette = read(&bytes);

    for index in 0..=255u8 {
        let i = usize::from(index) * 3;
        let expected = Rgb::from([bytes[i], bytes[i + 1], bytes[i + 2]]);
        assert_eq!(palette[index], expected);
        assert_eq!(palette.color(index), expected);
    }
}

#[test]
fn colormap_remaps() {
    let bytes: Vec<u8> = (0..=255u8).rev().collect();
    let colormap: Colormap = read(&bytes);

    assert_eq!(colormap.remap(0), 255);
    assert_eq!(colormap[255u8], 0);
    assert_eq!(colormap.indices()[10], 245);
}

#[test]
fn rgb_array_conversion() {
    let color = Rgb::from([1, 2, 3]);
    assert_eq!(<[u8; 3]>::from(color), [1, 2, 3]);
}

#[test]
fn blockmap_offsets_clamped() {
    let blockmap = Blockmap {
        columns: 3,
        rows: 2,
        cells: vec![10, 11, 12, 13],
        ..Blockmap::default()
    };
    assert_eq!(blockmap.offsets(), &[10, 11, 12, 13]);

    let blockmap = Blockmap {
        columns: 1,
        rows: 2,
        cells: vec![4, 5, 0, -1, 0, -1],
        ..Blockmap::default()
    };
    assert_eq!(blockmap.offsets(), &[4, 5]);

    let blockmap = Blockmap {
        columns: -1,
        rows: 2,
        cells: vec![4, 5],
        ..Blockmap::default()
    };
    assert!(blockmap.offsets().is_empty());
}
