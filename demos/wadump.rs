mod demo_util;

use doom_wad::{Archive, Palette, Picture};

use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use png::{ColorType, Encoder};

use demo_util::{setup_logging, wad_path};

fn main() {
    setup_logging();

    let archive = Archive::open(wad_path())
        .map_err(|e| format!("{}", e))
        .unwrap();

    for (idx, palette) in archive.palettes().iter().enumerate() {
        println!("Writing palette {}...", idx);
        write_palette(&format!("PLAYPAL.{}", idx), palette);
    }

    let has_pictures = archive.sprite_names().next().is_some()
        || archive.patch_names().next().is_some();

    if has_pictures {
        match archive.palette(0) {
            Ok(palette) => write_pictures(&archive, palette),
            Err(e) => eprintln!("Skipping sprites and patches: {}", e),
        }
    }

    if let Some(text) = archive.end_text() {
        println!("Writing end screen...");
        let mut writer = new_writer("ENDOOM.txt");

        for line in text.as_bytes().chunks(80) {
            writer.write_all(line).unwrap();
            writer.write_all(b"\n").unwrap();
        }
    }
}

fn new_writer(file_name: &str) -> impl Write {
    let mut path = PathBuf::from("dump");
    create_dir_all(&path).unwrap();
    path.push(file_name);
    let file = File::create(path).unwrap();
    BufWriter::new(file)
}

fn write_png(name: &str, width: u32, height: u32, rgba: &[u8]) {
    let writer = new_writer(&format!("{}.png", name));
    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(ColorType::Rgba);
    let mut writer = encoder.write_header().unwrap();
    writer.write_image_data(rgba).unwrap();
}

fn write_pictures(archive: &Archive, palette: &Palette) {
    for name in archive.sprite_names() {
        println!("Writing sprite {}...", name);
        write_picture(name, archive.sprite(name).unwrap(), palette);
    }

    for name in archive.patch_names() {
        println!("Writing patch {}...", name);
        write_picture(name, archive.patch(name).unwrap(), palette);
    }
}

fn write_picture(name: &str, picture: &Picture, palette: &Palette) {
    let width = picture.columns().len() as u32;
    let height = picture.height().max(0) as u32;

    if width == 0 || height == 0 {
        eprintln!("Skipping empty picture \"{}\"", name);
        return;
    }

    let rgba = picture
        .to_indexed()
        .into_iter()
        .flat_map(|pixel| match pixel {
            Some(index) => {
                let [r, g, b] = <[u8; 3]>::from(palette[index]);
                [r, g, b, 0xFF]
            }
            None => [0u8; 4],
        })
        .collect::<Vec<u8>>();

    write_png(name, width, height, &rgba);
}

/// 16x16 swatch, one pixel per color
fn write_palette(name: &str, palette: &Palette) {
    let rgba = palette
        .colors()
        .iter()
        .flat_map(|&color| {
            let [r, g, b] = <[u8; 3]>::from(color);
            [r, g, b, 0xFF]
        })
        .collect::<Vec<u8>>();

    write_png(name, 16, 16, &rgba);
}
