mod demo_util;

use doom_wad::archive::{classify, LumpTask, Section};
use doom_wad::wad;

use std::fs::File;
use std::io::BufReader;

use demo_util::{setup_logging, wad_path};

fn main() {
    setup_logging();

    let file = File::open(wad_path()).expect("Could not open file");
    let mut cursor = BufReader::new(file);

    let (header, directory) = wad::parse_directory(&mut cursor).unwrap();

    println!(
        "{:?} archive, {} lumps, directory at {}",
        header.kind(),
        header.lump_count(),
        header.directory_offset()
    );

    let tasks = classify(&directory).unwrap();

    for task in tasks {
        match task {
            LumpTask::Map(lumps) => {
                println!("Map `{}`", directory[lumps.marker].name());

                for entry in &directory[lumps.things..lumps.end()] {
                    println!("\t{}: {} bytes", entry.name(), entry.size());
                }
            }
            LumpTask::PaletteTable(index) => {
                let entry = &directory[index];
                println!("Palettes `{}`: {}", entry.name(), entry.size() / 768);
            }
            LumpTask::ColormapTable(index) => {
                let entry = &directory[index];
                println!("Colormaps `{}`: {}", entry.name(), entry.size() / 256);
            }
            LumpTask::EndText(index) => {
                println!("End screen `{}`", directory[index].name());
            }
            LumpTask::Picture { index, section } => {
                let kind = match section {
                    Section::Sprites => "Sprite",
                    _ => "Patch",
                };
                let entry = &directory[index];
                println!("{kind} `{}`: {} bytes", entry.name(), entry.size());
            }
            LumpTask::Inert(index) => {
                let entry = &directory[index];
                println!("Entry `{}`: {} bytes", entry.name(), entry.size());
            }
        }
    }
}
