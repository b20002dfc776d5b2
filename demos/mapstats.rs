mod demo_util;

use doom_wad::Archive;

use demo_util::{setup_logging, wad_path};

fn main() {
    setup_logging();

    let archive = Archive::open(wad_path())
        .map_err(|e| format!("{}", e))
        .unwrap();

    let mut names = archive.map_names().collect::<Vec<_>>();
    names.sort_unstable();

    for name in names {
        let map = archive.map(name).unwrap();

        println!("Map {name}");
        println!("\tthings:     {}", map.things().len());
        println!("\tlinedefs:   {}", map.linedefs().len());
        println!("\tsidedefs:   {}", map.sidedefs().len());
        println!("\tvertexes:   {}", map.vertexes().len());
        println!("\tsegs:       {}", map.segs().len());
        println!("\tsubsectors: {}", map.subsectors().len());
        println!("\tnodes:      {}", map.nodes().len());
        println!("\tsectors:    {}", map.sectors().len());

        let two_sided = map
            .linedefs()
            .iter()
            .filter(|line| line.is_two_sided())
            .count();
        println!("\ttwo-sided linedefs: {two_sided}");

        if let Some(blockmap) = map.blockmap() {
            println!("\tblockmap:   {}x{}", blockmap.columns, blockmap.rows);
        }

        match map.bounds() {
            Some((min, max)) => println!(
                "\tbounds:     ({}, {}) to ({}, {})",
                min.x, min.y, max.x, max.y
            ),
            None => println!("\tbounds:     none"),
        }
    }
}
