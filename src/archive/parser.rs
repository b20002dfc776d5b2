use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;

use super::classify::{classify, LumpTask, MapLumps, Section};
use super::repr::{Archive, Map};
use crate::error::{FormatError, Result};
use crate::wad::{Entry, Parser};

impl Archive {
    /// Decode a whole archive from a file on disk
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path).map_err(FormatError::Io)?;
        Self::parse(&mut BufReader::new(file))
    }

    /// Decode a whole archive held in memory
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::parse(&mut Cursor::new(bytes))
    }

    /// Decode a whole archive starting at the reader's current position.
    /// The directory is classified in full before any lump data is read.
    pub fn parse<R: Read + Seek>(reader: &mut R) -> Result<Self> {
        let mut parser = Parser::new(reader)?;
        let header = parser.header();
        let directory = parser.directory().to_vec();
        let tasks = classify(&directory)?;

        log::debug!(
            "Classified {} lumps into {} tasks",
            directory.len(),
            tasks.len()
        );

        let mut archive = Archive {
            header,
            directory: Vec::new(),
            maps: HashMap::new(),
            palettes: Vec::new(),
            colormaps: Vec::new(),
            sprites: HashMap::new(),
            patches: HashMap::new(),
            end_text: None,
        };

        for task in tasks {
            match task {
                LumpTask::Map(lumps) => {
                    let name = directory[lumps.marker].name().to_string();
                    let map = parse_map(&mut parser, &directory, &lumps)?;
                    log::info!(
                        "Loaded map {name}: {} things, {} linedefs, {} vertexes",
                        map.things.len(),
                        map.linedefs.len(),
                        map.vertexes.len()
                    );
                    insert_named(&mut archive.maps, "map", name, map);
                }
                LumpTask::PaletteTable(index) => {
                    let palettes = parser.parse_palettes(&directory[index])?;
                    log::info!("Loaded {} palettes", palettes.len());
                    archive.palettes.extend(palettes);
                }
                LumpTask::ColormapTable(index) => {
                    let colormaps = parser.parse_colormaps(&directory[index])?;
                    log::info!("Loaded {} colormaps", colormaps.len());
                    archive.colormaps.extend(colormaps);
                }
                LumpTask::EndText(index) => {
                    let text = parser.parse_end_text(&directory[index])?;
                    archive
                        .end_text
                        .get_or_insert_with(String::new)
                        .push_str(&text);
                }
                LumpTask::Picture { index, section } => {
                    let entry = &directory[index];
                    let picture = parser.parse_picture(entry)?;
                    let (table, kind) = match section {
                        Section::Sprites => (&mut archive.sprites, "sprite"),
                        _ => (&mut archive.patches, "patch"),
                    };
                    insert_named(table, kind, entry.name().to_string(), picture);
                }
                LumpTask::Inert(_) => {}
            }
        }

        log::info!(
            "Loaded {} sprites and {} patches",
            archive.sprites.len(),
            archive.patches.len()
        );

        archive.directory = directory;
        Ok(archive)
    }
}

fn insert_named<T>(
    table: &mut HashMap<String, T>,
    kind: &str,
    name: String,
    value: T,
) {
    if table.insert(name.clone(), value).is_some() {
        log::debug!("Duplicate {kind} `{name}` replaces earlier entry");
    }
}

fn parse_map<R: Read + Seek>(
    parser: &mut Parser<'_, R>,
    directory: &[Entry],
    lumps: &MapLumps,
) -> Result<Map> {
    let mut map = Map {
        things: parser.parse_records(&directory[lumps.things])?,
        linedefs: parser.parse_records(&directory[lumps.linedefs])?,
        sidedefs: parser.parse_records(&directory[lumps.sidedefs])?,
        vertexes: parser.parse_records(&directory[lumps.vertexes])?,
        segs: parser.parse_records(&directory[lumps.segs])?,
        subsectors: parser.parse_records(&directory[lumps.subsectors])?,
        ..Map::default()
    };

    if let Some(index) = lumps.nodes {
        map.nodes = parser.parse_records(&directory[index])?;
    }

    if let Some(index) = lumps.sectors {
        map.sectors = parser.parse_records(&directory[index])?;
    }

    if let Some(index) = lumps.reject {
        map.reject = parser.read_raw(&directory[index])?;
    }

    if let Some(index) = lumps.blockmap {
        let entry = &directory[index];

        if entry.size() != 0 {
            map.blockmap = Some(parser.parse_blockmap(entry)?);
        }
    }

    Ok(map)
}
