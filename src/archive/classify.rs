use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{FormatError, Result};
use crate::wad::Entry;

pub const PALETTE_LUMP: &str = "PLAYPAL";
pub const COLORMAP_LUMP: &str = "COLORMAP";
pub const END_TEXT_LUMP: &str = "ENDOOM";

/// Number of lumps that must follow a map marker, in on-disk order:
/// things, linedefs, sidedefs, vertexes, segs, subsectors
pub const MAP_LUMP_COUNT: usize = 6;

/// Optional lumps that may continue a map after the mandatory six, in the
/// order they must appear
pub const OPTIONAL_MAP_LUMPS: [&str; 4] = ["NODES", "SECTORS", "REJECT", "BLOCKMAP"];

static MAP_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(E[0-9]+M[0-9]+|MAP[0-9]+)$").unwrap());

/// Whether `name` marks the start of a map (`E1M1`, `MAP07`, ...)
pub fn is_map_name(name: &str) -> bool {
    MAP_NAME.is_match(name)
}

/// Marker-delimited regions of the directory
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Section {
    Sprites,
    Patches,
    Flats,
}

impl Section {
    fn from_start_marker(name: &str) -> Option<Self> {
        match name {
            "S_START" => Some(Section::Sprites),
            "P1_START" | "P2_START" => Some(Section::Patches),
            "F_START" => Some(Section::Flats),
            _ => None,
        }
    }

    fn from_end_marker(name: &str) -> Option<Self> {
        match name {
            "S_END" => Some(Section::Sprites),
            "P1_END" | "P2_END" => Some(Section::Patches),
            "F_END" => Some(Section::Flats),
            _ => None,
        }
    }
}

/// Directory indices of the lumps making up one map
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MapLumps {
    pub marker: usize,
    pub things: usize,
    pub linedefs: usize,
    pub sidedefs: usize,
    pub vertexes: usize,
    pub segs: usize,
    pub subsectors: usize,
    pub nodes: Option<usize>,
    pub sectors: Option<usize>,
    pub reject: Option<usize>,
    pub blockmap: Option<usize>,
}

impl MapLumps {
    fn mandatory(marker: usize) -> Self {
        MapLumps {
            marker,
            things: marker + 1,
            linedefs: marker + 2,
            sidedefs: marker + 3,
            vertexes: marker + 4,
            segs: marker + 5,
            subsectors: marker + 6,
            nodes: None,
            sectors: None,
            reject: None,
            blockmap: None,
        }
    }

    /// One past the last directory index this map consumes
    pub fn end(&self) -> usize {
        [self.nodes, self.sectors, self.reject, self.blockmap]
            .into_iter()
            .flatten()
            .max()
            .unwrap_or(self.subsectors)
            + 1
    }
}

/// Decoding work for one directory entry (or, for maps, a run of entries).
/// Indices refer to positions in the directory.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LumpTask {
    Map(MapLumps),
    PaletteTable(usize),
    ColormapTable(usize),
    EndText(usize),
    Picture { index: usize, section: Section },
    Inert(usize),
}

#[derive(Default)]
struct SectionState {
    sprites: bool,
    patches: bool,
    flats: bool,
    opener: String,
}

impl SectionState {
    fn flag(&mut self, section: Section) -> &mut bool {
        match section {
            Section::Sprites => &mut self.sprites,
            Section::Patches => &mut self.patches,
            Section::Flats => &mut self.flats,
        }
    }

    fn current(&self) -> Option<Section> {
        if self.sprites {
            Some(Section::Sprites)
        } else if self.patches {
            Some(Section::Patches)
        } else if self.flats {
            Some(Section::Flats)
        } else {
            None
        }
    }

    fn open(&mut self, section: Section, name: &str) -> Result<()> {
        if self.current().is_some() {
            return Err(FormatError::NestedSection {
                outer: self.opener.clone(),
                inner: name.to_string(),
            });
        }

        *self.flag(section) = true;
        self.opener = name.to_string();
        Ok(())
    }

    fn close(&mut self, section: Section, name: &str) {
        let flag = self.flag(section);

        if !*flag {
            log::warn!("Section end marker `{name}` without matching start");
        }

        *flag = false;
    }
}

fn check_marker(entry: &Entry) -> Result<()> {
    if entry.size() != 0 {
        return Err(FormatError::NonEmptyMarker {
            name: entry.name().to_string(),
            size: entry.size(),
        });
    }

    Ok(())
}

/// Claim the optional trailing map lumps that directly follow index `next`
fn claim_optional(directory: &[Entry], map: &mut MapLumps) {
    let mut next = map.subsectors + 1;

    for name in OPTIONAL_MAP_LUMPS {
        match directory.get(next) {
            Some(entry) if entry.name() == name => {}
            _ => break,
        }

        let slot = match name {
            "NODES" => &mut map.nodes,
            "SECTORS" => &mut map.sectors,
            "REJECT" => &mut map.reject,
            _ => &mut map.blockmap,
        };

        *slot = Some(next);
        next += 1;
    }
}

/// Walk the directory once, in order, and decide what to decode for each
/// entry.  No lump data is read.
pub fn classify(directory: &[Entry]) -> Result<Vec<LumpTask>> {
    let mut tasks = Vec::with_capacity(directory.len());
    let mut state = SectionState::default();
    let mut index = 0;

    while index < directory.len() {
        let entry = &directory[index];
        let name = entry.name();

        if is_map_name(name) {
            let found = directory.len() - index - 1;

            if found < MAP_LUMP_COUNT {
                return Err(FormatError::MissingMapLumps {
                    name: name.to_string(),
                    found,
                });
            }

            let mut map = MapLumps::mandatory(index);
            claim_optional(directory, &mut map);
            index = map.end();
            tasks.push(LumpTask::Map(map));
            continue;
        }

        let task = if name == PALETTE_LUMP {
            LumpTask::PaletteTable(index)
        } else if name == COLORMAP_LUMP {
            LumpTask::ColormapTable(index)
        } else if name == END_TEXT_LUMP {
            LumpTask::EndText(index)
        } else if let Some(section) = Section::from_start_marker(name) {
            check_marker(entry)?;
            state.open(section, name)?;
            LumpTask::Inert(index)
        } else if let Some(section) = Section::from_end_marker(name) {
            check_marker(entry)?;
            state.close(section, name);
            LumpTask::Inert(index)
        } else {
            match state.current() {
                Some(section @ (Section::Sprites | Section::Patches)) => {
                    LumpTask::Picture { index, section }
                }
                _ => LumpTask::Inert(index),
            }
        };

        tasks.push(task);
        index += 1;
    }

    if state.current().is_some() {
        return Err(FormatError::UnterminatedSection(state.opener));
    }

    Ok(tasks)
}
