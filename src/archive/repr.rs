use std::collections::HashMap;

use crate::error::LookupError;
use crate::lump::{
    Blockmap, Colormap, Linedef, Node, Palette, Picture, Sector, Seg, Sidedef,
    Subsector, Thing, Vertex,
};
use crate::wad::{Entry, Head};

/// Geometry of one level, decoded from the lumps following its marker
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Map {
    pub(crate) things: Vec<Thing>,
    pub(crate) linedefs: Vec<Linedef>,
    pub(crate) sidedefs: Vec<Sidedef>,
    pub(crate) vertexes: Vec<Vertex>,
    pub(crate) segs: Vec<Seg>,
    pub(crate) subsectors: Vec<Subsector>,
    pub(crate) nodes: Vec<Node>,
    pub(crate) sectors: Vec<Sector>,
    pub(crate) reject: Box<[u8]>,
    pub(crate) blockmap: Option<Blockmap>,
}

impl Map {
    pub fn things(&self) -> &[Thing] {
        &self.things
    }

    pub fn linedefs(&self) -> &[Linedef] {
        &self.linedefs
    }

    pub fn sidedefs(&self) -> &[Sidedef] {
        &self.sidedefs
    }

    pub fn vertexes(&self) -> &[Vertex] {
        &self.vertexes
    }

    pub fn segs(&self) -> &[Seg] {
        &self.segs
    }

    pub fn subsectors(&self) -> &[Subsector] {
        &self.subsectors
    }

    /// Empty when the map carries no NODES lump
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn sectors(&self) -> &[Sector] {
        &self.sectors
    }

    /// Sector-to-sector visibility bit table, unparsed
    pub fn reject(&self) -> &[u8] {
        &self.reject
    }

    pub fn blockmap(&self) -> Option<&Blockmap> {
        self.blockmap.as_ref()
    }

    /// Smallest and largest vertex coordinates, or `None` for a map without
    /// vertexes
    pub fn bounds(&self) -> Option<(Vertex, Vertex)> {
        let (first, rest) = self.vertexes.split_first()?;

        Some(rest.iter().fold((*first, *first), |(min, max), v| {
            (
                Vertex {
                    x: min.x.min(v.x),
                    y: min.y.min(v.y),
                },
                Vertex {
                    x: max.x.max(v.x),
                    y: max.y.max(v.y),
                },
            )
        }))
    }
}

/// Everything decoded from one archive.  Built in a single pass by
/// [`Archive::parse`] and read-only afterwards.
#[derive(Clone, Debug)]
pub struct Archive {
    pub(crate) header: Head,
    pub(crate) directory: Vec<Entry>,
    pub(crate) maps: HashMap<String, Map>,
    pub(crate) palettes: Vec<Palette>,
    pub(crate) colormaps: Vec<Colormap>,
    pub(crate) sprites: HashMap<String, Picture>,
    pub(crate) patches: HashMap<String, Picture>,
    pub(crate) end_text: Option<String>,
}

fn not_found(kind: &'static str, name: &str) -> LookupError {
    LookupError::NotFound {
        kind,
        name: name.to_string(),
    }
}

fn index_out_of_range(kind: &'static str, index: usize, count: usize) -> LookupError {
    LookupError::IndexOutOfRange { kind, index, count }
}

impl Archive {
    pub fn header(&self) -> Head {
        self.header
    }

    /// Directory entries in archive order
    pub fn directory(&self) -> &[Entry] {
        &self.directory
    }

    pub fn map(&self, name: &str) -> Result<&Map, LookupError> {
        self.maps.get(name).ok_or_else(|| not_found("map", name))
    }

    /// Names of all decoded maps, in no particular order
    pub fn map_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.maps.keys().map(String::as_str)
    }

    pub fn palette(&self, index: usize) -> Result<&Palette, LookupError> {
        self.palettes
            .get(index)
            .ok_or_else(|| index_out_of_range("palette", index, self.palettes.len()))
    }

    pub fn palettes(&self) -> &[Palette] {
        &self.palettes
    }

    pub fn colormap(&self, index: usize) -> Result<&Colormap, LookupError> {
        self.colormaps.get(index).ok_or_else(|| {
            index_out_of_range("colormap", index, self.colormaps.len())
        })
    }

    pub fn colormaps(&self) -> &[Colormap] {
        &self.colormaps
    }

    pub fn sprite(&self, name: &str) -> Result<&Picture, LookupError> {
        self.sprites.get(name).ok_or_else(|| not_found("sprite", name))
    }

    pub fn sprite_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.sprites.keys().map(String::as_str)
    }

    pub fn patch(&self, name: &str) -> Result<&Picture, LookupError> {
        self.patches.get(name).ok_or_else(|| not_found("patch", name))
    }

    pub fn patch_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.patches.keys().map(String::as_str)
    }

    /// Characters of the end screen, if the archive has one
    pub fn end_text(&self) -> Option<&str> {
        self.end_text.as_deref()
    }
}
