mod classify;
mod parser;
mod repr;

pub use classify::{
    classify, is_map_name, LumpTask, MapLumps, Section, COLORMAP_LUMP,
    END_TEXT_LUMP, MAP_LUMP_COUNT, OPTIONAL_MAP_LUMPS, PALETTE_LUMP,
};

pub use repr::{Archive, Map};
