//! Decoder for Doom IWAD/PWAD archives.
//!
//! [`Archive`] reads a whole archive in one pass and exposes its maps,
//! palettes, colormaps, sprites and patches.  The lower-level [`wad`] and
//! [`lump`] modules decode the directory and individual lumps on their own.

pub mod archive;
pub mod common;
pub mod error;
pub mod lump;
pub mod wad;

pub use archive::{Archive, Map};
pub use error::{FormatError, LookupError, Result};
pub use lump::{Colormap, Palette, Picture, Rgb};
