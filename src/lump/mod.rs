mod color;
mod parse;
mod picture;
mod repr;

pub use color::{Colormap, Palette, Rgb, COLOR_COUNT};

pub use parse::{parse_blockmap, parse_end_text, parse_records};

pub use picture::{
    decode_picture, parse_picture, Column, Picture, PictureHead, Post,
    POST_SENTINEL,
};

pub use repr::{
    Blockmap, Linedef, Node, Record, Sector, Seg, Sidedef, Subsector, Thing,
    Vertex,
};

#[cfg(test)]
mod repr_test;
