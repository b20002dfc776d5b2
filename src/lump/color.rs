use std::io::{self, Read};
use std::ops::Index;

use super::Record;

/// Number of entries in every palette and colormap
pub const COLOR_COUNT: usize = 256;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Rgb { r, g, b }
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(color: Rgb) -> Self {
        [color.r, color.g, color.b]
    }
}

/// 256 RGB colors; indexed pixels resolve through one of these
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Palette {
    colors: [Rgb; COLOR_COUNT],
}

impl Palette {
    pub fn from_bytes(bytes: &[u8; COLOR_COUNT * 3]) -> Self {
        let mut colors = [Rgb::default(); COLOR_COUNT];

        for (color, chunk) in colors.iter_mut().zip(bytes.chunks_exact(3)) {
            *color = Rgb {
                r: chunk[0],
                g: chunk[1],
                b: chunk[2],
            };
        }

        Palette { colors }
    }

    pub fn color(&self, index: u8) -> Rgb {
        self.colors[usize::from(index)]
    }

    pub fn colors(&self) -> &[Rgb; COLOR_COUNT] {
        &self.colors
    }
}

impl Index<u8> for Palette {
    type Output = Rgb;

    fn index(&self, index: u8) -> &Rgb {
        &self.colors[usize::from(index)]
    }
}

impl Record for Palette {
    const SIZE: usize = COLOR_COUNT * 3;
    const KIND: &'static str = "palette";

    fn read<R: Read>(reader: &mut R) -> io::Result<Self> {
        let mut bytes = [0u8; COLOR_COUNT * 3];
        reader.read_exact(&mut bytes)?;
        Ok(Palette::from_bytes(&bytes))
    }
}

/// Remaps palette indices to palette indices, e.g. to darken for light level
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Colormap {
    indices: [u8; COLOR_COUNT],
}

impl Colormap {
    pub fn new(indices: [u8; COLOR_COUNT]) -> Self {
        Colormap { indices }
    }

    pub fn remap(&self, index: u8) -> u8 {
        self.indices[usize::from(index)]
    }

    pub fn indices(&self) -> &[u8; COLOR_COUNT] {
        &self.indices
    }
}

impl Index<u8> for Colormap {
    type Output = u8;

    fn index(&self, index: u8) -> &u8 {
        &self.indices[usize::from(index)]
    }
}

impl Record for Colormap {
    const SIZE: usize = COLOR_COUNT;
    const KIND: &'static str = "colormap";

    fn read<R: Read>(reader: &mut R) -> io::Result<Self> {
        let mut indices = [0u8; COLOR_COUNT];
        reader.read_exact(&mut indices)?;
        Ok(Colormap { indices })
    }
}
