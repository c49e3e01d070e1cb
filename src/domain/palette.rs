//! The five swatches of the tool bar, in slot order (hotkeys `1`..`5`).

use super::color::Rgb;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaletteColor {
    Red,
    Green,
    Blue,
    Yellow,
    SkyBlue,
}

pub const PALETTE: [PaletteColor; 5] = [
    PaletteColor::Red,
    PaletteColor::Green,
    PaletteColor::Blue,
    PaletteColor::Yellow,
    PaletteColor::SkyBlue,
];

impl PaletteColor {
    pub const fn rgb(self) -> Rgb {
        match self {
            PaletteColor::Red => Rgb::new(255, 0, 0),
            PaletteColor::Green => Rgb::new(0, 128, 0),
            PaletteColor::Blue => Rgb::new(0, 0, 255),
            PaletteColor::Yellow => Rgb::new(255, 255, 0),
            PaletteColor::SkyBlue => Rgb::new(135, 206, 235),
        }
    }

    /// Zero-based swatch slot.
    pub fn slot(self) -> usize {
        PALETTE.iter().position(|&c| c == self).unwrap_or(0)
    }

    pub fn from_slot(slot: usize) -> Option<Self> {
        PALETTE.get(slot).copied()
    }

    /// Class name of the swatch element in the page markup.
    pub fn name(self) -> &'static str {
        match self {
            PaletteColor::Red => "red",
            PaletteColor::Green => "green",
            PaletteColor::Blue => "blue",
            PaletteColor::Yellow => "yellow",
            PaletteColor::SkyBlue => "skyblue",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        PALETTE.iter().copied().find(|c| c.name() == name)
    }
}
