//! Demo colours and icon patterns

/// 16-bit RGB565 colour as sent to the displays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb565(pub u16);

impl Rgb565 {
    pub const RED: Rgb565 = Rgb565(0xF800);
    pub const GREEN: Rgb565 = Rgb565(0x07E0);
    pub const BLUE: Rgb565 = Rgb565(0x001F);
    pub const YELLOW: Rgb565 = Rgb565(0xFFE0);
    pub const MAGENTA: Rgb565 = Rgb565(0xF81F);
    pub const CYAN: Rgb565 = Rgb565(0x07FF);
    pub const ORANGE: Rgb565 = Rgb565(0xFD20);
    pub const PURPLE: Rgb565 = Rgb565(0x8010);
    pub const PINK: Rgb565 = Rgb565(0xFC18);
    pub const LIME: Rgb565 = Rgb565(0x87E0);
    pub const GOLD: Rgb565 = Rgb565(0xFEA0);
    pub const WHITE: Rgb565 = Rgb565(0xFFFF);
    pub const BLACK: Rgb565 = Rgb565(0x0000);
    pub const GREY: Rgb565 = Rgb565(0x8410);
    pub const DARK_GREEN: Rgb565 = Rgb565(0x03E0);
    pub const DARK_BLUE: Rgb565 = Rgb565(0x000F);

    pub const fn raw(self) -> u16 {
        self.0
    }
}

/// Colours the demo animation cycles through
pub const PALETTE: [Rgb565; 11] = [
    Rgb565::RED,
    Rgb565::GREEN,
    Rgb565::BLUE,
    Rgb565::YELLOW,
    Rgb565::MAGENTA,
    Rgb565::CYAN,
    Rgb565::ORANGE,
    Rgb565::PURPLE,
    Rgb565::PINK,
    Rgb565::LIME,
    Rgb565::GOLD,
];

/// Icon drawn next to a task, person or event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Pattern {
    Star = 0,
    Heart = 1,
    Circle = 2,
    Square = 3,
    Triangle = 4,
    Cross = 5,
    Diamond = 6,
    Flower = 7,
    Sun = 8,
    Cloud = 9,
    Rain = 10,
    Snow = 11,
    Music = 12,
    Book = 13,
    Game = 14,
    Sport = 15,
}

impl Pattern {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}
