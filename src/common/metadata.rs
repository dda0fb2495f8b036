use std::ops::{Deref, Not};

use super::error::{QRError, QRResult};

// Color
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    pub fn select<T>(self, light: T, dark: T) -> T {
        match self {
            Self::Light => light,
            Self::Dark => dark,
        }
    }
}

impl From<bool> for Color {
    fn from(bit: bool) -> Self {
        if bit {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

impl Not for Color {
    type Output = Self;
    fn not(self) -> Self::Output {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

// Version
//------------------------------------------------------------------------------

/// Symbol size tier. Only versions 1 to 10 at error correction level L are
/// supported.
#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord, Hash)]
pub struct Version(u8);

impl Deref for Version {
    type Target = u8;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Version {
    pub const MIN: Version = Version(1);
    pub const MAX: Version = Version(MAX_VERSION);

    pub fn new(version: u8) -> QRResult<Self> {
        if !(1..=MAX_VERSION).contains(&version) {
            return Err(QRError::InvalidVersion);
        }
        Ok(Self(version))
    }

    pub fn all() -> impl Iterator<Item = Version> {
        (1..=MAX_VERSION).map(Version)
    }

    fn index(self) -> usize {
        self.0 as usize - 1
    }

    pub const fn width(self) -> usize {
        self.0 as usize * 4 + 17
    }

    /// Maximum payload length in bytes.
    pub fn capacity(self) -> usize {
        BYTE_CAPACITY[self.index()]
    }

    pub fn total_codewords(self) -> usize {
        TOTAL_CODEWORDS[self.index()]
    }

    pub fn data_codewords(self) -> usize {
        let (size1, count1, size2, count2) = self.data_codewords_per_block();
        size1 * count1 + size2 * count2
    }

    pub fn ec_codewords(self) -> usize {
        let (_, count1, _, count2) = self.data_codewords_per_block();
        self.ecc_per_block() * (count1 + count2)
    }

    pub fn ecc_per_block(self) -> usize {
        ECC_PER_BLOCK[self.index()]
    }

    // (Block1 size, Block1 count, Block2 size, Block2 count)
    pub fn data_codewords_per_block(self) -> (usize, usize, usize, usize) {
        DATA_CODEWORDS_PER_BLOCK[self.index()]
    }

    pub fn char_count_bits(self) -> usize {
        match self.0 {
            1..=9 => 8,
            _ => 16,
        }
    }

    pub fn alignment_pattern(self) -> &'static [i16] {
        ALIGNMENT_PATTERN_POSITIONS[self.index()]
    }

    pub fn remainder_bits(self) -> usize {
        match self.0 {
            2..=6 => 7,
            _ => 0,
        }
    }

    // 18 bit version information, only present from version 7 onwards
    pub fn info(self) -> Option<u32> {
        match self.0 {
            7..=MAX_VERSION => Some(VERSION_INFOS[self.index() - 6]),
            _ => None,
        }
    }
}


// Global constants
//------------------------------------------------------------------------------

pub const MAX_VERSION: u8 = 10;

pub const MAX_QR_SIZE: usize = Version::MAX.width() * Version::MAX.width();

// Byte mode indicator
pub const MODE_BYTE: u8 = 0b0100;

pub const PADDING_CODEWORDS: [u8; 2] = [0b1110_1100, 0b0001_0001];

pub const FORMAT_INFO_BIT_LEN: usize = 15;

pub const VERSION_INFO_BIT_LEN: usize = 18;

// Error correction level L with mask pattern 000, BCH encoded and XORed
// with 0b101010000010010
pub const FORMAT_INFO: u32 = 0b111011111000100;

static BYTE_CAPACITY: [usize; MAX_VERSION as usize] =
    [17, 32, 53, 78, 106, 134, 154, 192, 230, 271];

static TOTAL_CODEWORDS: [usize; MAX_VERSION as usize] =
    [26, 44, 70, 100, 134, 172, 196, 242, 292, 346];

static ECC_PER_BLOCK: [usize; MAX_VERSION as usize] = [7, 10, 15, 20, 26, 18, 20, 24, 30, 18];

static DATA_CODEWORDS_PER_BLOCK: [(usize, usize, usize, usize); MAX_VERSION as usize] = [
    (19, 1, 0, 0),
    (34, 1, 0, 0),
    (55, 1, 0, 0),
    (80, 1, 0, 0),
    (108, 1, 0, 0),
    (68, 2, 0, 0),
    (78, 2, 0, 0),
    (97, 2, 0, 0),
    (116, 2, 0, 0),
    (68, 2, 69, 2),
];

static ALIGNMENT_PATTERN_POSITIONS: [&[i16]; MAX_VERSION as usize] = [
    &[],
    &[6, 18],
    &[6, 22],
    &[6, 26],
    &[6, 30],
    &[6, 34],
    &[6, 22, 38],
    &[6, 24, 42],
    &[6, 26, 46],
    &[6, 28, 50],
];

static VERSION_INFOS: [u32; 4] = [0x07C94, 0x085BC, 0x09A99, 0x0A4D3];

// Most significant bit first
pub static FORMAT_INFO_COORDS_QR_MAIN: [(i16, i16); 15] = [
    (8, 0),
    (8, 1),
    (8, 2),
    (8, 3),
    (8, 4),
    (8, 5),
    (8, 7),
    (8, 8),
    (7, 8),
    (5, 8),
    (4, 8),
    (3, 8),
    (2, 8),
    (1, 8),
    (0, 8),
];

pub static FORMAT_INFO_COORDS_QR_SIDE: [(i16, i16); 15] = [
    (-1, 8),
    (-2, 8),
    (-3, 8),
    (-4, 8),
    (-5, 8),
    (-6, 8),
    (-7, 8),
    (8, -8),
    (8, -7),
    (8, -6),
    (8, -5),
    (8, -4),
    (8, -3),
    (8, -2),
    (8, -1),
];

// Most significant bit first. Block left of the top right finder.
pub static VERSION_INFO_COORDS_TR: [(i16, i16); 18] = [
    (5, -9),
    (5, -10),
    (5, -11),
    (4, -9),
    (4, -10),
    (4, -11),
    (3, -9),
    (3, -10),
    (3, -11),
    (2, -9),
    (2, -10),
    (2, -11),
    (1, -9),
    (1, -10),
    (1, -11),
    (0, -9),
    (0, -10),
    (0, -11),
];

// Block above the bottom left finder, transpose of the top right block
pub static VERSION_INFO_COORDS_BL: [(i16, i16); 18] = [
    (-9, 5),
    (-10, 5),
    (-11, 5),
    (-9, 4),
    (-10, 4),
    (-11, 4),
    (-9, 3),
    (-10, 3),
    (-11, 3),
    (-9, 2),
    (-10, 2),
    (-11, 2),
    (-9, 1),
    (-10, 1),
    (-11, 1),
    (-9, 0),
    (-10, 0),
    (-11, 0),
];
