use std::ops::{Add, AddAssign, Mul, MulAssign, Sub};

// Galois field GF(256)
//------------------------------------------------------------------------------

// x^8 + x^4 + x^3 + x^2 + 1
const GF_POLY: u16 = 0x11D;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct G(pub u8);

impl G {
    // Power of the generator element α = 2
    pub fn gen_pow(i: usize) -> Self {
        Self(EXP_TABLE[i % 255])
    }

    pub fn log(self) -> usize {
        debug_assert!(self.0 != 0, "Log of zero is undefined");
        LOG_TABLE[self.0 as usize] as usize
    }
}

impl From<u8> for G {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<G> for u8 {
    fn from(value: G) -> Self {
        value.0
    }
}

impl Add for G {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 ^ rhs.0)
    }
}

impl AddAssign for G {
    fn add_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl Sub for G {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 ^ rhs.0)
    }
}

impl Mul for G {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        if self.0 == 0 || rhs.0 == 0 {
            return Self(0);
        }
        Self(EXP_TABLE[self.log() + rhs.log()])
    }
}

impl MulAssign for G {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

// Lookup tables
//------------------------------------------------------------------------------

// Second half mirrors the first so that EXP_TABLE[log(a) + log(b)] never wraps
pub static EXP_TABLE: [u8; 512] = build_exp_table();

pub static LOG_TABLE: [u8; 256] = build_log_table();

const fn build_exp_table() -> [u8; 512] {
    let mut table = [0u8; 512];
    let mut x: u16 = 1;
    let mut i = 0;
    while i < 255 {
        table[i] = x as u8;
        x <<= 1;
        if x & 0x100 != 0 {
            x ^= GF_POLY;
        }
        i += 1;
    }
    while i < 512 {
        table[i] = table[i - 255];
        i += 1;
    }
    table
}

const fn build_log_table() -> [u8; 256] {
    let exp = build_exp_table();
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 255 {
        table[exp[i] as usize] = i as u8;
        i += 1;
    }
    table
}
