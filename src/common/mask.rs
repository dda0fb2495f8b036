use std::ops::Deref;

use super::metadata::FORMAT_INFO;

/// Data masking pattern. The encoder always applies pattern 000.
#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord)]
pub struct MaskPattern(u8);

impl Deref for MaskPattern {
    type Target = u8;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

mod mask_functions {
    pub fn checkerboard(r: i16, c: i16) -> bool {
        (r + c) & 1 == 0
    }
}

impl MaskPattern {
    pub const CHECKERBOARD: Self = Self(0b000);

    pub fn mask_function(self) -> fn(i16, i16) -> bool {
        debug_assert!(*self == 0, "Only the checkerboard pattern is supported");
        mask_functions::checkerboard
    }

    // Format info is precomputed for error correction level L. Any other
    // pattern would need its own BCH encoded format string.
    pub fn format_info(self) -> u32 {
        debug_assert!(*self == 0, "Only the checkerboard pattern is supported");
        FORMAT_INFO
    }
}
