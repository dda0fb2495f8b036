use std::ops::Deref;

use log::trace;

use crate::common::{
    metadata::{
        Color, Version, FORMAT_INFO_BIT_LEN, FORMAT_INFO_COORDS_QR_MAIN,
        FORMAT_INFO_COORDS_QR_SIDE, MAX_QR_SIZE, VERSION_INFO_BIT_LEN, VERSION_INFO_COORDS_BL,
        VERSION_INFO_COORDS_TR,
    },
    BitStream, EncRegionIter, MaskPattern,
};

/// A single cell of the symbol.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Module {
    Empty,
    // Format strip awaiting its bits
    Reserved,
    // Finder, separator, timing, alignment and the dark module
    Func(Color),
    Version(Color),
    Format(Color),
    Data(Color),
}

impl Module {
    pub fn is_structural(self) -> bool {
        matches!(self, Module::Func(_))
    }
}

impl Deref for Module {
    type Target = Color;
    fn deref(&self) -> &Self::Target {
        match self {
            Module::Empty | Module::Reserved => &Color::Light,
            Module::Func(c) => c,
            Module::Version(c) => c,
            Module::Format(c) => c,
            Module::Data(c) => c,
        }
    }
}

/// Module matrix of a symbol.
#[derive(Debug, Clone)]
pub struct QR {
    grid: Box<[Module; MAX_QR_SIZE]>,
    w: usize,
    ver: Version,
    mask: Option<MaskPattern>,
}

// QR type for builder
//------------------------------------------------------------------------------

impl QR {
    pub fn new(ver: Version) -> Self {
        let w = ver.width();
        Self { grid: Box::new([Module::Empty; MAX_QR_SIZE]), w, ver, mask: None }
    }

    pub fn grid(&self) -> &[Module] {
        &self.grid[..self.w * self.w]
    }

    pub fn version(&self) -> Version {
        self.ver
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn mask(&self) -> Option<MaskPattern> {
        self.mask
    }

    pub fn metadata(&self) -> String {
        format!("{{ Version: {}, Ec level: L, Mask: {:?} }}", *self.ver, self.mask.map(|m| *m))
    }

    pub fn count_dark_modules(&self) -> usize {
        self.grid().iter().filter(|&m| matches!(**m, Color::Dark)).count()
    }

    #[cfg(test)]
    pub fn to_debug_str(&self) -> String {
        let w = self.w as i16;
        let mut res = String::with_capacity((w * (w + 1)) as usize);
        res.push('\n');
        for i in 0..w {
            for j in 0..w {
                let c = match self.get(i, j) {
                    Module::Empty => '.',
                    Module::Reserved => 'r',
                    Module::Func(Color::Dark) => 'f',
                    Module::Func(Color::Light) => 'F',
                    Module::Version(Color::Dark) => 'v',
                    Module::Version(Color::Light) => 'V',
                    Module::Format(Color::Dark) => 'm',
                    Module::Format(Color::Light) => 'M',
                    Module::Data(Color::Dark) => 'd',
                    Module::Data(Color::Light) => 'D',
                };
                res.push(c);
            }
            res.push('\n');
        }
        res
    }

    // Negative coordinates count from the bottom/right edge
    fn coord_to_index(&self, r: i16, c: i16) -> usize {
        let w = self.w as i16;
        debug_assert!(-w <= r && r < w, "row should be less than w: Row {r}");
        debug_assert!(-w <= c && c < w, "column should be less than w: Column {c}");

        let r = if r < 0 { r + w } else { r };
        let c = if c < 0 { c + w } else { c };
        (r * w + c) as _
    }

    pub fn get(&self, r: i16, c: i16) -> Module {
        self.grid[self.coord_to_index(r, c)]
    }

    pub fn get_mut(&mut self, r: i16, c: i16) -> &mut Module {
        let index = self.coord_to_index(r, c);
        &mut self.grid[index]
    }

    pub fn set(&mut self, r: i16, c: i16, module: Module) {
        *self.get_mut(r, c) = module;
    }
}

#[cfg(test)]
mod qr_util_tests {
    use crate::builder::{Module, QR};
    use crate::common::metadata::{Color, Version};

    #[test]
    fn test_index_wrap() {
        let mut qr = QR::new(Version::MIN);
        let w = qr.w as i16;
        qr.set(-1, -1, Module::Func(Color::Dark));
        assert_eq!(qr.get(w - 1, w - 1), Module::Func(Color::Dark));
        qr.set(0, 0, Module::Data(Color::Light));
        assert_eq!(qr.get(-w, -w), Module::Data(Color::Light));
    }

    #[test]
    fn test_grid_len() {
        let qr = QR::new(Version::MAX);
        assert_eq!(qr.grid().len(), 57 * 57);
        assert!(qr.grid().iter().all(|m| *m == Module::Empty));
    }

    #[test]
    #[should_panic]
    fn test_row_out_of_bound() {
        let qr = QR::new(Version::MIN);
        let w = qr.w as i16;
        qr.get(w, 0);
    }

    #[test]
    #[should_panic]
    fn test_col_index_overwrap() {
        let qr = QR::new(Version::MIN);
        let w = qr.w as i16;
        qr.get(0, -(w + 1));
    }
}

// Finder pattern
//------------------------------------------------------------------------------

impl QR {
    fn draw_finder_patterns(&mut self) {
        self.draw_finder_pattern_at(3, 3);
        self.draw_finder_pattern_at(3, -4);
        self.draw_finder_pattern_at(-4, 3);
    }

    // Draws the 7x7 finder centred at (r, c) together with its separator on
    // the sides facing the symbol interior
    fn draw_finder_pattern_at(&mut self, r: i16, c: i16) {
        let (dr_top, dr_bottom) = if r > 0 { (-3, 4) } else { (-4, 3) };
        let (dc_left, dc_right) = if c > 0 { (-3, 4) } else { (-4, 3) };
        for i in dr_top..=dr_bottom {
            for j in dc_left..=dc_right {
                self.set(
                    r + i,
                    c + j,
                    match (i, j) {
                        (4 | -4, _) | (_, 4 | -4) => Module::Func(Color::Light),
                        (3 | -3, _) | (_, 3 | -3) => Module::Func(Color::Dark),
                        (2 | -2, _) | (_, 2 | -2) => Module::Func(Color::Light),
                        _ => Module::Func(Color::Dark),
                    },
                );
            }
        }
    }
}

// Timing pattern
//------------------------------------------------------------------------------

impl QR {
    fn draw_timing_pattern(&mut self) {
        let last = self.w as i16 - 9;
        self.draw_line(6, 8, 6, last);
        self.draw_line(8, 6, last, 6);
    }

    fn draw_line(&mut self, r1: i16, c1: i16, r2: i16, c2: i16) {
        debug_assert!(r1 == r2 || c1 == c2, "Line is neither vertical nor horizontal");

        if r1 == r2 {
            for j in c1..=c2 {
                self.set(r1, j, Module::Func(Color::from(j & 1 == 0)));
            }
        } else {
            for i in r1..=r2 {
                self.set(i, c1, Module::Func(Color::from(i & 1 == 0)));
            }
        }
    }
}


// Alignment pattern
//------------------------------------------------------------------------------

impl QR {
    fn draw_alignment_patterns(&mut self) {
        let poses = self.ver.alignment_pattern();
        for &r in poses {
            for &c in poses {
                self.draw_alignment_pattern_at(r, c)
            }
        }
    }

    fn draw_alignment_pattern_at(&mut self, r: i16, c: i16) {
        let w = self.w as i16;
        // Centres falling on a finder
        if (r == 6 && (c == 6 || c - w == -7)) || (r - w == -7 && c == 6) {
            return;
        }
        for i in -2..=2 {
            for j in -2..=2 {
                self.set(
                    r + i,
                    c + j,
                    match (i, j) {
                        (-2 | 2, _) | (_, -2 | 2) | (0, 0) => Module::Func(Color::Dark),
                        _ => Module::Func(Color::Light),
                    },
                )
            }
        }
    }
}

#[cfg(test)]
mod alignment_pattern_tests {
    use crate::builder::{Module, QR};
    use crate::common::metadata::{Color, Version};

    #[test]
    fn test_no_alignment_pattern_v1() {
        let mut qr = QR::new(Version::MIN);
        qr.draw_alignment_patterns();
        assert!(qr.grid().iter().all(|m| *m == Module::Empty));
    }

    #[test]
    fn test_single_alignment_pattern() {
        for (v, centre) in [(2, 18), (3, 22), (4, 26), (5, 30), (6, 34)] {
            let mut qr = QR::new(Version::new(v).unwrap());
            qr.draw_alignment_patterns();
            let funcs = qr.grid().iter().filter(|m| m.is_structural()).count();
            assert_eq!(funcs, 25, "Version {v}");
            assert_eq!(qr.get(centre, centre), Module::Func(Color::Dark));
            assert_eq!(qr.get(centre - 1, centre), Module::Func(Color::Light));
            assert_eq!(qr.get(centre + 2, centre - 2), Module::Func(Color::Dark));
        }
    }

    #[test]
    fn test_six_alignment_patterns() {
        for v in 7..=10 {
            let mut qr = QR::new(Version::new(v).unwrap());
            qr.draw_alignment_patterns();
            let funcs = qr.grid().iter().filter(|m| m.is_structural()).count();
            assert_eq!(funcs, 6 * 25, "Version {v}");
        }
    }
}

// All function patterns
//------------------------------------------------------------------------------

impl QR {
    pub(crate) fn draw_all_function_patterns(&mut self) {
        self.draw_finder_patterns();
        self.draw_timing_pattern();
        self.draw_alignment_patterns();
        self.draw_dark_module();
        self.reserve_format_area();
        self.draw_version_info();
    }

    fn draw_dark_module(&mut self) {
        self.set(-8, 8, Module::Func(Color::Dark));
    }
}

// Format & version info
//------------------------------------------------------------------------------

impl QR {
    fn reserve_format_area(&mut self) {
        for &(r, c) in FORMAT_INFO_COORDS_QR_MAIN.iter().chain(FORMAT_INFO_COORDS_QR_SIDE.iter()) {
            self.set(r, c, Module::Reserved);
        }
    }

    fn draw_format_info(&mut self, format_info: u32) {
        debug_assert!(
            FORMAT_INFO_COORDS_QR_MAIN
                .iter()
                .chain(FORMAT_INFO_COORDS_QR_SIDE.iter())
                .all(|&(r, c)| matches!(self.get(r, c), Module::Reserved | Module::Format(_))),
            "Format info would overwrite a non format module"
        );

        self.draw_number(
            format_info,
            FORMAT_INFO_BIT_LEN,
            Module::Format(Color::Light),
            Module::Format(Color::Dark),
            &FORMAT_INFO_COORDS_QR_MAIN,
        );
        self.draw_number(
            format_info,
            FORMAT_INFO_BIT_LEN,
            Module::Format(Color::Light),
            Module::Format(Color::Dark),
            &FORMAT_INFO_COORDS_QR_SIDE,
        );
    }

    fn draw_version_info(&mut self) {
        let Some(ver_info) = self.ver.info() else {
            return;
        };
        self.draw_number(
            ver_info,
            VERSION_INFO_BIT_LEN,
            Module::Version(Color::Light),
            Module::Version(Color::Dark),
            &VERSION_INFO_COORDS_TR,
        );
        self.draw_number(
            ver_info,
            VERSION_INFO_BIT_LEN,
            Module::Version(Color::Light),
            Module::Version(Color::Dark),
            &VERSION_INFO_COORDS_BL,
        );
    }

    // Writes the bits of number, most significant first, into coords
    fn draw_number(
        &mut self,
        number: u32,
        bit_len: usize,
        off_clr: Module,
        on_clr: Module,
        coords: &[(i16, i16)],
    ) {
        debug_assert_eq!(coords.len(), bit_len, "Coordinate count doesn't match bit length");

        let mut mask = 1 << (bit_len - 1);
        for &(r, c) in coords {
            if number & mask == 0 {
                self.set(r, c, off_clr);
            } else {
                self.set(r, c, on_clr);
            }
            mask >>= 1;
        }
    }
}


// Encoding region
//------------------------------------------------------------------------------

impl QR {
    pub(crate) fn draw_encoding_region(&mut self, payload: BitStream) {
        self.draw_payload(payload);

        debug_assert!(!self.grid().contains(&Module::Empty), "Empty module found after placement");
    }

    // Fills empty modules in placement order. Modules left over once the
    // payload runs out are remainder bits and stay light.
    fn draw_payload(&mut self, mut payload: BitStream) {
        let mut placed = 0;
        for (r, c) in EncRegionIter::new(self.ver) {
            if matches!(self.get(r, c), Module::Empty) {
                let bit = payload.next().unwrap_or(false);
                self.set(r, c, Module::Data(Color::from(bit)));
                placed += 1;
            }
        }
        trace!("Placed {placed} data modules");
    }

    fn mask_data(&mut self, pattern: MaskPattern) {
        let mask_fn = pattern.mask_function();
        let w = self.w as i16;
        for r in 0..w {
            for c in 0..w {
                if mask_fn(r, c) {
                    if let Module::Data(clr) = self.get(r, c) {
                        self.set(r, c, Module::Data(!clr))
                    }
                }
            }
        }
    }

    pub(crate) fn apply_mask(&mut self, pattern: MaskPattern) {
        self.mask_data(pattern);
        self.mask = Some(pattern);
        self.draw_format_info(pattern.format_info());
    }
}
