use super::metadata::Version;

// Iterator for placing data in encoding region of QR
//------------------------------------------------------------------------------

const VERT_TIMING_COL: i16 = 6;

/// Visits every module outside the vertical timing column in placement order.
///
/// Columns are consumed in pairs from the right edge, right module before
/// left module. The first pair is walked upward, and the direction flips
/// whenever a pair is exhausted. Column 6 is skipped by shifting the
/// remaining pairs one column to the left.
#[derive(Debug, Clone)]
pub struct EncRegionIter {
    r: i16,
    // Right column of the current pair
    c: i16,
    w: i16,
    upward: bool,
    // Whether the next module is the left one of the pair
    left: bool,
}

impl EncRegionIter {
    pub fn new(version: Version) -> Self {
        let w = version.width() as i16;
        Self { r: w - 1, c: w - 1, w, upward: true, left: false }
    }

    fn advance_row(&mut self) {
        let last_row = if self.upward { 0 } else { self.w - 1 };
        if self.r != last_row {
            self.r += if self.upward { -1 } else { 1 };
            return;
        }

        self.c -= 2;
        if self.c == VERT_TIMING_COL {
            self.c -= 1;
        }
        self.upward = !self.upward;
    }
}

impl Iterator for EncRegionIter {
    type Item = (i16, i16);

    fn next(&mut self) -> Option<Self::Item> {
        if self.c < 1 {
            return None;
        }

        if !self.left {
            self.left = true;
            return Some((self.r, self.c));
        }

        let res = (self.r, self.c - 1);
        self.left = false;
        self.advance_row();
        Some(res)
    }
}

#[cfg(test)]
mod iter_tests {
    use super::EncRegionIter;
    use crate::common::metadata::Version;

    #[test]
    fn test_start_order() {
        let coords = EncRegionIter::new(Version::MIN).take(6).collect::<Vec<_>>();
        assert_eq!(coords, [(20, 20), (20, 19), (19, 20), (19, 19), (18, 20), (18, 19)]);
    }

    #[test]
    fn test_direction_flip() {
        let coords = EncRegionIter::new(Version::MIN).skip(40).take(6).collect::<Vec<_>>();
        assert_eq!(coords, [(0, 20), (0, 19), (0, 18), (0, 17), (1, 18), (1, 17)]);
    }

    #[test]
    fn test_timing_column_skip() {
        let coords = EncRegionIter::new(Version::MIN).skip(292).take(6).collect::<Vec<_>>();
        assert_eq!(coords, [(0, 8), (0, 7), (0, 5), (0, 4), (1, 5), (1, 4)]);
    }

    #[test]
    fn test_end() {
        let coords = EncRegionIter::new(Version::MIN).collect::<Vec<_>>();
        assert_eq!(coords.len(), 420);
        assert_eq!(coords[coords.len() - 2..], [(20, 1), (20, 0)]);
    }

    #[test]
    fn test_covers_all_but_timing_column() {
        for ver in Version::all() {
            let w = ver.width() as i16;
            let mut coords = EncRegionIter::new(ver).collect::<Vec<_>>();
            assert!(coords.iter().all(|&(_, c)| c != 6));
            let total = coords.len();
            coords.sort_unstable();
            coords.dedup();
            assert_eq!(coords.len(), total, "Module visited twice in {ver:?}");
            assert_eq!(total, (w * (w - 1)) as usize);
        }
    }
}
