use image::{GrayImage, Luma};

use crate::{
    builder::QR,
    common::{
        error::{QRError, QRResult},
        metadata::Color,
    },
};

// Quiet zone width in modules on every side
pub const QUIET_ZONE: u32 = 2;

impl QR {
    /// Edge length in pixels of the rendered canvas, quiet zone included.
    ///
    /// Fails with [`QRError::InvalidModuleSize`] when `module_sz` is zero or
    /// the canvas doesn't fit in `u32`.
    pub fn canvas_size(&self, module_sz: u32) -> QRResult<u32> {
        if module_sz == 0 {
            return Err(QRError::InvalidModuleSize);
        }
        (self.width() as u32 + 2 * QUIET_ZONE)
            .checked_mul(module_sz)
            .ok_or(QRError::InvalidModuleSize)
    }

    /// Renders the symbol as a standalone SVG document.
    ///
    /// A white background covers the whole canvas and every dark module
    /// becomes one black square. Light modules and the quiet zone are left
    /// to the background. Coordinates are computed in `u64` so any
    /// `module_sz` yields a well formed document.
    pub fn to_svg(&self, module_sz: u32) -> String {
        let module_sz = module_sz as u64;
        let qz = QUIET_ZONE as u64;
        let total_sz = (self.width() as u64 + 2 * qz) * module_sz;
        let w = self.width() as i16;

        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{total_sz}" height="{total_sz}" viewBox="0 0 {total_sz} {total_sz}">"#
        );
        svg.push_str(&format!(r#"<rect width="{total_sz}" height="{total_sz}" fill="white"/>"#));
        for r in 0..w {
            for c in 0..w {
                if let Color::Dark = *self.get(r, c) {
                    let x = (c as u64 + qz) * module_sz;
                    let y = (r as u64 + qz) * module_sz;
                    svg.push_str(&format!(
                        r#"<rect x="{x}" y="{y}" width="{module_sz}" height="{module_sz}" fill="black"/>"#
                    ));
                }
            }
        }
        svg.push_str("</svg>");
        svg
    }

    /// Renders the symbol as a grayscale raster.
    ///
    /// # Panics
    ///
    /// Panics if the canvas overflows `u32`; check with [`QR::canvas_size`].
    pub fn to_image(&self, module_sz: u32) -> GrayImage {
        let qz_sz = QUIET_ZONE * module_sz;
        let qr_sz = self.width() as u32 * module_sz;
        let total_sz = qz_sz + qr_sz + qz_sz;

        let mut canvas = GrayImage::new(total_sz, total_sz);
        for i in 0..total_sz {
            for j in 0..total_sz {
                if i < qz_sz || i >= qz_sz + qr_sz || j < qz_sz || j >= qz_sz + qr_sz {
                    canvas.put_pixel(j, i, Luma([255]));
                    continue;
                }
                let r = (i - qz_sz) / module_sz;
                let c = (j - qz_sz) / module_sz;

                let pixel = self.get(r as i16, c as i16).select(Luma([255]), Luma([0]));
                canvas.put_pixel(j, i, pixel);
            }
        }

        canvas
    }

    // Terminal preview, light modules are drawn as full blocks
    pub fn to_str(&self, module_sz: usize) -> String {
        let qz_sz = QUIET_ZONE as usize * module_sz;
        let qr_sz = self.width() * module_sz;
        let total_sz = qz_sz + qr_sz + qz_sz;

        let mut canvas = String::new();
        for i in 0..total_sz {
            for j in 0..total_sz {
                if i < qz_sz || i >= qz_sz + qr_sz || j < qz_sz || j >= qz_sz + qr_sz {
                    canvas.push('█');
                    continue;
                }
                let r = ((i - qz_sz) / module_sz) as i16;
                let c = ((j - qz_sz) / module_sz) as i16;

                canvas.push(self.get(r, c).select('█', ' '));
            }
            canvas.push('\n');
        }

        canvas
    }
}
