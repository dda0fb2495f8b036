//! # qrlabel
//!
//! A small QR code generator for printable product labels. Text is encoded in
//! byte mode at error correction level L with mask pattern 000, in the smallest
//! of versions 1 to 10 that fits, and rendered as a self-contained SVG document.
//!
//! ## Quick Start
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let svg = qrlabel::generate_svg("TJM12345", qrlabel::DEFAULT_MODULE_SIZE)?;
//! assert!(svg.starts_with("<svg"));
//! # Ok(())
//! # }
//! ```
//!
//! ### Builder
//!
//! ```rust
//! use qrlabel::{QRBuilder, Version};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let qr = QRBuilder::new(b"TJM12345")
//!     .version(Version::new(2)?)  // If not provided, finds smallest version to fit data
//!     .build()?;
//!
//! assert_eq!(qr.width(), 25);
//! let svg = qr.to_svg(4);
//! let img = qr.to_image(4);
//! # Ok(())
//! # }
//! ```
//!
//! ## Limits
//!
//! - **Versions**: 1 to 10, 21x21 to 57x57 modules, up to 271 bytes
//! - **Characters**: ISO-8859-1 only; anything above U+00FF is rejected

pub mod builder;
pub(crate) mod common;
mod render;

pub use builder::{QRBuilder, QR};
pub use common::error::{QRError, QRResult};
pub use common::mask::MaskPattern;
pub use common::metadata::{Color, Version};
pub use render::QUIET_ZONE;

use log::debug;

use common::codec::encode_latin1;

/// Module edge length in pixels used when the caller has no preference.
pub const DEFAULT_MODULE_SIZE: u32 = 4;

/// Transcodes `text` to ISO-8859-1 and builds the smallest fitting symbol.
pub fn generate(text: &str) -> QRResult<QR> {
    let data = encode_latin1(text)?;
    QRBuilder::new(&data).build()
}

/// Encodes `text` and renders it as an SVG document of
/// `(width + 2 * QUIET_ZONE) * module_sz` pixels square.
///
/// Fails with [`QRError::InvalidModuleSize`] when `module_sz` is zero or the
/// canvas edge doesn't fit in `u32`.
pub fn generate_svg(text: &str, module_sz: u32) -> QRResult<String> {
    if module_sz == 0 {
        return Err(QRError::InvalidModuleSize);
    }
    let qr = generate(text)?;
    let canvas_sz = qr.canvas_size(module_sz)?;
    debug!("Rendering {}x{} symbol into {canvas_sz}px canvas", qr.width(), qr.width());
    Ok(qr.to_svg(module_sz))
}
