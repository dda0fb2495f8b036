mod ec;
mod qr;

pub use qr::{Module, QR};

use log::debug;

use crate::common::{
    codec::{encode, encode_with_version},
    error::{QRError, QRResult},
    mask::MaskPattern,
    metadata::Version,
};

/// Configures and builds a symbol from raw payload bytes.
///
/// The smallest fitting version is chosen unless one is set explicitly.
/// Error correction level and mask pattern are fixed to L and 000.
pub struct QRBuilder<'a> {
    data: &'a [u8],
    version: Option<Version>,
}

impl<'a> QRBuilder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, version: None }
    }

    pub fn data(&mut self, data: &'a [u8]) -> &mut Self {
        self.data = data;
        self
    }

    pub fn version(&mut self, version: Version) -> &mut Self {
        self.version = Some(version);
        self
    }

    pub fn unset_version(&mut self) -> &mut Self {
        self.version = None;
        self
    }

    pub fn metadata(&self) -> String {
        match self.version {
            Some(v) => format!("{{ Version: {}, Ec level: L }}", *v),
            None => "{ Version: None, Ec level: L }".to_string(),
        }
    }
}


impl QRBuilder<'_> {
    pub fn build(&self) -> QRResult<QR> {
        debug!("Generating QR {}...", self.metadata());
        if self.data.is_empty() {
            return Err(QRError::EmptyData);
        }

        debug!("Encoding data...");
        let (encoded_data, version) = match self.version {
            Some(v) => (encode_with_version(self.data, v)?, v),
            None => {
                debug!("Finding best version...");
                encode(self.data)?
            }
        };

        debug!("Constructing payload with ecc & interleaving...");
        let payload = ec::construct_payload(encoded_data.data(), version);

        debug!("Constructing QR...");
        let mut qr = QR::new(version);

        debug!("Drawing functional patterns...");
        qr.draw_all_function_patterns();

        debug!("Drawing encoding region...");
        qr.draw_encoding_region(payload);

        debug!("Applying mask...");
        qr.apply_mask(MaskPattern::CHECKERBOARD);

        let total_modules = version.width() * version.width();
        let dark_modules = qr.count_dark_modules();
        debug!("QR generated: {}", qr.metadata());
        debug!(
            "Data size: {}, Capacity: {}, Ec codewords: {}, Dark cells: {}, Light cells: {}",
            self.data.len(),
            version.capacity(),
            version.ec_codewords(),
            dark_modules,
            total_modules - dark_modules
        );

        Ok(qr)
    }
}
