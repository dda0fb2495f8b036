use std::fmt::{Debug, Display, Error, Formatter};

// Error
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum QRError {
    EmptyData,
    // Payload exceeds the capacity of the largest supported version
    DataTooLong,
    // Payload exceeds the capacity of the requested version
    CapacityOverflow,
    InvalidVersion,
    // Character outside ISO-8859-1
    InvalidChar,
    InvalidModuleSize,
}

impl Display for QRError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        let msg = match *self {
            Self::EmptyData => "Empty data",
            Self::DataTooLong => "Data too long",
            Self::CapacityOverflow => "Capacity overflow",
            Self::InvalidVersion => "Invalid version",
            Self::InvalidChar => "Invalid character",
            Self::InvalidModuleSize => "Invalid module size",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for QRError {}

pub type QRResult<T> = Result<T, QRError>;

#[cfg(test)]
mod error_tests {
    use super::QRError;

    #[test]
    fn test_display() {
        assert_eq!(QRError::DataTooLong.to_string(), "Data too long");
        assert_eq!(QRError::InvalidChar.to_string(), "Invalid character");
    }
}
