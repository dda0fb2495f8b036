pub use encode::*;
pub use latin1::*;

// Writer
//------------------------------------------------------------------------------

mod writer {
    use log::trace;

    use crate::common::{
        metadata::{Version, MODE_BYTE, PADDING_CODEWORDS},
        BitStream,
    };

    pub fn push_segment(data: &[u8], ver: Version, out: &mut BitStream) {
        push_header(data.len(), ver, out);
        push_byte_data(data, out);
    }

    fn push_header(char_cnt: usize, ver: Version, out: &mut BitStream) {
        let len_bits = ver.char_count_bits();
        debug_assert!(
            char_cnt < (1 << len_bits),
            "Char count exceeds bit length: Char count {char_cnt}, Char count bits {len_bits}"
        );
        out.push_bits(MODE_BYTE, 4);
        out.push_bits(char_cnt as u16, len_bits);
    }

    fn push_byte_data(data: &[u8], out: &mut BitStream) {
        for &b in data {
            out.push_bits(b, 8);
        }
    }

    pub fn push_terminator(out: &mut BitStream) {
        let bit_len = out.len();
        let bit_capacity = out.capacity();
        if bit_len < bit_capacity {
            let term_len = std::cmp::min(4, bit_capacity - bit_len);
            out.push_bits(0, term_len);
        }
    }

    pub fn pad_remaining_capacity(out: &mut BitStream) {
        push_padding_bits(out);
        push_padding_codewords(out);
    }

    fn push_padding_bits(out: &mut BitStream) {
        let offset = out.len() & 7;
        if offset > 0 {
            let padding_bits_len = 8 - offset;
            out.push_bits(0, padding_bits_len);
        }
    }

    fn push_padding_codewords(out: &mut BitStream) {
        let offset = out.len() & 7;
        debug_assert!(
            offset == 0,
            "Bit offset should be zero before padding codewords: {}",
            offset
        );

        let remain_byte_capacity = (out.capacity() - out.len()) >> 3;
        trace!("Padding with {remain_byte_capacity} codewords");
        PADDING_CODEWORDS.iter().copied().cycle().take(remain_byte_capacity).for_each(|pc| {
            out.push_bits(pc, 8);
        });
    }

}

// Encoder
//------------------------------------------------------------------------------

mod encode {
    use log::debug;

    use crate::common::{
        error::{QRError, QRResult},
        metadata::Version,
        BitStream,
    };

    use super::writer::{pad_remaining_capacity, push_segment, push_terminator};

    // Encodes data into the smallest version that can hold it
    pub fn encode(data: &[u8]) -> QRResult<(BitStream, Version)> {
        let ver = find_min_version(data.len())?;
        debug!("Selected version {} for {} bytes", *ver, data.len());
        Ok((encode_with_version(data, ver)?, ver))
    }

    pub fn encode_with_version(data: &[u8], ver: Version) -> QRResult<BitStream> {
        if data.len() > ver.capacity() {
            return Err(QRError::CapacityOverflow);
        }
        let bit_capacity = ver.data_codewords() << 3;
        let mut bs = BitStream::new(bit_capacity);
        push_segment(data, ver, &mut bs);
        push_terminator(&mut bs);
        pad_remaining_capacity(&mut bs);

        debug_assert_eq!(bs.len(), bit_capacity, "Encoded stream doesn't fill data capacity");
        Ok(bs)
    }

    pub fn find_min_version(len: usize) -> QRResult<Version> {
        Version::all().find(|v| len <= v.capacity()).ok_or(QRError::DataTooLong)
    }

}

// Latin-1 transcoding
//------------------------------------------------------------------------------

mod latin1 {
    use crate::common::error::{QRError, QRResult};

    // Byte mode defaults to ISO-8859-1, so each char must fit in a single byte
    pub fn encode_latin1(text: &str) -> QRResult<Vec<u8>> {
        text.chars().map(|c| u8::try_from(c).map_err(|_| QRError::InvalidChar)).collect()
    }

}
