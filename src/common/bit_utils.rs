use std::{fmt::Display, mem};

use num_traits::PrimInt;

// Bit stream
//------------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct BitStream {
    data: [u8; MAX_PAYLOAD_SIZE],
    // Bit length
    len: usize,
    // Max bit capacity
    capacity: usize,
    // Pointer to take bits
    cursor: usize,
}

impl BitStream {
    pub fn new(capacity: usize) -> Self {
        debug_assert!(
            capacity <= MAX_PAYLOAD_SIZE << 3,
            "Capacity exceeds max payload size: Capacity {capacity}"
        );
        Self { data: [0; MAX_PAYLOAD_SIZE], len: 0, capacity, cursor: 0 }
    }

    #[cfg(test)]
    pub fn from(inp: &[u8]) -> Self {
        let len = inp.len();
        let bit_len = len << 3;
        let mut data = [0; MAX_PAYLOAD_SIZE];
        data[..len].copy_from_slice(inp);
        Self { data, len: bit_len, capacity: bit_len, cursor: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn data(&self) -> &[u8] {
        &self.data[..(self.len + 7) >> 3]
    }
}

// Push bits for bit stream
//------------------------------------------------------------------------------

impl BitStream {
    pub fn push_bits<T>(&mut self, bits: T, size: usize)
    where
        T: PrimInt + Display,
    {
        let max_bits = mem::size_of::<T>() * 8;
        debug_assert!(
            size >= max_bits - bits.leading_zeros() as usize,
            "Bit count shouldn't exceed bit length: Length {size}, Bits {bits}"
        );
        debug_assert!(
            self.len + size <= self.capacity,
            "Insufficient capacity: Capacity {}, Size {}",
            self.capacity,
            self.len + size
        );
        debug_assert!(size <= 16, "Bits from only u8 and u16 can be pushed: Size {size}");

        // Guarded by the size checks above
        let bits = bits.to_u16().unwrap_or_default();
        if size > 8 {
            self.push_byte((bits >> 8) as u8, size - 8);
            self.push_byte((bits & 0xFF) as u8, 8);
        } else {
            self.push_byte(bits as u8, size);
        }
    }

    fn push_byte(&mut self, bits: u8, size: usize) {
        if size == 0 {
            return;
        }

        let offset = self.len & 7;
        let pos = self.len >> 3;

        if offset + size <= 8 {
            self.data[pos] |= bits << (8 - size - offset);
        } else {
            self.data[pos] |= bits >> (size + offset - 8);
            self.data[pos + 1] = bits << (16 - size - offset);
        }

        self.len += size;
    }

    pub fn extend(&mut self, arr: &[u8]) {
        debug_assert!(
            (self.len & 7) == 0,
            "Bit offset must be zero to extend from another array: Bit offset {}",
            self.len & 7
        );
        let pos = self.len >> 3;
        let arr_bits = arr.len() << 3;
        debug_assert!(
            self.len + arr_bits <= self.capacity,
            "Extension shouldn't overflow capacity: Capacity {}, Size {}",
            self.capacity,
            self.len + arr_bits
        );
        self.data[pos..pos + arr.len()].copy_from_slice(arr);
        self.len += arr_bits;
    }
}


// Take bits for bit stream
//------------------------------------------------------------------------------

impl BitStream {
    pub fn take(&mut self) -> Option<bool> {
        if self.cursor == self.len {
            return None;
        }

        let offset = self.cursor & 7;
        let pos = self.cursor >> 3;
        let bit = (self.data[pos] << offset) >> 7;

        self.cursor += 1;

        Some(bit != 0)
    }
}

impl Iterator for BitStream {
    type Item = bool;
    fn next(&mut self) -> Option<Self::Item> {
        self.take()
    }
}


// Global constants
//------------------------------------------------------------------------------

// Total codewords of version 10, rounded up
pub const MAX_PAYLOAD_SIZE: usize = 384;
