use std::ops::Deref;

use log::trace;

use crate::common::{ec::ecc, metadata::Version, BitStream};

// Splits data codewords into blocks, appends ecc per block and interleaves
// data then ecc into the final codeword sequence
pub fn construct_payload(data: &[u8], version: Version) -> BitStream {
    let (data_blocks, ecc_blocks) = compute_ecc(data, version);
    trace!("Split {} data codewords into {} blocks", data.len(), data_blocks.len());

    let mut payload = BitStream::new(version.total_codewords() << 3);
    payload.extend(&interleave(&data_blocks));
    payload.extend(&interleave(&ecc_blocks));
    payload
}

// ECC: Error Correction Codeword generator
pub fn compute_ecc(data: &[u8], version: Version) -> (Vec<&[u8]>, Vec<Vec<u8>>) {
    let data_blocks = blockify(data, version);

    let ecc_size_per_block = version.ecc_per_block();
    let ecc_blocks = data_blocks.iter().map(|b| ecc(b, ecc_size_per_block)).collect::<Vec<_>>();

    (data_blocks, ecc_blocks)
}

pub fn blockify(data: &[u8], version: Version) -> Vec<&[u8]> {
    let (block1_size, block1_count, block2_size, block2_count) =
        version.data_codewords_per_block();

    let total_blocks = block1_count + block2_count;
    let total_block1_size = block1_size * block1_count;
    let total_size = total_block1_size + block2_size * block2_count;

    debug_assert!(
        total_size == data.len(),
        "Data len doesn't match total size of blocks: Data len {}, Total block size {}",
        data.len(),
        total_size
    );

    let mut data_blocks = Vec::with_capacity(total_blocks);
    data_blocks.extend(data[..total_block1_size].chunks(block1_size));
    if block2_size > 0 {
        data_blocks.extend(data[total_block1_size..].chunks(block2_size));
    }
    data_blocks
}

// Column-wise read of blocks; shorter blocks are skipped once exhausted
pub fn interleave<T: Copy, V: Deref<Target = [T]>>(blocks: &[V]) -> Vec<T> {
    let max_block_size = blocks.iter().map(|b| b.len()).max().unwrap_or(0);
    let total_size = blocks.iter().map(|b| b.len()).sum::<usize>();
    let mut res = Vec::with_capacity(total_size);
    for i in 0..max_block_size {
        for b in blocks {
            if i < b.len() {
                res.push(b[i]);
            }
        }
    }
    res
}
