use super::galois::G;

// Largest data block at error correction level L for versions 1..=10
pub static MAX_BLOCK_SIZE: usize = 128;

pub static MAX_EC_SIZE: usize = 32;

// Reed-Solomon encoder
//------------------------------------------------------------------------------

// Coefficients of ∏(x - α^i) for i in 0..ec_len, lowest degree first.
// The leading coefficient at index ec_len is always 1.
pub fn generator_polynomial(ec_len: usize) -> Vec<G> {
    debug_assert!(ec_len <= MAX_EC_SIZE, "Ec length exceeds maximum: Ec length {ec_len}");

    let mut gen = vec![G(0); ec_len + 1];
    gen[0] = G(1);
    for i in 0..ec_len {
        let root = G::gen_pow(i);
        for j in (1..=ec_len).rev() {
            gen[j] = gen[j] * root + gen[j - 1];
        }
        gen[0] *= root;
    }
    gen
}

// ECC: Error correction codewords for a single block.
// Simulates long division of the data polynomial by the generator polynomial
// with a shift register; the register ends up holding the remainder.
pub fn ecc(block: &[u8], ec_len: usize) -> Vec<u8> {
    debug_assert!(
        block.len() <= MAX_BLOCK_SIZE,
        "Block exceeds maximum size: Block size {}",
        block.len()
    );

    let gen = generator_polynomial(ec_len);
    let mut reg = vec![G(0); ec_len];

    for &b in block {
        let feedback = G(b) + reg[0];
        reg.rotate_left(1);
        reg[ec_len - 1] = G(0);
        if feedback == G(0) {
            continue;
        }
        for (j, r) in reg.iter_mut().enumerate() {
            *r += feedback * gen[ec_len - 1 - j];
        }
    }

    reg.into_iter().map(u8::from).collect()
}
