//! Reference and read simulation.
use super::base;
use super::{PackedRead, Sequence, SimConfig};
use rand::seq::SliceRandom;
use rand::Rng;

/// Draw a reference of `len` uniform bases.
pub fn generate_reference<T: Rng>(rng: &mut T, len: usize) -> Sequence {
    let codes = (0..len)
        .filter_map(|_| base::ALPHABET.choose(rng))
        .filter_map(|&sym| base::encode(sym).ok())
        .collect();
    Sequence::from_codes(codes)
}

/// Copy `read_len` bases of `reference` starting at `start`, then run the
/// configured number of substitution trials: pick one of the read's equal
/// parts, pick a position inside it, and swap the base there for a
/// different one. `start + read_len` must not pass the reference end.
pub fn mutated_read<T: Rng>(
    reference: &Sequence,
    start: usize,
    config: &SimConfig,
    rng: &mut T,
) -> PackedRead {
    let window = &reference.as_codes()[start..start + config.read_len];
    let mut read = PackedRead::from_codes(window);
    let part_size = config.part_size();
    for _ in 0..config.mutations_per_read {
        let part = rng.gen_range(0..config.parts_per_read);
        let offset = rng.gen_range(0..part_size);
        let pos = part * part_size + offset;
        let original = read.base_at(pos);
        read.set_base(pos, substitute_base(rng, original));
    }
    read
}

/// A read unrelated to any reference, every base drawn uniformly.
pub fn fake_read<T: Rng>(rng: &mut T, read_len: usize) -> PackedRead {
    let codes: Vec<u8> = (0..read_len).map(|_| rng.gen_range(0..4)).collect();
    PackedRead::from_codes(&codes)
}

// Rejection-sampled so the replacement always differs from `base`.
pub(crate) fn substitute_base<T: Rng>(rng: &mut T, base: u8) -> u8 {
    loop {
        let new = rng.gen_range(0..4);
        if new != base {
            break new;
        }
    }
}
