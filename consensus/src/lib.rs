//! Majority-vote reconstruction of a parent sequence from short reads.
extern crate dna_sim;
#[macro_use]
extern crate log;

use dna_sim::{PackedRead, Sequence, UNKNOWN_BASE};


/// Rebuild a sequence over `[0, reference_len)` from reads and their origin
/// offsets by per-position majority vote.
///
/// Positions no read covers come back as the unknown sentinel. A base whose
/// absolute position would land outside the reference contributes nothing;
/// the read's remaining bases still count. The result depends only on the
/// multiset of (position, base) observations, not on read order.
pub fn reconstruct(reads: &[PackedRead], offsets: &[usize], reference_len: usize) -> Sequence {
    assert_eq!(reads.len(), offsets.len());
    let mut counts = vec![[0u32; 4]; reference_len];
    let mut coverage = vec![0u32; reference_len];
    for (read, &start) in reads.iter().zip(offsets.iter()) {
        for idx in 0..read.len() {
            let pos = start + idx;
            if reference_len <= pos {
                continue;
            }
            counts[pos][read.base_at(idx) as usize] += 1;
            coverage[pos] += 1;
        }
    }
    let covered = coverage.iter().filter(|&&cov| 0 < cov).count();
    debug!("{} of {} positions covered", covered, reference_len);
    let codes = counts
        .iter()
        .zip(coverage.iter())
        .map(|(count, &cov)| if cov == 0 { UNKNOWN_BASE } else { majority(count) })
        .collect();
    Sequence::from_codes(codes)
}

// The first base to exceed the running maximum wins, so equal counts keep
// the lowest code.
fn majority(count: &[u32; 4]) -> u8 {
    let (mut max, mut best) = (0, 0);
    for (code, &c) in count.iter().enumerate() {
        if max < c {
            max = c;
            best = code;
        }
    }
    best as u8
}

/// Percentage of covered positions where `reconstructed` agrees with
/// `reference`. Unknown positions are excluded from both sides of the
/// ratio; a reconstruction covering nothing scores 0.0.
pub fn similarity(reference: &Sequence, reconstructed: &Sequence) -> f64 {
    let (mut matches, mut total) = (0, 0);
    for (&parent, &child) in reference
        .as_codes()
        .iter()
        .zip(reconstructed.as_codes().iter())
    {
        if child == UNKNOWN_BASE {
            continue;
        }
        if parent == child {
            matches += 1;
        }
        total += 1;
    }
    if total == 0 {
        0.
    } else {
        matches as f64 / total as f64 * 100.
    }
}
