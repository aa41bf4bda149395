//! Scenario assembly, ranking, and reporting for the paternity survey.
extern crate consensus;
extern crate dna_sim;
#[macro_use]
extern crate log;
extern crate rand;
extern crate rand_xoshiro;
extern crate rayon;
#[macro_use]
extern crate serde;
extern crate serde_json;

use dna_sim::{gen_read, PackedRead, Sequence, SimConfig};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use rayon::prelude::*;
use std::io::{self, Write};

/// Which generator produced a candidate's reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CandidateKind {
    TrueChild,
    Decoy,
}

/// One hypothesized child: a read set with per-read origin offsets.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub id: String,
    pub kind: CandidateKind,
    pub reads: Vec<PackedRead>,
    pub offsets: Vec<usize>,
}

/// A candidate after reconstruction and scoring.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateSummary {
    pub id: String,
    pub kind: CandidateKind,
    pub similarity: f64,
}

/// The whole survey, ready for text or JSON reporting.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub config: SimConfig,
    pub seed: u64,
    pub candidates: Vec<CandidateSummary>,
    pub best: usize,
    pub matched: bool,
}

/// Simulate every candidate's read set. Candidate 0 derives from the
/// reference with point mutations at evenly spaced offsets; the rest are
/// decoys drawing uniform reads at uniform offsets.
///
/// Candidate `i` runs on its own generator seeded with `seed + i`, so the
/// loop parallelizes without losing determinism for a fixed seed.
pub fn generate_candidates(
    reference: &Sequence,
    config: &SimConfig,
    seed: u64,
) -> Vec<Candidate> {
    let step = (config.reference_len - config.read_len) / config.reads_per_candidate;
    let span = config.reference_len - config.read_len;
    (0..config.candidate_count)
        .into_par_iter()
        .map(|index| {
            let mut rng: Xoshiro256StarStar =
                SeedableRng::seed_from_u64(seed.wrapping_add(index as u64));
            let id = format!("candidate-{:03}", index + 1);
            if index == 0 {
                let offsets: Vec<_> = (0..config.reads_per_candidate)
                    .map(|read_idx| read_idx * step)
                    .collect();
                let reads = offsets
                    .iter()
                    .map(|&start| gen_read::mutated_read(reference, start, config, &mut rng))
                    .collect();
                Candidate {
                    id,
                    kind: CandidateKind::TrueChild,
                    reads,
                    offsets,
                }
            } else {
                let (reads, offsets) = (0..config.reads_per_candidate)
                    .map(|_| {
                        let read = gen_read::fake_read(&mut rng, config.read_len);
                        let start = rng.gen_range(0..=span);
                        (read, start)
                    })
                    .unzip();
                Candidate {
                    id,
                    kind: CandidateKind::Decoy,
                    reads,
                    offsets,
                }
            }
        })
        .collect()
}

/// Reconstruct and score every candidate against the reference. Candidates
/// are independent, so this fans out one task per candidate; each task owns
/// its tallies.
pub fn analyze(candidates: &[Candidate], reference: &Sequence) -> Vec<CandidateSummary> {
    candidates
        .par_iter()
        .map(|candidate| {
            let rebuilt = consensus::reconstruct(
                &candidate.reads,
                &candidate.offsets,
                reference.len(),
            );
            let similarity = consensus::similarity(reference, &rebuilt);
            debug!("{}\t{:.4}", candidate.id, similarity);
            CandidateSummary {
                id: candidate.id.clone(),
                kind: candidate.kind,
                similarity,
            }
        })
        .collect()
}

/// Index of the best-scoring candidate. Ties keep the earliest candidate.
pub fn rank(candidates: &[CandidateSummary]) -> usize {
    assert!(!candidates.is_empty());
    let (mut best, mut most) = (0, candidates[0].similarity);
    for (index, candidate) in candidates.iter().enumerate().skip(1) {
        if most < candidate.similarity {
            most = candidate.similarity;
            best = index;
        }
    }
    best
}

impl Report {
    pub fn new(
        config: SimConfig,
        seed: u64,
        candidates: Vec<CandidateSummary>,
        best: usize,
    ) -> Self {
        let matched = candidates[best].kind == CandidateKind::TrueChild;
        Self {
            config,
            seed,
            candidates,
            best,
            matched,
        }
    }
    pub fn to_json(&self) -> String {
        serde_json::ser::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Per-candidate similarities followed by the verdict block.
pub fn write_report<W: Write>(wtr: &mut W, report: &Report) -> io::Result<()> {
    for candidate in report.candidates.iter() {
        writeln!(wtr, "{}\tsimilarity\t{:.4}%", candidate.id, candidate.similarity)?;
    }
    writeln!(wtr, "=== verdict ===")?;
    let best = &report.candidates[report.best];
    if report.matched {
        writeln!(
            wtr,
            "{} is the most likely true child of the {} candidates ({:.4}% similarity).",
            best.id,
            report.candidates.len(),
            best.similarity,
        )
    } else {
        writeln!(wtr, "No true child was found in this survey.")
    }
}

/// The reference as one run of decoded symbols.
pub fn dump_reference<W: Write>(wtr: &mut W, reference: &Sequence) -> io::Result<()> {
    writeln!(wtr, "{}", reference)
}

/// One line of decoded symbols per read.
pub fn dump_reads<W: Write>(wtr: &mut W, reads: &[PackedRead]) -> io::Result<()> {
    for read in reads.iter() {
        writeln!(wtr, "{}", read)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests;
