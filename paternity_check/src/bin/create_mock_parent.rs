extern crate dna_sim;
extern crate rand;
extern crate rand_xoshiro;
use dna_sim::gen_read;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use std::io::{BufWriter, Write};

// Dump a random parent sequence to stdout. Length, then an optional seed.
fn main() -> std::io::Result<()> {
    let args: Vec<_> = std::env::args().collect();
    let len: usize = args[1].parse().unwrap();
    let seed: u64 = args.get(2).and_then(|value| value.parse().ok()).unwrap_or(2_312_789);
    let mut rng: Xoshiro256StarStar = SeedableRng::seed_from_u64(seed);
    let reference = gen_read::generate_reference(&mut rng, len);
    let stdout = std::io::stdout();
    let mut wtr = BufWriter::new(stdout.lock());
    writeln!(&mut wtr, "{}", reference)?;
    wtr.flush()
}
