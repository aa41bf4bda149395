extern crate clap;
extern crate dna_sim;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate paternity_check;
extern crate rand;
extern crate rand_xoshiro;
use clap::{App, Arg};
use dna_sim::{gen_read, Sequence, SimConfig, DEFAULT_CONFIG};
use paternity_check::{analyze, dump_reads, dump_reference, generate_candidates, rank, Report};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use std::fs::File;
use std::io::{BufWriter, Write};

fn main() -> std::io::Result<()> {
    let defaults = (
        DEFAULT_CONFIG.reference_len.to_string(),
        DEFAULT_CONFIG.candidate_count.to_string(),
        DEFAULT_CONFIG.reads_per_candidate.to_string(),
        DEFAULT_CONFIG.read_len.to_string(),
        DEFAULT_CONFIG.parts_per_read.to_string(),
        DEFAULT_CONFIG.mutations_per_read.to_string(),
    );
    let matches = App::new("paternity_check")
        .version("0.1")
        .author("Bansho Masutani")
        .about("Simulated paternity survey over bit-packed short reads.")
        .arg(
            Arg::with_name("reference_len")
                .short("n")
                .long("reference_len")
                .value_name("LENGTH")
                .help("Length of the parent sequence")
                .default_value(&defaults.0)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("candidates")
                .short("c")
                .long("candidates")
                .value_name("COUNT")
                .help("Number of child candidates, the true one included")
                .default_value(&defaults.1)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("reads")
                .short("m")
                .long("reads")
                .value_name("COUNT")
                .help("Short reads per candidate")
                .default_value(&defaults.2)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("read_len")
                .short("l")
                .long("read_len")
                .value_name("LENGTH")
                .help("Bases per read (at most 32)")
                .default_value(&defaults.3)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("parts")
                .short("p")
                .long("parts")
                .value_name("COUNT")
                .help("Sub-windows per read for mutation placement")
                .default_value(&defaults.4)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("mutations")
                .short("k")
                .long("mutations")
                .value_name("COUNT")
                .help("Substitution trials per true-child read")
                .default_value(&defaults.5)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("seed")
                .short("s")
                .long("seed")
                .value_name("SEED")
                .help("Seed for the random source. Defaults to the current time")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("parent")
                .long("parent")
                .value_name("FILE")
                .help("Load the parent sequence from FILE instead of simulating it")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("outdir")
                .short("o")
                .long("output")
                .value_name("OUTPUT_DIRECTORY")
                .help("Output directory")
                .default_value(&".")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Output debug to the standard error."),
        )
        .get_matches();
    let level = match matches.occurrences_of("verbose") {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    debug!("paternity_check started. Debug mode.");
    let parse = |name: &str| -> usize {
        matches
            .value_of(name)
            .and_then(|value| value.parse().ok())
            .unwrap_or_else(|| panic!("{} should be a non-negative integer.", name))
    };
    let mut config = SimConfig {
        reference_len: parse("reference_len"),
        candidate_count: parse("candidates"),
        reads_per_candidate: parse("reads"),
        read_len: parse("read_len"),
        parts_per_read: parse("parts"),
        mutations_per_read: parse("mutations"),
    };
    let seed: u64 = match matches.value_of("seed").and_then(|value| value.parse().ok()) {
        Some(seed) => seed,
        None => std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or(0),
    };
    let mut rng: Xoshiro256StarStar = SeedableRng::seed_from_u64(seed);
    let reference = match matches.value_of("parent") {
        Some(file) => {
            let raw = std::fs::read_to_string(file)?;
            match Sequence::from_symbols(raw.trim().as_bytes()) {
                Ok(reference) => reference,
                Err(why) => {
                    eprintln!("{}: {}", file, why);
                    std::process::exit(1);
                }
            }
        }
        None => gen_read::generate_reference(&mut rng, config.reference_len),
    };
    config.reference_len = reference.len();
    if let Err(why) = config.validate() {
        eprintln!("invalid configuration: {}", why);
        std::process::exit(1);
    }
    info!("seed:{}", seed);
    info!("parent sequence of {} bases ready", reference.len());
    let outdir = matches.value_of("outdir").unwrap();
    std::fs::create_dir_all(outdir)?;
    {
        let mut wtr = BufWriter::new(File::create(format!("{}/parent_dna.txt", outdir))?);
        dump_reference(&mut wtr, &reference)?;
    }
    let candidate_seed: u64 = rng.gen();
    let candidates = generate_candidates(&reference, &config, candidate_seed);
    info!(
        "generated {} read sets of {} reads each",
        candidates.len(),
        config.reads_per_candidate
    );
    {
        let mut wtr = BufWriter::new(File::create(format!("{}/child_short_reads.txt", outdir))?);
        dump_reads(&mut wtr, &candidates[0].reads)?;
    }
    let summaries = analyze(&candidates, &reference);
    let best = rank(&summaries);
    let report = Report::new(config, seed, summaries, best);
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    paternity_check::write_report(&mut out, &report)?;
    out.flush()?;
    {
        let mut wtr = BufWriter::new(File::create(format!("{}/result.txt", outdir))?);
        paternity_check::write_report(&mut wtr, &report)?;
    }
    {
        let mut wtr = BufWriter::new(File::create(format!("{}/result.json", outdir))?);
        writeln!(&mut wtr, "{}", report.to_json())?;
    }
    info!("results written to {}", outdir);
    Ok(())
}
