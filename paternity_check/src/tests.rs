use super::*;

fn small_config() -> SimConfig {
    SimConfig {
        reference_len: 100,
        candidate_count: 4,
        reads_per_candidate: 10,
        read_len: 10,
        parts_per_read: 2,
        mutations_per_read: 0,
    }
}

fn summary(id: &str, kind: CandidateKind, similarity: f64) -> CandidateSummary {
    CandidateSummary {
        id: id.to_string(),
        kind,
        similarity,
    }
}

#[test]
fn rank_keeps_the_first_of_equal_scores() {
    use CandidateKind::*;
    let scores = vec![
        summary("a", TrueChild, 10.),
        summary("b", Decoy, 50.),
        summary("c", Decoy, 50.),
        summary("d", Decoy, 20.),
    ];
    assert_eq!(rank(&scores), 1);
    let scores = vec![
        summary("a", TrueChild, 25.),
        summary("b", Decoy, 25.),
        summary("c", Decoy, 25.),
    ];
    assert_eq!(rank(&scores), 0);
    let scores = vec![summary("a", TrueChild, 0.)];
    assert_eq!(rank(&scores), 0);
}

#[test]
fn candidate_generation_is_deterministic() {
    let mut rng: Xoshiro256StarStar = SeedableRng::seed_from_u64(99);
    let reference = gen_read::generate_reference(&mut rng, 100);
    let config = small_config();
    let first = generate_candidates(&reference, &config, 7);
    let second = generate_candidates(&reference, &config, 7);
    assert_eq!(first, second);
    assert_eq!(first.len(), config.candidate_count);
    assert_eq!(first[0].kind, CandidateKind::TrueChild);
    assert!(first[1..].iter().all(|c| c.kind == CandidateKind::Decoy));
    // Spaced offsets for the true child, step (100 - 10) / 10.
    let expected: Vec<_> = (0..10).map(|read_idx| read_idx * 9).collect();
    assert_eq!(first[0].offsets, expected);
    for candidate in first.iter() {
        assert_eq!(candidate.reads.len(), config.reads_per_candidate);
        assert!(candidate
            .offsets
            .iter()
            .all(|&start| start + config.read_len <= config.reference_len));
    }
}

#[test]
fn exact_true_child_scores_one_hundred() {
    let mut rng: Xoshiro256StarStar = SeedableRng::seed_from_u64(4_545);
    let config = small_config();
    let reference = gen_read::generate_reference(&mut rng, config.reference_len);
    let candidates = generate_candidates(&reference, &config, 11);
    let summaries = analyze(&candidates, &reference);
    assert!((summaries[0].similarity - 100.).abs() < f64::EPSILON);
    let best = rank(&summaries);
    assert_eq!(best, 0);
    let report = Report::new(config, 11, summaries, best);
    assert!(report.matched);
}

#[test]
fn mutated_true_child_still_wins() {
    let mut rng: Xoshiro256StarStar = SeedableRng::seed_from_u64(777);
    let mut config = small_config();
    config.mutations_per_read = 3;
    let reference = gen_read::generate_reference(&mut rng, config.reference_len);
    let candidates = generate_candidates(&reference, &config, 13);
    let summaries = analyze(&candidates, &reference);
    // Three substitutions per ten-base read leave roughly three quarters
    // of the covered positions intact; decoys sit near one quarter.
    assert!(55. < summaries[0].similarity, "{}", summaries[0].similarity);
    for decoy in summaries[1..].iter() {
        assert!(decoy.similarity < 45., "{}", decoy.similarity);
    }
    assert_eq!(rank(&summaries), 0);
}

#[test]
fn report_text_has_scores_and_verdict() {
    use CandidateKind::*;
    let candidates = vec![
        summary("candidate-001", TrueChild, 99.987654),
        summary("candidate-002", Decoy, 25.),
    ];
    let report = Report::new(small_config(), 1, candidates, 0);
    let mut buffer = Vec::new();
    write_report(&mut buffer, &report).unwrap();
    let text = String::from_utf8(buffer).unwrap();
    assert!(text.contains("candidate-001\tsimilarity\t99.9877%"));
    assert!(text.contains("candidate-002\tsimilarity\t25.0000%"));
    assert!(text.contains("=== verdict ==="));
    assert!(text.contains("candidate-001 is the most likely true child"));
}

#[test]
fn report_names_no_match_when_a_decoy_wins() {
    use CandidateKind::*;
    let candidates = vec![
        summary("candidate-001", TrueChild, 24.),
        summary("candidate-002", Decoy, 26.),
    ];
    let report = Report::new(small_config(), 1, candidates, 1);
    assert!(!report.matched);
    let mut buffer = Vec::new();
    write_report(&mut buffer, &report).unwrap();
    let text = String::from_utf8(buffer).unwrap();
    assert!(text.contains("No true child was found in this survey."));
    let json = report.to_json();
    assert!(json.contains("\"matched\":false"));
    assert!(json.contains("\"best\":1"));
}

#[test]
fn dumps_render_decoded_symbols() {
    let reference = Sequence::from_symbols(b"ACGT").unwrap();
    let mut buffer = Vec::new();
    dump_reference(&mut buffer, &reference).unwrap();
    assert_eq!(String::from_utf8(buffer).unwrap(), "ACGT\n");
    let reads = vec![
        PackedRead::from_codes(&[0, 1]),
        PackedRead::from_codes(&[2, 3]),
    ];
    let mut buffer = Vec::new();
    dump_reads(&mut buffer, &reads).unwrap();
    assert_eq!(String::from_utf8(buffer).unwrap(), "AC\nGT\n");
}
