use mg20_decay::config::MAX_CHAIN_ENTRIES;
use mg20_decay::data::{ALPHA_MOMENTUM, BETA_SPECTRUM_BINS};
use mg20_decay::{
    generate_events, BoundingBox, GeneratorConfig, GeneratorError, Mg20DecayGenerator,
    RunSettings,
};

#[test]
fn test_load_fixture() {
    let config = GeneratorConfig::from_json_file("tests/mg20_decay.json").unwrap();
    assert_eq!(
        config.box_vertex,
        Some(BoundingBox::new([-1.0, -1.0, 10.0], [1.0, 1.0, 40.0]))
    );
    assert!(config.decay_chain_enabled());
    assert_eq!(config.decay_chain.len(), 2);
    assert_eq!(config.chain_branching_ratios().len(), config.chain_energies().len());
    // Omitted fields fall back to the reference scenario
    assert_eq!(config.alpha_momentum, ALPHA_MOMENTUM);
    assert_eq!(config.beta_spectrum.bins, BETA_SPECTRUM_BINS);
}

#[test]
fn test_fixture_drives_event_loop() {
    let config = GeneratorConfig::from_json_file("tests/mg20_decay.json").unwrap();
    let last_energy = config.decay_chain.last().unwrap().energy;
    let mut generator = Mg20DecayGenerator::new(config);
    let events = generate_events(&mut generator, &RunSettings::new(20).with_seed(3)).unwrap();

    for bank in &events {
        assert_eq!(bank.len(), 3);
        for track in bank.iter().skip(1) {
            assert!((track.momentum().norm() - last_energy).abs() < 1e-14);
            assert!(track.vz() >= 10.0 && track.vz() <= 40.0);
            assert!(track.vx().abs() <= 1.0 && track.vy().abs() <= 1.0);
        }
    }
}

#[test]
fn test_missing_file() {
    let err = GeneratorConfig::from_json_file("tests/does_not_exist.json").unwrap_err();
    assert!(matches!(err, GeneratorError::Io(_)));
}

#[test]
fn test_inverted_box_rejected_on_load() {
    let err = GeneratorConfig::from_json_str(
        r#"{"box_vertex": {"lower_left": [0.0, 0.0, 40.0], "upper_right": [0.0, 0.0, 10.0]}}"#,
    )
    .unwrap_err();
    assert!(matches!(err, GeneratorError::InvalidBox { .. }));
}

#[test]
fn test_chain_over_capacity_rejected_on_load() {
    let err = GeneratorConfig::from_json_str(
        r#"{
            "max_chain_entries": 1,
            "decay_chain": [
                {"energy": 0.05, "branching_ratio": 0.5},
                {"energy": 0.06, "branching_ratio": 0.5}
            ]
        }"#,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        GeneratorError::ChainCapacityExceeded { capacity: 1 }
    ));
}

#[test]
fn test_oversized_spectrum_grid_rejected_on_load() {
    let err = GeneratorConfig::from_json_str(
        r#"{"beta_spectrum": {"coefficients": [1.0], "lo": 0.0, "hi": 1.0, "bins": 18446744073709551615}}"#,
    )
    .unwrap_err();
    assert!(matches!(err, GeneratorError::InvalidSpectrum(_)));
}

#[test]
fn test_chain_limit_beyond_stream_stride_rejected_on_load() {
    let json = format!(r#"{{"max_chain_entries": {}}}"#, MAX_CHAIN_ENTRIES + 1);
    let err = GeneratorConfig::from_json_str(&json).unwrap_err();
    assert!(matches!(
        err,
        GeneratorError::ChainCapacityExceeded { capacity } if capacity == MAX_CHAIN_ENTRIES
    ));
}
