use mg20_decay::data::{ALPHA_MOMENTUM, ALPHA_PDG, BETA_PDG, GAMMA_PDG, PROTON_MOMENTUM, PROTON_PDG};
use mg20_decay::{
    DecayGenerator, GeneratorConfig, GeneratorError, Mg20DecayGenerator, PdgTable, TrackBank,
};
use nalgebra::Vector3;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_three_tracks_in_fixed_order() {
    let mut generator = Mg20DecayGenerator::new(GeneratorConfig::new());
    generator.init().unwrap();
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..100 {
        let mut bank = TrackBank::new();
        generator.read_event(&mut rng, &mut bank).unwrap();
        assert_eq!(bank.len(), 3);

        let placeholder = bank.pop_track().unwrap();
        assert_eq!(placeholder.pdg(), GAMMA_PDG);
        assert_eq!(placeholder.momentum(), Vector3::zeros());

        let proton = bank.pop_track().unwrap();
        assert_eq!(proton.pdg(), PROTON_PDG);
        assert!((proton.momentum().norm() - PROTON_MOMENTUM).abs() < 1e-15);

        let alpha = bank.pop_track().unwrap();
        assert_eq!(alpha.pdg(), ALPHA_PDG);
        assert!((alpha.momentum().norm() - ALPHA_MOMENTUM).abs() < 1e-15);

        // Proton and alpha share the event vertex
        assert_eq!(proton.vertex(), alpha.vertex());
    }
}

#[test]
fn test_beta_and_gamma_not_emitted() {
    let mut generator = Mg20DecayGenerator::new(GeneratorConfig::new());
    generator.init().unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    let mut tracks = Vec::new();
    for _ in 0..50 {
        generator.read_event(&mut rng, &mut tracks).unwrap();
    }
    assert_eq!(tracks.len(), 150);
    assert!(tracks.iter().all(|t| t.pdg() != BETA_PDG));
    // The only photons are the zero-momentum placeholders
    assert!(tracks
        .iter()
        .filter(|t| t.pdg() == GAMMA_PDG)
        .all(|t| t.momentum() == Vector3::zeros()));
}

#[test]
fn test_missing_particle_is_fatal_before_any_event() {
    for pdg in [PROTON_PDG, ALPHA_PDG, GAMMA_PDG] {
        let mut table = PdgTable::standard();
        table.remove(pdg);
        let mut generator = Mg20DecayGenerator::with_database(GeneratorConfig::new(), table);
        let err = generator.init().unwrap_err();
        assert!(err.is_fatal());
        assert!(matches!(err, GeneratorError::UnknownParticle { .. }));

        let mut rng = StdRng::seed_from_u64(1);
        let mut bank = TrackBank::new();
        assert!(generator.read_event(&mut rng, &mut bank).is_err());
        assert!(bank.is_empty(), "no track may be written after a fatal init");
    }
}

#[test]
fn test_chain_rescales_emitted_momenta() {
    let mut config = GeneratorConfig::new();
    config.add_decay_chain_entry(0.075, 0.716).unwrap();
    let mut generator = Mg20DecayGenerator::new(config);
    generator.init().unwrap();
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..100 {
        let mut bank = TrackBank::new();
        generator.read_event(&mut rng, &mut bank).unwrap();
        // Branching ratios do not gate emission
        assert_eq!(bank.len(), 3);
        assert!((bank.get(1).unwrap().momentum().norm() - 0.075).abs() < 1e-14);
        assert!((bank.get(2).unwrap().momentum().norm() - 0.075).abs() < 1e-14);
    }
}

#[test]
fn test_box_vertex_sampling() {
    let (lo, hi) = ([-2.0, -1.0, 10.0], [2.0, 1.0, 40.0]);
    let mut config = GeneratorConfig::new();
    config
        .try_set_box_vertex(lo[0], lo[1], lo[2], hi[0], hi[1], hi[2])
        .unwrap();
    let mut generator = Mg20DecayGenerator::new(config);
    generator.init().unwrap();
    let mut rng = StdRng::seed_from_u64(314);

    let n = 20000;
    let mut sum = Vector3::zeros();
    for _ in 0..n {
        let event = generator.sample_event(&mut rng).unwrap();
        for axis in 0..3 {
            assert!(event.vertex[axis] >= lo[axis] && event.vertex[axis] <= hi[axis]);
        }
        assert_eq!(generator.vertex(), event.vertex);
        sum += event.vertex;
    }

    let mean = sum / n as f64;
    for axis in 0..3 {
        let mid = 0.5 * (lo[axis] + hi[axis]);
        let width = hi[axis] - lo[axis];
        // Standard error of the mean is width / sqrt(12 n)
        let tolerance = 5.0 * width / (12.0 * n as f64).sqrt();
        assert!(
            (mean[axis] - mid).abs() < tolerance,
            "axis {} mean {} expected {}",
            axis,
            mean[axis],
            mid
        );
    }
}

#[test]
fn test_inverted_box_still_samples_between_bounds() {
    // Unchecked setter: the interval is sampled as given, without reordering
    let mut config = GeneratorConfig::new();
    config.set_box_vertex(0.0, 0.0, 40.0, 0.0, 0.0, 10.0);
    let mut generator = Mg20DecayGenerator::new(config);
    generator.init().unwrap();

    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..1000 {
        let event = generator.sample_event(&mut rng).unwrap();
        assert!(event.vertex.z > 10.0 && event.vertex.z <= 40.0);
        assert_eq!(event.vertex.x, 0.0);
    }
}

#[test]
fn test_checked_box_rejects_inverted_bounds() {
    let mut config = GeneratorConfig::new();
    let err = config
        .try_set_box_vertex(0.0, 0.0, 40.0, 0.0, 0.0, 10.0)
        .unwrap_err();
    assert!(matches!(err, GeneratorError::InvalidBox { axis: "z", .. }));
    assert!(!err.is_fatal());
}
