use am_scope::{
    engine::{compute, SignalEngine},
    spectrum::{dominant_bins, energy, spectral_energy},
    stats::modulation_depth,
    ModulationError, ModulationParams,
};

const EPS: f64 = 1e-9;

fn reference() -> am_scope::AmAnalysis {
    SignalEngine::compute(1000.0, 100.0, 0.5, 0.01, 8000.0).unwrap()
}

#[test]
fn reference_scenario_shapes() {
    let a = reference();
    assert_eq!(a.len(), 80);
    assert!((a.t[1] - 1.0 / 8000.0).abs() < 1e-18);
    assert_eq!(a.carrier[0], 0.0);
    assert_eq!(a.info[0], 0.0);
    assert_eq!(a.modulated[0], 0.0);
}

#[test]
fn reference_scenario_frequency_axis() {
    let a = reference();
    let n = a.freqs.len();
    assert_eq!(a.freqs[0], 0.0);
    assert_eq!(a.freqs.iter().filter(|&&f| f == 0.0).count(), 1);
    assert!((a.freqs[1] - 100.0).abs() < EPS);
    assert!((a.freqs[39] - 3900.0).abs() < EPS);
    assert!((a.freqs[40] + 4000.0).abs() < EPS);
    assert!((a.freqs[79] + 100.0).abs() < EPS);
    for j in 1..n / 2 {
        assert!((a.freqs[j] + a.freqs[n - j]).abs() < EPS, "bin {j}");
    }
}

#[test]
fn every_output_has_n_samples() {
    for (duration, sample_rate) in [
        (0.01, 8000.0),
        (0.0123, 1000.0),
        (1.0, 7.5),
        (2.5, 3.0),
        (0.29, 100.0),
    ] {
        let params = ModulationParams::new(3.0, 1.0, 0.8, duration, sample_rate);
        let n = (duration * sample_rate).floor() as usize;
        let a = compute(&params).unwrap();
        assert_eq!(a.t.len(), n);
        assert_eq!(a.carrier.len(), n);
        assert_eq!(a.info.len(), n);
        assert_eq!(a.modulated.len(), n);
        assert_eq!(a.freqs.len(), n);
        assert_eq!(a.carrier_spectrum.len(), n);
        assert_eq!(a.info_spectrum.len(), n);
        assert_eq!(a.modulated_spectrum.len(), n);
    }

    // N is floored on the floating-point product: 0.29 * 100 is 28.999...
    let a = SignalEngine::compute(3.0, 1.0, 0.8, 0.29, 100.0).unwrap();
    assert_eq!(a.len(), 28);
    assert_eq!(a.freqs.len(), 28);
}

#[test]
fn time_axis_is_half_open() {
    let a = SignalEngine::compute(5.0, 1.0, 0.3, 2.0, 10.0).unwrap();
    assert_eq!(a.t[0], 0.0);
    assert!(*a.t.last().unwrap() < 2.0);
    let step = 2.0 / 20.0;
    for w in a.t.windows(2) {
        assert!((w[1] - w[0] - step).abs() < 1e-12);
    }
}

#[test]
fn repeated_calls_are_identical() {
    let params = ModulationParams::new(440.0, 3.0, 0.7, 0.05, 44_100.0);
    assert_eq!(compute(&params).unwrap(), compute(&params).unwrap());
}

#[test]
fn modulation_identity_holds() {
    let m = 0.75;
    let a = SignalEngine::compute(1200.0, 150.0, m, 0.02, 9000.0).unwrap();
    for k in 0..a.len() {
        let expected = (1.0 + m * a.info[k]) * a.carrier[k];
        assert_eq!(a.modulated[k], expected);
    }
}

#[test]
fn parseval_holds_for_every_signal() {
    // Non-power-of-two length
    let a = SignalEngine::compute(1000.0, 130.0, 0.9, 0.0125, 7000.0).unwrap();
    assert_eq!(a.len(), 87);
    let pairs = [
        (&a.carrier, &a.carrier_spectrum),
        (&a.info, &a.info_spectrum),
        (&a.modulated, &a.modulated_spectrum),
    ];
    for (samples, spectrum) in pairs {
        let time = energy(samples);
        let freq = spectral_energy(spectrum);
        assert!((time - freq).abs() < 1e-9 * time.max(1.0), "{time} vs {freq}");
    }
}

#[test]
fn zero_samples_is_not_an_error() {
    let a = SignalEngine::compute(1.0, 1.0, 0.0, 1.0, 0.5).unwrap();
    assert!(a.is_empty());
    let (t, c, i, m, f, sc, si, sm) = a.into_parts();
    assert!(t.is_empty() && c.is_empty() && i.is_empty() && m.is_empty());
    assert!(f.is_empty() && sc.is_empty() && si.is_empty() && sm.is_empty());
}

#[test]
fn negative_duration_is_rejected() {
    let result = SignalEngine::compute(1000.0, 100.0, 0.5, -1.0, 8000.0);
    assert!(matches!(
        result,
        Err(ModulationError::InvalidParameter { name: "duration", .. })
    ));
}

#[test]
fn non_finite_inputs_are_rejected() {
    let bad = [
        ModulationParams::new(f64::NAN, 100.0, 0.5, 0.01, 8000.0),
        ModulationParams::new(1000.0, f64::INFINITY, 0.5, 0.01, 8000.0),
        ModulationParams::new(1000.0, 100.0, f64::NEG_INFINITY, 0.01, 8000.0),
        ModulationParams::new(1000.0, 100.0, 0.5, f64::NAN, 8000.0),
        ModulationParams::new(1000.0, 100.0, 0.5, 0.01, f64::INFINITY),
        ModulationParams::new(1000.0, 100.0, 0.5, 0.01, 0.0),
    ];
    for params in bad {
        assert!(compute(&params).is_err(), "{params:?}");
    }
}

#[test]
fn unrepresentable_sample_count_is_rejected() {
    let result = SignalEngine::compute(1000.0, 100.0, 0.5, 1e19, 10.0);
    assert!(matches!(
        result,
        Err(ModulationError::InvalidParameter { name: "duration", .. })
    ));
}

#[test]
fn zero_message_frequency_leaves_carrier() {
    let a = SignalEngine::compute(1000.0, 0.0, 0.8, 0.01, 8000.0).unwrap();
    assert!(a.info.iter().all(|&x| x == 0.0));
    assert_eq!(a.modulated, a.carrier);
}

#[test]
fn degenerate_parameters_are_accepted() {
    assert!(SignalEngine::compute(-1000.0, -100.0, -2.0, 0.01, 8000.0).is_ok());
    assert!(SignalEngine::compute(0.0, 0.0, 0.0, 0.01, 8000.0).is_ok());
    // Over-modulation inverts the envelope
    let a = SignalEngine::compute(1000.0, 100.0, 3.0, 0.01, 8000.0).unwrap();
    let peak = a.modulated.iter().fold(0.0f64, |acc, &x| acc.max(x.abs()));
    assert!(peak > 2.0);
}

#[test]
fn sidebands_sit_at_carrier_plus_minus_message() {
    // 10 Hz resolution, every tone on a bin
    let a = SignalEngine::compute(1000.0, 100.0, 0.6, 0.1, 8000.0).unwrap();
    let peaks = dominant_bins(&a.freqs, &a.modulated_spectrum, 3);
    assert_eq!(peaks.len(), 3);
    assert!((peaks[0].freq - 1000.0).abs() < EPS);
    let mut sidebands = [peaks[1].freq, peaks[2].freq];
    sidebands.sort_by(f64::total_cmp);
    assert!((sidebands[0] - 900.0).abs() < EPS);
    assert!((sidebands[1] - 1100.0).abs() < EPS);

    // Each sideband carries m/2 of the carrier amplitude
    let ratio = peaks[1].magnitude / peaks[0].magnitude;
    assert!((ratio - 0.3).abs() < 1e-9);
}

#[test]
fn measured_depth_matches_index() {
    for m in [0.1, 0.5, 1.0] {
        let a = SignalEngine::compute(1000.0, 100.0, m, 0.1, 8000.0).unwrap();
        let depth = modulation_depth(&a.freqs, &a.modulated_spectrum, 1000.0, 100.0).unwrap();
        assert!((depth - m).abs() < 1e-9, "m = {m}, measured {depth}");
    }
}
