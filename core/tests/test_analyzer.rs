use altlog_core::analyzer::{analyze, AnalysisConfig};
use altlog_core::storage::parse_log;
use altlog_core::AltlogError;
use serde_json::json;

#[test]
fn test_constant_log_end_to_end() {
    // 20 like poster, standard vindu 16 → 5 glattede punkter
    let recs: Vec<_> = (0..20)
        .map(|_| json!({"alt": 100.0, "avg_alt": 100.0, "p": 1000.0, "avg_p": 1000.0}))
        .collect();
    let log = parse_log(&json!(recs).to_string()).unwrap();

    let cfg = AnalysisConfig { window: 16, ..Default::default() };
    let report = analyze(&log, &cfg).unwrap();

    assert_eq!(report.samples, 20);
    assert_eq!(report.smoothed_altitude, vec![100.0; 5]);
    assert_eq!(report.noise, 0.0);
    assert_eq!(report.velocity.len(), 5);
    assert!(report.velocity.iter().all(|v| *v == 0.0));
    // andre pass (32) er lengre enn farten → tom serie
    assert_eq!(report.velocity_smoothed, Some(vec![]));
    assert!(report.pressure_altitude.iter().all(|h| h.abs() < 1e-9));
}

#[test]
fn test_climb_gives_positive_velocity() {
    // jevn stigning 2 m per sample
    let recs: Vec<_> = (0..60)
        .map(|i| json!({"alt": 2.0 * i as f64, "avg_alt": 0.0, "p": 101325.0, "avg_p": 101325.0}))
        .collect();
    let log = parse_log(&json!(recs).to_string()).unwrap();

    let cfg = AnalysisConfig {
        window: 4,
        lag: 5,
        secondary_window: Some(3),
        sample_interval_s: Some(0.5),
        reference_pressure_pa: None,
    };
    let report = analyze(&log, &cfg).unwrap();

    assert_eq!(report.smoothed_altitude.len(), 57);
    assert!(report.velocity[..5].iter().all(|v| *v == 0.0));
    assert!(report.velocity[5..].iter().all(|v| (v - 10.0).abs() < 1e-9));

    let vms = report.velocity_ms.as_ref().unwrap();
    // 10 m over 5 × 0.5 s = 4 m/s
    assert!((vms[20] - 4.0).abs() < 1e-9);

    let vs = report.velocity_smoothed.as_ref().unwrap();
    assert_eq!(vs.len(), 55);
    assert!((vs[10] - 10.0).abs() < 1e-9);

    // prefiks-justert støy: glattet ligger 3 m over rå (fasefeil fra vinduet)
    assert!((report.noise - 3.0).abs() < 1e-9);
}

#[test]
fn test_window_longer_than_log_is_empty_not_error() {
    let log = parse_log(r#"[{"alt": 1, "avg_alt": 1, "p": 1000, "avg_p": 1000}]"#).unwrap();
    let report = analyze(&log, &AnalysisConfig::default()).unwrap();
    assert!(report.smoothed_altitude.is_empty());
    assert!(report.velocity.is_empty());
    assert_eq!(report.noise, 0.0);
}

#[test]
fn test_invalid_config_is_rejected() {
    let log = parse_log("[]").unwrap();
    for cfg in [
        AnalysisConfig { window: 0, ..Default::default() },
        AnalysisConfig { lag: 0, ..Default::default() },
        AnalysisConfig { secondary_window: Some(0), ..Default::default() },
        AnalysisConfig { sample_interval_s: Some(-1.0), ..Default::default() },
        AnalysisConfig { reference_pressure_pa: Some(0.0), ..Default::default() },
    ] {
        let err = analyze(&log, &cfg).unwrap_err();
        assert!(matches!(err, AltlogError::InvalidConfig(_)), "cfg={cfg:?}");
    }
}
