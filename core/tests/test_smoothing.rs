use altlog_core::smoothing::smooth;

#[test]
fn test_smooth_known_values() {
    let out = smooth(&[1.0, 2.0, 3.0, 4.0, 5.0], 2);
    assert_eq!(out, vec![1.5, 2.5, 3.5, 4.5]);
}

#[test]
fn test_smooth_length_is_valid_mode() {
    let xs: Vec<f64> = (0..50).map(|i| (i as f64 * 0.37).sin() * 10.0).collect();
    for w in 1..=xs.len() {
        assert_eq!(smooth(&xs, w).len(), xs.len() - w + 1, "w={w}");
    }
}

#[test]
fn test_smooth_constant_series_stays_constant() {
    let xs = vec![42.5; 30];
    for w in [1, 7, 16, 30] {
        let out = smooth(&xs, w);
        assert!(out.iter().all(|v| (v - 42.5).abs() < 1e-9), "w={w}");
    }
}

#[test]
fn test_smooth_window_longer_than_series_is_empty() {
    assert!(smooth(&[1.0, 2.0, 3.0], 4).is_empty());
    assert!(smooth(&[], 1).is_empty());
}

#[test]
fn test_smooth_matches_naive_mean() {
    // løpende sum skal gi samme svar som å summere hvert vindu
    let xs: Vec<f64> = (0..40).map(|i| ((i * 7) % 11) as f64 - 3.0).collect();
    let w = 6;
    let out = smooth(&xs, w);
    for (i, v) in out.iter().enumerate() {
        let naive = xs[i..i + w].iter().sum::<f64>() / w as f64;
        assert!((v - naive).abs() < 1e-9, "i={i}: {v} vs {naive}");
    }
}
