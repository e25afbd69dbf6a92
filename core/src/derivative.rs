use crate::smoothing::smooth;

/// Differanse over `lag` steg: `out[i] = series[i] - series[i - lag]`.
///
/// Samme lengde som inngangen. Indekser før `lag` har ingen forgjenger og
/// settes til 0.0.
pub fn derive(series: &[f64], lag: usize) -> Vec<f64> {
    let mut out = vec![0.0; series.len()];
    for i in lag..series.len() {
        out[i] = series[i] - series[i - lag];
    }
    out
}

/// Derivert + ekstra glatting av den deriverte (andre pass med samme snitt).
pub fn derive_smoothed(series: &[f64], lag: usize, window: usize) -> Vec<f64> {
    smooth(&derive(series, lag), window)
}

/// Gjør lag-differanser om til enheter per sekund.
/// `dt_s` er tid mellom to sampler; ugyldig tidssteg gir tom vektor.
pub fn rate_per_second(diffs: &[f64], lag: usize, dt_s: f64) -> Vec<f64> {
    if lag == 0 || !dt_s.is_finite() || dt_s <= 0.0 {
        return Vec::new();
    }
    let span = lag as f64 * dt_s;
    diffs.iter().map(|d| d / span).collect()
}
