/// Støyestimat: gjennomsnittlig absoluttavvik mellom rå og glattet serie.
///
/// Glattet serie sammenlignes mot prefikset av rådata med samme lengde.
/// Faseforskyvningen fra glattingen kompenseres ikke, så tallet inneholder
/// også etterslep fra vinduet, ikke bare sensorstøy.
/// Tom glattet serie gir 0.0.
pub fn noise(raw: &[f64], smoothed: &[f64]) -> f64 {
    let mut total_err = 0.0;
    let mut n = 0usize;
    for (r, s) in raw.iter().zip(smoothed.iter()) {
        total_err += (r - s).abs();
        n += 1;
    }
    if n == 0 { 0.0 } else { total_err / n as f64 }
}

/// Snitt av en serie, None hvis tom.
pub fn mean(xs: &[f64]) -> Option<f64> {
    if xs.is_empty() {
        None
    } else {
        Some(xs.iter().sum::<f64>() / xs.len() as f64)
    }
}

/// (min, maks) for en serie, None hvis tom.
pub fn min_max(xs: &[f64]) -> Option<(f64, f64)> {
    let mut it = xs.iter().copied();
    let first = it.next()?;
    Some(it.fold((first, first), |(lo, hi), x| (lo.min(x), hi.max(x))))
}
