/// Glidende snitt med "valid"-semantikk: bare fulle vinduer gir utverdi.
///
/// Lengden på resultatet er `samples.len() - window + 1`. Er vinduet 0 eller
/// lengre enn serien, returneres en tom vektor.
pub fn smooth(samples: &[f64], window: usize) -> Vec<f64> {
    if window == 0 || window > samples.len() {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(samples.len() - window + 1);
    let mut sum = 0.0f64;

    for i in 0..samples.len() {
        sum += samples[i];
        if i >= window {
            sum -= samples[i - window];
        }
        if i + 1 >= window {
            out.push(sum / window as f64);
        }
    }

    out
}
