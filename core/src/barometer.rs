// Internasjonal barometrisk formel, samme konstanter som flykontrolleren bruker
const SEA_LEVEL_SCALE_M: f64 = 44330.0;
const EXPONENT: f64 = 1.0 / 5.255;

/// Høyde (m) over referansetrykket.
#[inline]
pub fn altitude_from_pressure(pressure: f64, reference_pressure: f64) -> f64 {
    SEA_LEVEL_SCALE_M * (1.0 - (pressure / reference_pressure).powf(EXPONENT))
}

/// Trykkhøyde for hele serien. Uten referanse brukes første sample.
/// Ugyldig referanse (<= 0 eller ikke-finit) gir tom vektor.
pub fn pressure_altitude(pressures: &[f64], reference: Option<f64>) -> Vec<f64> {
    let Some(p_ref) = reference.or_else(|| pressures.first().copied()) else {
        return Vec::new();
    };
    if !p_ref.is_finite() || p_ref <= 0.0 {
        log::warn!("ugyldig referansetrykk {p_ref}, hopper over trykkhøyde");
        return Vec::new();
    }
    pressures
        .iter()
        .map(|p| altitude_from_pressure(*p, p_ref))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_pressure_is_zero_altitude() {
        assert!(altitude_from_pressure(101_325.0, 101_325.0).abs() < 1e-9);
    }

    #[test]
    fn lower_pressure_is_higher() {
        // ca. 1 hPa ≈ 8 m nær havnivå
        let h = altitude_from_pressure(101_225.0, 101_325.0);
        assert!(h > 7.0 && h < 10.0, "h={h}");
    }

    #[test]
    fn series_defaults_to_first_sample() {
        let alt = pressure_altitude(&[100_000.0, 99_000.0], None);
        assert_eq!(alt.len(), 2);
        assert!(alt[0].abs() < 1e-9);
        assert!(alt[1] > 0.0);
        assert!(pressure_altitude(&[], None).is_empty());
        assert!(pressure_altitude(&[1.0], Some(0.0)).is_empty());
    }
}
