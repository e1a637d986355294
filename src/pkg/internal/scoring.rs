//! Composite evaluation scoring.
//!
//! Three bounded sub-scores (rendimiento, potencial, adaptabilidad) combine
//! into a single 0-10 value; each sub-score also maps to a fixed descriptive
//! sentence used on the dashboard.

/// Marker returned when a rounded sub-score falls outside the 1-6 table.
pub const NOT_APPLICABLE: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Performance,
    Potential,
    Adaptability,
}

const PERFORMANCE_LEVELS: [&str; 6] = [
    "Muy por debajo del nivel de 1ª división de Chile.",
    "Jugador de rol en equipos débiles de 1ª división o válido para 2ª división.",
    "Cumple en equipos de media tabla baja en 1ª división de Chile o ligas equivalentes.",
    "Buen rendimiento en 1ª división de Chile / titular fiable en Sudamérica competitiva.",
    "Jugador diferencial en Sudamérica o titular en ligas europeas secundarias.",
    "Rendimiento top nivel europeo, listo para competir en ligas Big 5 y torneos internacionales.",
];

const POTENTIAL_LEVELS: [&str; 6] = [
    "No da nivel para 1ª división de Chile.",
    "Jugador válido solo para ligas menores sudamericanas o 2ª división.",
    "Jugador de nivel bajo/medio en 1ª división de Chile o ligas similares.",
    "Jugador sólido en 1ª división de Chile / competitivo en ligas top sudamericanas.",
    "Jugador con nivel para destacar en Sudamérica y con proyección de salto a ligas europeas secundarias.",
    "Jugador con potencial claro para ligas top de Europa y competiciones internacionales.",
];

const ADAPTABILITY_LEVELS: [&str; 6] = [
    "Adaptación muy complicada: limitaciones de mentalidad, idioma o carácter.",
    "Adaptación lenta, con riesgo de bajo rendimiento fuera de Sudamérica.",
    "Adaptación posible con acompañamiento y tiempo de aclimatación.",
    "Adaptación rápida en ligas sudamericanas y progresiva en Europa.",
    "Adaptación sólida a corto plazo incluso en contextos europeos exigentes.",
    "Adaptación inmediata: mentalidad profesional, sin barreras de idioma/cultura.",
];

/// Combines the three sub-scores into the 0-10 composite:
/// `((rendimiento + potencial + adaptabilidad) / 18) * 10`.
///
/// Inputs are clamped to [0,10] even though the form constrains them to 1-6,
/// so hand-edited rows cannot push the result off the scale. Unscored (zero)
/// inputs simply contribute nothing.
pub fn composite_score(performance: f64, potential: f64, adaptability: f64) -> f64 {
    let clamp = |v: f64| v.clamp(0.0, 10.0);
    let sum = clamp(performance) + clamp(potential) + clamp(adaptability);
    ((sum / 18.0) * 10.0).clamp(0.0, 10.0)
}

/// Fixed descriptive sentence for a sub-score, chosen by its rounded value.
/// Values that round outside 1-6 yield [`NOT_APPLICABLE`].
pub fn level_description(axis: Axis, value: f64) -> &'static str {
    let rounded = value.round() as i64;
    if !(1..=6).contains(&rounded) {
        return NOT_APPLICABLE;
    }
    let index = (rounded - 1) as usize;
    match axis {
        Axis::Performance => PERFORMANCE_LEVELS[index],
        Axis::Potential => POTENTIAL_LEVELS[index],
        Axis::Adaptability => ADAPTABILITY_LEVELS[index],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_stays_on_scale_for_every_valid_triple() {
        for p in 1..=6 {
            for q in 1..=6 {
                for a in 1..=6 {
                    let score = composite_score(p as f64, q as f64, a as f64);
                    assert!((0.0..=10.0).contains(&score), "({p},{q},{a}) -> {score}");
                    let expected = ((p + q + a) as f64 / 18.0) * 10.0;
                    assert!((score - expected).abs() < 1e-9);
                }
            }
        }
    }

    #[test]
    fn perfect_triple_scores_ten() {
        assert!((composite_score(6.0, 6.0, 6.0) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn minimum_triple_matches_formula() {
        let score = composite_score(1.0, 1.0, 1.0);
        assert!((score - 10.0 / 6.0).abs() < 1e-9);
    }

    #[test]
    fn inputs_are_clamped_before_summing() {
        // 3 * 10 (clamped from larger inputs) caps the composite at 10
        assert!((composite_score(50.0, 50.0, 50.0) - 10.0).abs() < 1e-9);
        assert!((composite_score(-5.0, 0.0, 0.0)).abs() < 1e-9);
    }

    #[test]
    fn descriptions_cover_the_whole_range() {
        for value in 1..=6 {
            for axis in [Axis::Performance, Axis::Potential, Axis::Adaptability] {
                let text = level_description(axis, value as f64);
                assert_ne!(text, NOT_APPLICABLE);
                assert!(!text.is_empty());
            }
        }
    }

    #[test]
    fn out_of_range_values_yield_the_marker() {
        for value in [0.0, 0.4, 6.6, 7.0, -1.0, 100.0] {
            assert_eq!(level_description(Axis::Performance, value), NOT_APPLICABLE);
        }
    }

    #[test]
    fn rounding_selects_the_nearest_sentence() {
        assert_eq!(
            level_description(Axis::Potential, 4.4),
            POTENTIAL_LEVELS[3]
        );
        assert_eq!(
            level_description(Axis::Adaptability, 5.6),
            ADAPTABILITY_LEVELS[5]
        );
    }
}
