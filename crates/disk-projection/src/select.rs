//! Element-wise "where condition, override" passes over whole grids.
//!
//! Each pass visits every cell independently, so passes run in parallel over
//! cells while the order of passes stays fixed. The same rules are applied
//! sequentially to single points so grid and point evaluation agree exactly.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use rayon::prelude::*;
use tracing::trace;

/// How a matching cell is rewritten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Override {
    /// Add a constant to the current value.
    Add(f64),
    /// Replace the current value.
    Set(f64),
}

impl Override {
    #[inline]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Override::Add(delta) => value + delta,
            Override::Set(v) => v,
        }
    }
}

/// A conditional rewrite of the azimuth, keyed on `(xg, yg, psig)`.
#[derive(Clone, Copy)]
pub struct AzimuthRule {
    pub name: &'static str,
    pub applies: fn(f64, f64, f64) -> bool,
    pub action: Override,
}

/// Quadrant corrections for `psig = atan(yg / xg)`, in application order.
///
/// The on-axis rules run after the ratio-based ones so they overwrite the
/// NaN/±π/2 produced by dividing by `xg == 0`. The last rule folds an angle
/// that rounded up to exactly 2π back to 0. At the disk center (`xg == yg ==
/// 0`) no rule fires and the azimuth stays NaN.
pub const AZIMUTH_RULES: [AzimuthRule; 5] = [
    AzimuthRule {
        name: "quadrants II/III",
        applies: |xg, _, _| xg < 0.0,
        action: Override::Add(PI),
    },
    AzimuthRule {
        name: "quadrant IV",
        applies: |xg, yg, _| xg > 0.0 && yg < 0.0,
        action: Override::Add(TAU),
    },
    AzimuthRule {
        name: "positive y axis",
        applies: |xg, yg, _| xg == 0.0 && yg > 0.0,
        action: Override::Set(FRAC_PI_2),
    },
    AzimuthRule {
        name: "negative y axis",
        applies: |xg, yg, _| xg == 0.0 && yg < 0.0,
        action: Override::Set(3.0 * FRAC_PI_2),
    },
    AzimuthRule {
        name: "full turn",
        applies: |_, _, psig| psig >= TAU,
        action: Override::Add(-TAU),
    },
];

/// Raw azimuth before quadrant correction.
#[inline]
pub fn raw_azimuth(xg: f64, yg: f64) -> f64 {
    (yg / xg).atan()
}

/// Azimuth of a single disk-plane point in `[0, 2π)`, NaN at the origin.
pub fn azimuth(xg: f64, yg: f64) -> f64 {
    AZIMUTH_RULES
        .iter()
        .fold(raw_azimuth(xg, yg), |psig, rule| {
            if (rule.applies)(xg, yg, psig) {
                rule.action.apply(psig)
            } else {
                psig
            }
        })
}

/// Apply one azimuth rule to every cell of `psig`, returning how many cells
/// it rewrote.
pub fn apply_azimuth_rule(
    psig: &mut [f64],
    xg: &[f64],
    yg: &[f64],
    rule: &AzimuthRule,
) -> usize {
    let rewritten = psig
        .par_iter_mut()
        .zip(xg.par_iter().zip(yg.par_iter()))
        .map(|(p, (&x, &y))| {
            if (rule.applies)(x, y, *p) {
                *p = rule.action.apply(*p);
                1
            } else {
                0
            }
        })
        .sum();
    trace!(rule = rule.name, rewritten, "azimuth rule applied");
    rewritten
}

/// Apply every azimuth rule in order.
pub fn correct_azimuths(psig: &mut [f64], xg: &[f64], yg: &[f64]) {
    for rule in &AZIMUTH_RULES {
        apply_azimuth_rule(psig, xg, yg, rule);
    }
}

/// Cells whose value exceeds `limit`. NaN never exceeds.
pub fn mask_above(values: &[f64], limit: f64) -> Vec<bool> {
    values.par_iter().map(|&v| v > limit).collect()
}

/// Overwrite masked cells with NaN.
pub fn fill_nan_where(target: &mut [f64], mask: &[bool]) {
    target
        .par_iter_mut()
        .zip(mask.par_iter())
        .for_each(|(v, &masked)| {
            if masked {
                *v = f64::NAN;
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_azimuth_quadrants() {
        assert!((azimuth(1.0, 1.0) - PI / 4.0).abs() < 1e-12);
        assert!((azimuth(-1.0, 1.0) - 3.0 * PI / 4.0).abs() < 1e-12);
        assert!((azimuth(-1.0, -1.0) - 5.0 * PI / 4.0).abs() < 1e-12);
        assert!((azimuth(1.0, -1.0) - 7.0 * PI / 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_azimuth_on_axes() {
        assert_eq!(azimuth(1.0, 0.0), 0.0);
        assert_eq!(azimuth(-1.0, 0.0), PI);
        assert_eq!(azimuth(0.0, 2.0), FRAC_PI_2);
        assert_eq!(azimuth(0.0, -2.0), 3.0 * FRAC_PI_2);
        assert_eq!(azimuth(-0.0, 2.0), FRAC_PI_2);
    }

    #[test]
    fn test_azimuth_undefined_at_origin() {
        assert!(azimuth(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_azimuth_wraps_rounded_full_turn() {
        // atan(-1e-20) + 2π rounds to exactly 2π
        let psig = azimuth(1.0, -1e-20);
        assert_eq!(psig, 0.0);
    }

    #[test]
    fn test_grid_rules_match_point_rules() {
        let xg = [1.0, -1.0, -1.0, 1.0, 0.0, 0.0, 0.0, 1.0, -3.0];
        let yg = [1.0, 1.0, -1.0, -1.0, 2.0, -2.0, 0.0, -1e-20, 0.0];
        let mut psig: Vec<f64> = xg
            .iter()
            .zip(&yg)
            .map(|(&x, &y)| raw_azimuth(x, y))
            .collect();
        correct_azimuths(&mut psig, &xg, &yg);

        for k in 0..xg.len() {
            let expected = azimuth(xg[k], yg[k]);
            if expected.is_nan() {
                assert!(psig[k].is_nan(), "cell {} should be NaN", k);
            } else {
                assert_eq!(psig[k], expected, "cell {}", k);
            }
        }
    }

    #[test]
    fn test_rule_rewrite_counts() {
        let xg = [1.0, -1.0, -2.0, 0.0, 0.0, 0.0];
        let yg = [1.0, 1.0, -1.0, 3.0, -3.0, 0.0];
        let mut psig: Vec<f64> = xg
            .iter()
            .zip(&yg)
            .map(|(&x, &y)| raw_azimuth(x, y))
            .collect();

        let counts: Vec<(&str, usize)> = AZIMUTH_RULES
            .iter()
            .map(|rule| (rule.name, apply_azimuth_rule(&mut psig, &xg, &yg, rule)))
            .collect();

        assert_eq!(
            counts,
            vec![
                ("quadrants II/III", 2),
                ("quadrant IV", 0),
                ("positive y axis", 1),
                ("negative y axis", 1),
                ("full turn", 0),
            ]
        );
        assert!(psig[5].is_nan());
    }

    #[test]
    fn test_mask_and_fill() {
        let rg = [0.5, 2.0, f64::NAN, 1.0];
        let mask = mask_above(&rg, 1.0);
        assert_eq!(mask, vec![false, true, false, false]);

        let mut xg = [1.0, 2.0, 3.0, 4.0];
        fill_nan_where(&mut xg, &mask);
        assert_eq!(xg[0], 1.0);
        assert!(xg[1].is_nan());
        assert_eq!(xg[3], 4.0);
    }

    #[test]
    fn test_override_apply() {
        assert_eq!(Override::Add(2.0).apply(1.0), 3.0);
        assert_eq!(Override::Set(5.0).apply(f64::NAN), 5.0);
    }
}
