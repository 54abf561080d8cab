//! Gauss-Legendre quadrature rules on the reference interval and square.

use crate::error::{PlateError, PlateResult};

/// 1D Gauss-Legendre quadrature points and weights.
///
/// Returns (point, weight) pairs for integration on [-1, 1].
///
/// # Arguments
///
/// * `n` - Number of integration points (1, 2, 3, or 4)
pub fn gauss_1d(n: usize) -> PlateResult<Vec<(f64, f64)>> {
    let rule = match n {
        1 => vec![(0.0, 2.0)],
        2 => {
            let p = 1.0 / 3.0_f64.sqrt();
            vec![(-p, 1.0), (p, 1.0)]
        }
        3 => {
            let p = (3.0 / 5.0_f64).sqrt();
            vec![(-p, 5.0 / 9.0), (0.0, 8.0 / 9.0), (p, 5.0 / 9.0)]
        }
        4 => {
            // Points: ±√((3 ∓ 2√(6/5))/7)
            let sqrt_6_5 = (6.0 / 5.0_f64).sqrt();
            let p1 = ((3.0 - 2.0 * sqrt_6_5) / 7.0).sqrt();
            let p2 = ((3.0 + 2.0 * sqrt_6_5) / 7.0).sqrt();
            // Weights: (18 ± √30) / 36
            let sqrt_30 = 30.0_f64.sqrt();
            let w1 = (18.0 + sqrt_30) / 36.0;
            let w2 = (18.0 - sqrt_30) / 36.0;
            vec![(-p2, w2), (-p1, w1), (p1, w1), (p2, w2)]
        }
        _ => {
            return Err(PlateError::Configuration(format!(
                "gauss_1d: n must be 1, 2, 3, or 4, got {n}"
            )))
        }
    };
    Ok(rule)
}

/// Tensor-product rule on the reference square [-1, 1]².
///
/// Returns `n*n` pairs of natural coordinates `[ξ, η]` and weight,
/// with ξ running fastest.
pub fn gauss_quad(n: usize) -> PlateResult<Vec<([f64; 2], f64)>> {
    let rule_1d = gauss_1d(n)?;
    let mut points = Vec::with_capacity(n * n);
    for &(eta, w_eta) in &rule_1d {
        for &(xi, w_xi) in &rule_1d {
            points.push(([xi, eta], w_xi * w_eta));
        }
    }
    Ok(points)
}
