//! Differencing and lag-polynomial utilities
//!
//! Lag polynomials are stored as coefficient vectors `c` where
//! `c(B) = c[0] + c[1] B + c[2] B^2 + ...`.

/// Compute first-order differences `order` times
pub fn difference(data: &[f64], order: usize) -> Vec<f64> {
    let mut result = data.to_vec();
    for _ in 0..order {
        if result.len() <= 1 {
            return Vec::new();
        }
        result = result.windows(2).map(|w| w[1] - w[0]).collect();
    }
    result
}

/// Compute seasonal differences at lag `period`, `order` times
pub fn seasonal_difference(data: &[f64], period: usize, order: usize) -> Vec<f64> {
    let mut result = data.to_vec();
    for _ in 0..order {
        if period == 0 || result.len() <= period {
            return Vec::new();
        }
        result = result
            .iter()
            .skip(period)
            .zip(result.iter())
            .map(|(curr, prev)| curr - prev)
            .collect();
    }
    result
}

/// Multiply two lag polynomials
pub fn poly_mul(a: &[f64], b: &[f64]) -> Vec<f64> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let mut out = vec![0.0; a.len() + b.len() - 1];
    for (i, &x) in a.iter().enumerate() {
        if x == 0.0 {
            continue;
        }
        for (j, &y) in b.iter().enumerate() {
            out[i + j] += x * y;
        }
    }
    out
}

/// Autoregressive polynomial `1 - c1 B^step - c2 B^(2 step) - ...`
pub fn ar_polynomial(coeffs: &[f64], step: usize) -> Vec<f64> {
    lag_polynomial(coeffs, step, -1.0)
}

/// Moving-average polynomial `1 + c1 B^step + c2 B^(2 step) + ...`
pub fn ma_polynomial(coeffs: &[f64], step: usize) -> Vec<f64> {
    lag_polynomial(coeffs, step, 1.0)
}

fn lag_polynomial(coeffs: &[f64], step: usize, sign: f64) -> Vec<f64> {
    if coeffs.is_empty() || step == 0 {
        return vec![1.0];
    }

    let mut poly = vec![0.0; coeffs.len() * step + 1];
    poly[0] = 1.0;
    for (k, &c) in coeffs.iter().enumerate() {
        poly[(k + 1) * step] = sign * c;
    }
    poly
}

/// Differencing operator `(1 - B)^d (1 - B^s)^D`
pub fn differencing_polynomial(d: usize, seasonal_d: usize, period: usize) -> Vec<f64> {
    let mut poly = vec![1.0];
    for _ in 0..d {
        poly = poly_mul(&poly, &[1.0, -1.0]);
    }
    if period > 0 && seasonal_d > 0 {
        let mut seasonal = vec![0.0; period + 1];
        seasonal[0] = 1.0;
        seasonal[period] = -1.0;
        for _ in 0..seasonal_d {
            poly = poly_mul(&poly, &seasonal);
        }
    }
    poly
}

/// Largest partial autocorrelation magnitude [`constrain_stationary`] yields
pub const MAX_PARTIAL_AUTOCORRELATION: f64 = 0.9999;

/// Map unconstrained reals onto the coefficients of a stationary AR polynomial
///
/// Each value becomes a partial autocorrelation `u / sqrt(1 + u^2)`, capped at
/// [`MAX_PARTIAL_AUTOCORRELATION`], and the Durbin-Levinson recursion turns
/// those into coefficients `c` with `1 - c1 B - c2 B^2 - ...` having all roots
/// outside the unit circle. Negating the result gives an invertible MA
/// polynomial `1 + c1 B + ...`.
pub fn constrain_stationary(unconstrained: &[f64]) -> Vec<f64> {
    let mut coeffs: Vec<f64> = Vec::with_capacity(unconstrained.len());
    for &u in unconstrained {
        let partial = (u / (1.0 + u * u).sqrt())
            .clamp(-MAX_PARTIAL_AUTOCORRELATION, MAX_PARTIAL_AUTOCORRELATION);
        let k = coeffs.len();
        let previous = coeffs.clone();
        for i in 0..k {
            coeffs[i] = previous[i] - partial * previous[k - 1 - i];
        }
        coeffs.push(partial);
    }
    coeffs
}

/// Inverse of [`constrain_stationary`]
///
/// Coefficients outside the stationary region are pulled onto its capped
/// boundary instead of failing.
pub fn unconstrain_stationary(coeffs: &[f64]) -> Vec<f64> {
    let mut current = coeffs.to_vec();
    let mut partials = vec![0.0; coeffs.len()];
    for k in (0..coeffs.len()).rev() {
        let partial = current[k].clamp(-MAX_PARTIAL_AUTOCORRELATION, MAX_PARTIAL_AUTOCORRELATION);
        partials[k] = partial;
        let scale = 1.0 - partial * partial;
        current = (0..k)
            .map(|i| (current[i] + partial * current[k - 1 - i]) / scale)
            .collect();
    }
    partials
        .iter()
        .map(|r| r / (1.0 - r * r).sqrt())
        .collect()
}

/// Estimate AR coefficients with the Yule-Walker equations
///
/// Solved by Levinson-Durbin recursion on the sample autocovariances. The
/// result describes a stationary process; a constant or too-short series
/// yields zeros.
pub fn yule_walker(data: &[f64], p: usize) -> Vec<f64> {
    let n = data.len();
    if p == 0 {
        return Vec::new();
    }
    if n <= p {
        return vec![0.0; p];
    }

    let mean = data.iter().sum::<f64>() / n as f64;
    let centered: Vec<f64> = data.iter().map(|x| x - mean).collect();

    let autocov: Vec<f64> = (0..=p)
        .map(|k| {
            (k..n).map(|i| centered[i] * centered[i - k]).sum::<f64>() / n as f64
        })
        .collect();

    let mut coeffs = vec![0.0; p];
    if autocov[0].abs() < 1e-10 {
        return coeffs;
    }

    let mut error = autocov[0];
    for k in 0..p {
        let mut acc = autocov[k + 1];
        for j in 0..k {
            acc -= coeffs[j] * autocov[k - j];
        }
        let reflection = acc / error;

        let previous = coeffs.clone();
        coeffs[k] = reflection;
        for j in 0..k {
            coeffs[j] = previous[j] - reflection * previous[k - 1 - j];
        }

        error *= 1.0 - reflection * reflection;
        if error.abs() < 1e-10 {
            break;
        }
    }

    coeffs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difference() {
        let data = vec![1.0, 4.0, 9.0, 16.0];
        assert_eq!(difference(&data, 1), vec![3.0, 5.0, 7.0]);
        assert_eq!(difference(&data, 2), vec![2.0, 2.0]);
        assert!(difference(&[1.0], 1).is_empty());
    }

    #[test]
    fn test_seasonal_difference() {
        let data = vec![1.0, 2.0, 3.0, 11.0, 12.0, 13.0];
        assert_eq!(seasonal_difference(&data, 3, 1), vec![10.0, 10.0, 10.0]);
        assert!(seasonal_difference(&data, 3, 2).is_empty());
        assert_eq!(seasonal_difference(&data, 0, 0), data);
    }

    #[test]
    fn test_poly_mul() {
        // (1 - B)(1 + B) = 1 - B^2
        assert_eq!(poly_mul(&[1.0, -1.0], &[1.0, 1.0]), vec![1.0, 0.0, -1.0]);
    }

    #[test]
    fn test_lag_polynomials() {
        assert_eq!(ar_polynomial(&[0.5], 1), vec![1.0, -0.5]);
        assert_eq!(ma_polynomial(&[0.3], 2), vec![1.0, 0.0, 0.3]);
        assert_eq!(ar_polynomial(&[], 12), vec![1.0]);
    }

    #[test]
    fn test_differencing_polynomial_matches_explicit_differencing() {
        let data: Vec<f64> = (0..30).map(|i| ((i * i) % 17) as f64 + i as f64).collect();
        let poly = differencing_polynomial(1, 1, 4);
        assert_eq!(differencing_polynomial(1, 0, usize::MAX), vec![1.0, -1.0]);

        let explicit = seasonal_difference(&difference(&data, 1), 4, 1);
        let lag = poly.len() - 1;
        let via_poly: Vec<f64> = (lag..data.len())
            .map(|t| poly.iter().enumerate().map(|(k, c)| c * data[t - k]).sum())
            .collect();

        assert_eq!(explicit.len(), via_poly.len());
        for (a, b) in explicit.iter().zip(via_poly.iter()) {
            assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn test_yule_walker_recovers_ar1() {
        // Deterministic AR(1) with phi = 0.7 driven by a bounded pseudo-random sequence
        let mut state: u64 = 42;
        let mut x = 0.0;
        let mut data = Vec::with_capacity(500);
        for _ in 0..500 {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let noise = ((state >> 33) as f64 / (1u64 << 31) as f64) - 0.5;
            x = 0.7 * x + noise;
            data.push(x);
        }

        let coeffs = yule_walker(&data, 1);
        assert!((coeffs[0] - 0.7).abs() < 0.1, "phi = {}", coeffs[0]);
    }

    #[test]
    fn test_constrain_stationary_single_coefficient() {
        let coeffs = constrain_stationary(&[1.0]);
        assert!((coeffs[0] - 1.0 / 2f64.sqrt()).abs() < 1e-12);
        assert_eq!(constrain_stationary(&[0.0, 0.0]), vec![0.0, 0.0]);

        // Huge values saturate inside the unit interval
        let saturated = constrain_stationary(&[1e9, -1e9]);
        assert!(saturated.iter().all(|c| c.is_finite()));
        assert!(constrain_stationary(&[-1e9])[0] >= -MAX_PARTIAL_AUTOCORRELATION);
    }

    #[test]
    fn test_constrained_ar2_is_stationary() {
        for u in [[-5.0, 3.0], [0.3, -0.8], [4.0, 4.0], [-2.0, -9.0]] {
            let c = constrain_stationary(&u);
            // AR(2) stationarity triangle
            assert!(c[1].abs() < 1.0, "{:?}", c);
            assert!(c[0] + c[1] < 1.0, "{:?}", c);
            assert!(c[1] - c[0] < 1.0, "{:?}", c);
        }
    }

    #[test]
    fn test_unconstrain_inverts_constrain() {
        let u = vec![0.4, -1.3, 2.2];
        let back = unconstrain_stationary(&constrain_stationary(&u));
        for (a, b) in u.iter().zip(back.iter()) {
            assert!((a - b).abs() < 1e-9, "{} vs {}", a, b);
        }

        // Yule-Walker output of a stationary process maps back unchanged
        let phi = vec![0.5, 0.2];
        let round = constrain_stationary(&unconstrain_stationary(&phi));
        assert!((round[0] - 0.5).abs() < 1e-12);
        assert!((round[1] - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_unconstrain_pulls_explosive_coefficients_inside() {
        let u = unconstrain_stationary(&[1.5]);
        assert!(u[0].is_finite());
        assert!(constrain_stationary(&u)[0] <= MAX_PARTIAL_AUTOCORRELATION);
    }

    #[test]
    fn test_yule_walker_constant_series() {
        assert_eq!(yule_walker(&[5.0; 10], 2), vec![0.0, 0.0]);
        assert!(yule_walker(&[1.0, 2.0], 0).is_empty());
    }
}
