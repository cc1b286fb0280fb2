use std::f64::consts::{FRAC_2_SQRT_PI, SQRT_2};

pub mod grid;

pub use grid::{IntegrationGrid, Trapezoid, trapezoid};

/// 1 / sqrt(2 * pi)
const INV_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Below this magnitude erf is summed from its Maclaurin series,
/// above it erfc comes from the Laplace continued fraction.
const SERIES_LIMIT: f64 = 3.0;
const SERIES_MAX_TERMS: usize = 128;
const CONTINUED_FRACTION_TERMS: usize = 80;

/// Gaussian probability density at `x` for mean `mean` and standard deviation `sd`.
#[inline]
pub fn normal_pdf(x: f64, mean: f64, sd: f64) -> f64 {
    let z = (x - mean) / sd;
    (-0.5 * z * z).exp() * INV_SQRT_2PI / sd
}

/// Gaussian cumulative distribution `P(X <= x)` for `X ~ N(mean, sd^2)`.
///
/// `sd == 0` is the deterministic limit: 1 below the threshold, 0 above it
/// and 0.5 exactly at it. Negative deviations are not rejected here.
#[inline]
pub fn normal_cdf(x: f64, mean: f64, sd: f64) -> f64 {
    if sd == 0.0 {
        return step_cdf(x, mean);
    }
    let z = (x - mean) / sd;
    0.5 * erfc(-z / SQRT_2)
}

#[inline]
fn step_cdf(x: f64, mean: f64) -> f64 {
    if mean < x {
        1.0
    } else if mean > x {
        0.0
    } else {
        0.5
    }
}

pub fn erf(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    let ax = x.abs();
    if ax < SERIES_LIMIT {
        return erf_series(x);
    }
    let v = 1.0 - erfc_continued_fraction(ax);
    if x < 0.0 { -v } else { v }
}

pub fn erfc(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x.abs() < SERIES_LIMIT {
        1.0 - erf_series(x)
    } else if x > 0.0 {
        erfc_continued_fraction(x)
    } else {
        2.0 - erfc_continued_fraction(-x)
    }
}

fn erf_series(x: f64) -> f64 {
    let x2 = x * x;
    let mut term = x;
    let mut sum = x;
    for n in 1..SERIES_MAX_TERMS {
        term *= -x2 / n as f64;
        let contrib = term / (2 * n + 1) as f64;
        sum += contrib;
        if contrib.abs() <= f64::EPSILON * sum.abs() {
            break;
        }
    }
    sum * FRAC_2_SQRT_PI
}

// x >= SERIES_LIMIT
fn erfc_continued_fraction(x: f64) -> f64 {
    let mut f = x;
    for k in (1..=CONTINUED_FRACTION_TERMS).rev() {
        f = x + (k as f64 * 0.5) / f;
    }
    (-x * x).exp() * (0.5 * FRAC_2_SQRT_PI) / f
}

#[cfg(test)]
#[path = "../../tests/src_inline/numeric/mod.rs"]
mod tests;
