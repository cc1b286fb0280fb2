use crate::model::angles::{AngleTriple, Region};
use crate::model::profile::ComparisonMethod;
use crate::numeric::{IntegrationGrid, Trapezoid, normal_cdf, normal_pdf};

/// Probability that the true angle behind measurement `a` exceeds the true
/// angle behind measurement `b`, both measured with deviation `sd`.
///
/// The overlap of the two densities on the standard grid is normalized by
/// twice the integral of `a`'s density, in both branches. This makes
/// `p(a, b) + p(b, a)` only approximately one near the grid edges.
pub fn probability_greater(a: f64, b: f64, sd: f64) -> f64 {
    probability_greater_on(IntegrationGrid::standard(), a, b, sd)
}

pub fn probability_greater_on(grid: &IntegrationGrid, a: f64, b: f64, sd: f64) -> f64 {
    if sd == 0.0 {
        return exact_order(a, b);
    }

    let mut overlap = Trapezoid::default();
    let mut area_a = Trapezoid::default();
    for &x in grid.points() {
        let pdf_a = normal_pdf(x, a, sd);
        let pdf_b = normal_pdf(x, b, sd);
        overlap.push(pdf_a.min(pdf_b));
        area_a.push(pdf_a);
    }

    let ratio = overlap.total() / (2.0 * area_a.total());
    if a > b { 1.0 - ratio } else { ratio }
}

/// Same overlap ratio evaluated over the whole real line:
/// `overlap / 2 = Phi(-|a - b| / (2 sd))`, which folds both branches into
/// `Phi((a - b) / (2 sd))`.
pub fn probability_greater_closed_form(a: f64, b: f64, sd: f64) -> f64 {
    if sd == 0.0 {
        return exact_order(a, b);
    }
    normal_cdf(a - b, 0.0, 2.0 * sd)
}

pub fn compare(method: ComparisonMethod, a: f64, b: f64, sd: f64) -> f64 {
    match method {
        ComparisonMethod::Grid => probability_greater(a, b, sd),
        ComparisonMethod::ClosedForm => probability_greater_closed_form(a, b, sd),
    }
}

fn exact_order(a: f64, b: f64) -> f64 {
    if a > b {
        1.0
    } else if a == b {
        0.5
    } else {
        0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MajorCurve {
    pub p_tl_major: f64,
    pub p_mt_major: f64,
}

/// TL/L is major only when it exceeds both the MT and the PT coronal angle.
pub fn major_curve(coronal: &AngleTriple, sd: f64, method: ComparisonMethod) -> MajorCurve {
    let tll = coronal[Region::ThoracolumbarLumbar];
    let over_mt = compare(method, tll, coronal[Region::MainThoracic], sd);
    let over_pt = compare(method, tll, coronal[Region::ProximalThoracic], sd);
    let p_tl_major = over_mt * over_pt;
    tracing::debug!(over_mt, over_pt, p_tl_major, "major curve location");
    MajorCurve {
        p_tl_major,
        p_mt_major: 1.0 - p_tl_major,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_compare.rs"]
mod tests;
