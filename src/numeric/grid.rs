use std::sync::OnceLock;

/// Uniform evaluation grid for numerical integration of angle densities.
///
/// Points are `start + i * step` for `i` in `0..ceil((end - start) / step)`,
/// so `end` itself is excluded.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegrationGrid {
    step: f64,
    points: Vec<f64>,
}

impl IntegrationGrid {
    pub const DEFAULT_START: f64 = 0.0;
    pub const DEFAULT_END: f64 = 180.0;
    pub const DEFAULT_STEP: f64 = 0.01;

    pub fn new(start: f64, end: f64, step: f64) -> Self {
        let span = (end - start) / step;
        let n = if span.is_finite() && span > 0.0 {
            span.ceil() as usize
        } else {
            0
        };
        let mut points = Vec::with_capacity(n);
        for i in 0..n {
            points.push(start + i as f64 * step);
        }
        Self { step, points }
    }

    /// The shared [0, 180) degree grid at 0.01 degree resolution.
    pub fn standard() -> &'static IntegrationGrid {
        static GRID: OnceLock<IntegrationGrid> = OnceLock::new();
        GRID.get_or_init(|| {
            IntegrationGrid::new(Self::DEFAULT_START, Self::DEFAULT_END, Self::DEFAULT_STEP)
        })
    }

    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn step(&self) -> f64 {
        self.step
    }
}

/// Streaming trapezoidal rule with unit spacing.
///
/// Callers only ever take ratios of two integrals over the same grid,
/// where the spacing cancels.
#[derive(Debug, Clone, Copy, Default)]
pub struct Trapezoid {
    prev: Option<f64>,
    sum: f64,
}

impl Trapezoid {
    #[inline]
    pub fn push(&mut self, value: f64) {
        if let Some(prev) = self.prev {
            self.sum += 0.5 * (prev + value);
        }
        self.prev = Some(value);
    }

    pub fn total(&self) -> f64 {
        self.sum
    }
}

pub fn trapezoid(values: &[f64]) -> f64 {
    let mut acc = Trapezoid::default();
    for &v in values {
        acc.push(v);
    }
    acc.total()
}

#[cfg(test)]
#[path = "../../tests/src_inline/numeric/grid.rs"]
mod tests;
