use serde::Serialize;

use crate::model::categories::{CurveType, SagittalModifier};

/// Threshold-crossing and structural probabilities for one region.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct RegionProbabilities {
    pub coronal_below: f64,
    pub bend_below: f64,
    pub sagittal_below: f64,
    pub structural: f64,
    pub non_structural: f64,
}

/// Curve type and sagittal modifier probabilities for one case.
///
/// `curve_type` is indexed by Lenke type minus one and is not renormalized;
/// its entries need not sum to one. `sagittal_modifier` is `-`, `N`, `+`
/// and sums to one by construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LenkeProbabilities {
    pub curve_type: [f64; 6],
    pub sagittal_modifier: [f64; 3],
    pub p_tl_major: f64,
    pub p_mt_major: f64,
    pub regions: [RegionProbabilities; 3],
}

impl LenkeProbabilities {
    pub fn most_likely_curve_type(&self) -> CurveType {
        CurveType::ALL[argmax(&self.curve_type)]
    }

    pub fn most_likely_modifier(&self) -> SagittalModifier {
        SagittalModifier::ALL[argmax(&self.sagittal_modifier)]
    }

    /// Most likely Lenke label without the lumbar modifier, e.g. `2N`.
    pub fn label(&self) -> String {
        format!(
            "{}{}",
            self.most_likely_curve_type().number(),
            self.most_likely_modifier().symbol()
        )
    }

    pub fn curve_type_mass(&self) -> f64 {
        self.curve_type.iter().sum()
    }

    pub fn curve_type_probability(&self, curve_type: CurveType) -> f64 {
        self.curve_type[curve_type.number() as usize - 1]
    }

    /// Largest and second-largest curve type probabilities.
    pub fn top_two_curve_types(&self) -> (f64, f64) {
        let mut first = f64::NEG_INFINITY;
        let mut second = f64::NEG_INFINITY;
        for &p in &self.curve_type {
            if p > first {
                second = first;
                first = p;
            } else if p > second {
                second = p;
            }
        }
        (first, second)
    }
}

// Ties resolve to the lower index.
fn argmax(values: &[f64]) -> usize {
    let mut best = 0usize;
    for (idx, &v) in values.iter().enumerate().skip(1) {
        if v > values[best] {
            best = idx;
        }
    }
    best
}
