use crate::model::angles::{CobbAngles, Region};
use crate::model::probabilities::RegionProbabilities;
use crate::model::profile::ClassificationProfile;
use crate::numeric::normal_cdf;

pub fn region_probabilities(
    angles: &CobbAngles,
    profile: &ClassificationProfile,
) -> [RegionProbabilities; 3] {
    let sd = &profile.measurement_error;
    let t = &profile.thresholds;
    let mut out = [RegionProbabilities::default(); 3];

    for region in Region::ALL {
        let coronal_below = normal_cdf(t.coronal_structural, angles.coronal[region], sd.coronal);
        let bend_below = normal_cdf(
            t.bend_structural,
            angles.coronal_bend[region],
            sd.coronal_bend,
        );
        let sagittal_below =
            normal_cdf(t.sagittal_structural, angles.sagittal[region], sd.sagittal);
        let coronal_above = 1.0 - coronal_below;

        // Non-structural when the bend and sagittal angles stay below their
        // thresholds, with the standing coronal angle on either side.
        let structural = 1.0
            - (coronal_below * bend_below * sagittal_below
                + coronal_above * bend_below * sagittal_below);

        out[region.index()] = RegionProbabilities {
            coronal_below,
            bend_below,
            sagittal_below,
            structural,
            non_structural: 1.0 - structural,
        };
    }

    out
}

/// `-`, `N`, `+` probabilities from the MT sagittal (T5-T12) angle.
pub fn sagittal_modifier(angles: &CobbAngles, profile: &ClassificationProfile) -> [f64; 3] {
    let kyphosis = angles.sagittal[Region::MainThoracic];
    let sd = profile.measurement_error.sagittal;
    let t = &profile.thresholds;

    let hypo = normal_cdf(t.kyphosis_low, kyphosis, sd);
    let hyper = 1.0 - normal_cdf(t.kyphosis_high, kyphosis, sd);
    [hypo, 1.0 - (hypo + hyper), hyper]
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_thresholds.rs"]
mod tests;
