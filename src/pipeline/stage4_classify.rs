use serde::Serialize;

use crate::model::angles::{CobbAngles, Region};
use crate::model::flags::{Flag, flag_order};
use crate::model::probabilities::{LenkeProbabilities, RegionProbabilities};
use crate::model::profile::ClassificationProfile;
use crate::pipeline::stage2_compare::{MajorCurve, major_curve};
use crate::pipeline::stage3_thresholds::{region_probabilities, sagittal_modifier};

#[derive(Debug, Clone, Serialize)]
pub struct Classification {
    pub probabilities: LenkeProbabilities,
    pub flags: Vec<Flag>,
}

#[derive(Debug, Clone)]
pub struct Stage4Inputs<'a> {
    pub cases: &'a [CobbAngles],
    pub profile: &'a ClassificationProfile,
}

pub fn run_stage4(inputs: &Stage4Inputs<'_>) -> Vec<Classification> {
    let mut out = Vec::with_capacity(inputs.cases.len());
    for angles in inputs.cases {
        out.push(classify_case(angles, inputs.profile));
    }
    out
}

pub fn classify_case(angles: &CobbAngles, profile: &ClassificationProfile) -> Classification {
    let probabilities = run_classification(angles, profile);
    let flags = collect_flags(&probabilities, profile);
    Classification {
        probabilities,
        flags,
    }
}

/// Raw probabilistic Lenke model. Inputs are not validated.
pub fn run_classification(
    angles: &CobbAngles,
    profile: &ClassificationProfile,
) -> LenkeProbabilities {
    let major = major_curve(
        &angles.coronal,
        profile.measurement_error.coronal,
        profile.comparison,
    );
    let regions = region_probabilities(angles, profile);
    let curve_type = curve_type_probabilities(&major, &regions);
    let sagittal_modifier = sagittal_modifier(angles, profile);

    tracing::debug!(?curve_type, ?sagittal_modifier, "case classified");

    LenkeProbabilities {
        curve_type,
        sagittal_modifier,
        p_tl_major: major.p_tl_major,
        p_mt_major: major.p_mt_major,
        regions,
    }
}

fn curve_type_probabilities(major: &MajorCurve, regions: &[RegionProbabilities; 3]) -> [f64; 6] {
    let s_pt = regions[Region::ProximalThoracic.index()].structural;
    let s_mt = regions[Region::MainThoracic.index()].structural;
    let s_tl = regions[Region::ThoracolumbarLumbar.index()].structural;
    let ns_pt = regions[Region::ProximalThoracic.index()].non_structural;
    let ns_mt = regions[Region::MainThoracic.index()].non_structural;
    let ns_tl = regions[Region::ThoracolumbarLumbar.index()].non_structural;
    let mt = major.p_mt_major;
    let tl = major.p_tl_major;

    [
        ns_pt * mt * ns_tl,
        s_pt * mt * ns_tl,
        ns_pt * mt * s_tl,
        s_pt * mt * s_tl + s_pt * s_mt * tl,
        ns_pt * ns_mt * tl,
        ns_pt * s_mt * tl,
    ]
}

fn collect_flags(p: &LenkeProbabilities, profile: &ClassificationProfile) -> Vec<Flag> {
    let mut flags = Vec::new();

    let (first, second) = p.top_two_curve_types();
    if first - second < profile.ambiguity_margin {
        flags.push(Flag::AmbiguousCurveType);
    }
    if first < profile.confidence_low {
        flags.push(Flag::LowCurveTypeConfidence);
    }
    if (p.curve_type_mass() - 1.0).abs() > profile.mass_tolerance {
        flags.push(Flag::CurveTypeMassDeficit);
    }
    if p.p_tl_major > profile.borderline_low && p.p_tl_major < profile.borderline_high {
        flags.push(Flag::BorderlineMajorCurve);
    }
    let stm_max = p
        .sagittal_modifier
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    if stm_max < profile.confidence_low {
        flags.push(Flag::BorderlineKyphosis);
    }
    if profile.measurement_error.any_zero() {
        flags.push(Flag::ZeroMeasurementError);
    }

    // stable ordering
    let mut ordered = Vec::new();
    for flag in flag_order() {
        if flags.contains(flag) {
            ordered.push(*flag);
        }
    }
    ordered
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_classify.rs"]
mod tests;
