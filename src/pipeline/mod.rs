pub mod stage1_validate;
pub mod stage2_compare;
pub mod stage3_thresholds;
pub mod stage4_classify;
pub mod stage5_report;

use crate::model::angles::{AngleFamily, CobbAngles};
use crate::model::probabilities::LenkeProbabilities;
use crate::model::profile::ClassificationProfile;
use stage1_validate::{ClassifyError, validate_angles, validate_measurement_error, validate_triple};
use stage4_classify::{Classification, classify_case, run_classification};

/// Validated probabilistic Lenke classification with one coronal and one
/// sagittal standard deviation, the bend films sharing the coronal one.
pub fn classify(
    coronal: &[f64],
    coronal_bend: &[f64],
    sagittal: &[f64],
    coronal_sd: f64,
    sagittal_sd: f64,
) -> Result<LenkeProbabilities, ClassifyError> {
    let angles = CobbAngles {
        coronal: validate_triple(AngleFamily::Coronal, coronal)?,
        coronal_bend: validate_triple(AngleFamily::CoronalBend, coronal_bend)?,
        sagittal: validate_triple(AngleFamily::Sagittal, sagittal)?,
    };
    let profile = ClassificationProfile::with_measurement_error(coronal_sd, sagittal_sd);
    validate_measurement_error(&profile.measurement_error)?;
    Ok(run_classification(&angles, &profile))
}

pub fn classify_with_profile(
    angles: &CobbAngles,
    profile: &ClassificationProfile,
) -> Result<Classification, ClassifyError> {
    validate_angles(angles)?;
    validate_measurement_error(&profile.measurement_error)?;
    Ok(classify_case(angles, profile))
}

pub fn classify_batch(
    cases: &[CobbAngles],
    profile: &ClassificationProfile,
) -> Result<Vec<Classification>, ClassifyError> {
    validate_measurement_error(&profile.measurement_error)?;
    for (index, angles) in cases.iter().enumerate() {
        validate_angles(angles).map_err(|source| ClassifyError::Case {
            index,
            source: Box::new(source),
        })?;
    }
    let out = stage4_classify::run_stage4(&stage4_classify::Stage4Inputs { cases, profile });
    tracing::debug!(n_cases = out.len(), "batch classified");
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
