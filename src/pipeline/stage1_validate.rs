use thiserror::Error;

use crate::model::angles::{AngleFamily, AngleTriple, CobbAngles, Region};
use crate::model::profile::MeasurementError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClassifyError {
    #[error("{family} angles: expected 3 values (PT, MT, TL/L), got {len}")]
    TripleLength { family: AngleFamily, len: usize },
    #[error("{family} angle for region {region} is not finite: {value}")]
    NonFiniteAngle {
        family: AngleFamily,
        region: &'static str,
        value: f64,
    },
    #[error("{family} standard deviation must be finite and non-negative, got {value}")]
    InvalidStandardDeviation { family: AngleFamily, value: f64 },
    /// A case of a batch failed validation; `index` is its position in the batch.
    #[error("case {index}: {source}")]
    Case {
        index: usize,
        source: Box<ClassifyError>,
    },
}

pub fn validate_triple(family: AngleFamily, values: &[f64]) -> Result<AngleTriple, ClassifyError> {
    let array: [f64; 3] = values
        .try_into()
        .map_err(|_| ClassifyError::TripleLength {
            family,
            len: values.len(),
        })?;
    let triple = AngleTriple(array);
    check_finite(family, &triple)?;
    Ok(triple)
}

pub fn validate_angles(angles: &CobbAngles) -> Result<(), ClassifyError> {
    for family in [
        AngleFamily::Coronal,
        AngleFamily::CoronalBend,
        AngleFamily::Sagittal,
    ] {
        check_finite(family, angles.family(family))?;
    }
    Ok(())
}

/// Zero is accepted and selects the exact-measurement path.
pub fn validate_measurement_error(sd: &MeasurementError) -> Result<(), ClassifyError> {
    for family in [
        AngleFamily::Coronal,
        AngleFamily::CoronalBend,
        AngleFamily::Sagittal,
    ] {
        let value = sd.get(family);
        if !value.is_finite() || value < 0.0 {
            return Err(ClassifyError::InvalidStandardDeviation { family, value });
        }
    }
    Ok(())
}

fn check_finite(family: AngleFamily, triple: &AngleTriple) -> Result<(), ClassifyError> {
    for region in Region::ALL {
        let value = triple[region];
        if !value.is_finite() {
            return Err(ClassifyError::NonFiniteAngle {
                family,
                region: region.short_name(),
                value,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_validate.rs"]
mod tests;
