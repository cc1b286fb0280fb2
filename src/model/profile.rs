use serde::{Deserialize, Serialize};

use crate::model::angles::AngleFamily;

/// Interobserver standard deviation (degrees) per angle family.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MeasurementError {
    pub coronal: f64,
    pub coronal_bend: f64,
    pub sagittal: f64,
}

impl MeasurementError {
    /// Bend films share the standing coronal deviation.
    pub fn shared(coronal_sd: f64, sagittal_sd: f64) -> Self {
        Self {
            coronal: coronal_sd,
            coronal_bend: coronal_sd,
            sagittal: sagittal_sd,
        }
    }

    pub fn get(&self, family: AngleFamily) -> f64 {
        match family {
            AngleFamily::Coronal => self.coronal,
            AngleFamily::CoronalBend => self.coronal_bend,
            AngleFamily::Sagittal => self.sagittal,
        }
    }

    pub fn any_zero(&self) -> bool {
        self.coronal == 0.0 || self.coronal_bend == 0.0 || self.sagittal == 0.0
    }
}

impl Default for MeasurementError {
    fn default() -> Self {
        Self::shared(3.2, 4.2)
    }
}

/// Lenke decision thresholds in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DecisionThresholds {
    pub coronal_structural: f64,
    pub bend_structural: f64,
    pub sagittal_structural: f64,
    pub kyphosis_low: f64,
    pub kyphosis_high: f64,
}

impl Default for DecisionThresholds {
    fn default() -> Self {
        Self {
            coronal_structural: 25.0,
            bend_structural: 25.0,
            sagittal_structural: 20.0,
            kyphosis_low: 10.0,
            kyphosis_high: 40.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComparisonMethod {
    /// Trapezoid overlap of the two densities on the [0, 180) degree grid.
    #[default]
    Grid,
    /// Analytic overlap over the whole real line.
    ClosedForm,
}

impl ComparisonMethod {
    pub fn name(self) -> &'static str {
        match self {
            ComparisonMethod::Grid => "grid",
            ComparisonMethod::ClosedForm => "closed-form",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassificationProfile {
    pub measurement_error: MeasurementError,
    pub thresholds: DecisionThresholds,
    pub comparison: ComparisonMethod,
    pub confidence_low: f64,
    pub ambiguity_margin: f64,
    pub mass_tolerance: f64,
    pub borderline_low: f64,
    pub borderline_high: f64,
}

impl ClassificationProfile {
    pub fn default_v1() -> Self {
        Self {
            measurement_error: MeasurementError::default(),
            thresholds: DecisionThresholds::default(),
            comparison: ComparisonMethod::Grid,
            confidence_low: 0.5,
            ambiguity_margin: 0.10,
            mass_tolerance: 0.05,
            borderline_low: 0.2,
            borderline_high: 0.8,
        }
    }

    pub fn with_measurement_error(coronal_sd: f64, sagittal_sd: f64) -> Self {
        let mut base = Self::default_v1();
        base.measurement_error = MeasurementError::shared(coronal_sd, sagittal_sd);
        base
    }
}

impl Default for ClassificationProfile {
    fn default() -> Self {
        Self::default_v1()
    }
}
