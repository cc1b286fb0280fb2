use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Flag {
    AmbiguousCurveType,
    LowCurveTypeConfidence,
    CurveTypeMassDeficit,
    BorderlineMajorCurve,
    BorderlineKyphosis,
    ZeroMeasurementError,
}

impl Flag {
    pub fn name(self) -> &'static str {
        match self {
            Flag::AmbiguousCurveType => "AMBIGUOUS_CURVE_TYPE",
            Flag::LowCurveTypeConfidence => "LOW_CURVE_TYPE_CONFIDENCE",
            Flag::CurveTypeMassDeficit => "CURVE_TYPE_MASS_DEFICIT",
            Flag::BorderlineMajorCurve => "BORDERLINE_MAJOR_CURVE",
            Flag::BorderlineKyphosis => "BORDERLINE_KYPHOSIS",
            Flag::ZeroMeasurementError => "ZERO_MEASUREMENT_ERROR",
        }
    }
}

pub fn flag_order() -> &'static [Flag] {
    &[
        Flag::AmbiguousCurveType,
        Flag::LowCurveTypeConfidence,
        Flag::CurveTypeMassDeficit,
        Flag::BorderlineMajorCurve,
        Flag::BorderlineKyphosis,
        Flag::ZeroMeasurementError,
    ]
}
