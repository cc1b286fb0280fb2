use serde::Serialize;

use crate::model::flags::Flag;
use crate::model::probabilities::LenkeProbabilities;
use crate::pipeline::stage4_classify::Classification;
use crate::report::SummaryData;

#[derive(Debug, Serialize)]
pub struct CaseReport<'a> {
    pub case_id: &'a str,
    pub label: String,
    pub curve_type_mass: f64,
    pub probabilities: &'a LenkeProbabilities,
    pub flags: &'a [Flag],
}

impl<'a> CaseReport<'a> {
    pub fn new(case_id: &'a str, classification: &'a Classification) -> Self {
        Self {
            case_id,
            label: classification.probabilities.label(),
            curve_type_mass: classification.probabilities.curve_type_mass(),
            probabilities: &classification.probabilities,
            flags: &classification.flags,
        }
    }
}

pub fn render_case_json(
    case_id: &str,
    classification: &Classification,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&CaseReport::new(case_id, classification))
}

pub fn render_summary_json(data: &SummaryData) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(data)
}
