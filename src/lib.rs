//! Probabilistic Lenke classification of adolescent idiopathic scoliosis.
//!
//! Each measured Cobb angle is treated as the centre of a Gaussian around the
//! unknown true angle, with the interobserver standard deviation of its
//! radiograph family. The deterministic Lenke rule is re-expressed over the
//! resulting threshold-crossing and pairwise-ordering probabilities, giving
//! probabilities for curve types 1-6 and sagittal thoracic modifiers `-`, `N`, `+`.

pub mod input;
pub mod logging;
pub mod model;
pub mod numeric;
pub mod pipeline;
pub mod report;

pub use model::angles::{AngleFamily, AngleTriple, CobbAngles, Region};
pub use model::categories::{CurveType, SagittalModifier};
pub use model::flags::Flag;
pub use model::probabilities::{LenkeProbabilities, RegionProbabilities};
pub use model::profile::{
    ClassificationProfile, ComparisonMethod, DecisionThresholds, MeasurementError,
};
pub use pipeline::stage1_validate::ClassifyError;
pub use pipeline::stage2_compare::{probability_greater, probability_greater_closed_form};
pub use pipeline::stage4_classify::{Classification, run_classification};
pub use pipeline::{classify, classify_batch, classify_with_profile};
