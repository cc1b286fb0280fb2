use super::*;
use crate::model::angles::{AngleTriple, CobbAngles};
use crate::model::profile::ClassificationProfile;
use crate::pipeline::stage4_classify::classify_case;
use crate::report::json::render_case_json;

fn reference_classification() -> Classification {
    let angles = CobbAngles {
        coronal: AngleTriple::new(25.0, 30.0, 15.0),
        coronal_bend: AngleTriple::new(25.0, 30.0, 15.0),
        sagittal: AngleTriple::new(25.0, 30.0, 15.0),
    };
    classify_case(&angles, &ClassificationProfile::default_v1())
}

#[test]
fn test_render_case_text() {
    let c = reference_classification();
    let text = render_case_text("p1", &c);
    assert!(text.starts_with("Case: p1\nMost likely: 2N\n"));
    assert!(text.contains("double_thoracic"));
    assert!(text.contains("0.830234"));
    assert!(text.contains("  N normal"));
    assert!(!text.contains("Flags:"));
}

#[test]
fn test_render_case_json() {
    let c = reference_classification();
    let json = render_case_json("p1", &c).unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(v["case_id"], "p1");
    assert_eq!(v["label"], "2N");
    assert_eq!(v["probabilities"]["curve_type"].as_array().unwrap().len(), 6);
    assert_eq!(v["probabilities"]["regions"].as_array().unwrap().len(), 3);
    assert!(v["flags"].as_array().unwrap().is_empty());
}

#[test]
fn test_dominant_labels() {
    let labels = vec![
        LabelStat {
            label: "1N".to_string(),
            count: 1,
            fraction: 0.25,
        },
        LabelStat {
            label: "2N".to_string(),
            count: 3,
            fraction: 0.75,
        },
    ];
    assert_eq!(dominant_labels(&labels), "2N (0.750000), 1N (0.250000)");
    assert_eq!(dominant_labels(&[]), "none");
}
