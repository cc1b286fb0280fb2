use super::*;
use crate::model::angles::{AngleTriple, CobbAngles};
use crate::pipeline::stage4_classify::classify_case;
use std::sync::atomic::{AtomicUsize, Ordering};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> std::path::PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("kira_lenke_report_test_{}_{}", std::process::id(), id));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn build_classifications(profile: &ClassificationProfile) -> (Vec<String>, Vec<Classification>) {
    let cases = [
        CobbAngles {
            coronal: AngleTriple::new(25.0, 30.0, 15.0),
            coronal_bend: AngleTriple::new(25.0, 30.0, 15.0),
            sagittal: AngleTriple::new(25.0, 30.0, 15.0),
        },
        CobbAngles {
            coronal: AngleTriple::new(40.0, 20.0, 50.0),
            coronal_bend: AngleTriple::new(40.0, 10.0, 40.0),
            sagittal: AngleTriple::new(30.0, 10.0, 10.0),
        },
    ];
    let ids = vec!["p1".to_string(), "p2".to_string()];
    let cs = cases.iter().map(|a| classify_case(a, profile)).collect();
    (ids, cs)
}

#[test]
fn test_write_reports_files() {
    let profile = ClassificationProfile::default_v1();
    let (ids, cs) = build_classifications(&profile);
    let input = Stage5Input {
        case_ids: &ids,
        classifications: &cs,
        profile: &profile,
        tool_name: "kira-lenkeprob".to_string(),
        tool_version: "0.0.0".to_string(),
    };
    let dir = make_temp_dir();
    write_reports(&input, &dir).unwrap();

    let tsv = std::fs::read_to_string(dir.join(CASES_FILE)).unwrap();
    let lines: Vec<&str> = tsv.lines().collect();
    assert_eq!(lines.len(), 3);
    let header: Vec<&str> = lines[0].split('\t').collect();
    assert_eq!(header[0], "case_id");
    assert_eq!(header[2], "p_type1");
    assert_eq!(*header.last().unwrap(), "flags");
    let row: Vec<&str> = lines[1].split('\t').collect();
    assert_eq!(row.len(), header.len());
    assert_eq!(row[0], "p1");
    assert_eq!(row[1], "2N");
    assert_eq!(row[3], "0.830234");
    let row2: Vec<&str> = lines[2].split('\t').collect();
    assert_eq!(
        *row2.last().unwrap(),
        "AMBIGUOUS_CURVE_TYPE,LOW_CURVE_TYPE_CONFIDENCE,CURVE_TYPE_MASS_DEFICIT"
    );

    let json = std::fs::read_to_string(dir.join(SUMMARY_FILE)).unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(v["n_cases"], 2);
    assert_eq!(v["comparison_method"], "grid");
    assert_eq!(v["curve_types"].as_array().unwrap().len(), 6);

    let report = std::fs::read_to_string(dir.join(REPORT_FILE)).unwrap();
    assert!(report.starts_with("Probabilistic Lenke Classification Report"));
    assert!(report.contains("Cases: 2"));
}

#[test]
fn test_build_summary_labels_and_flags() {
    let profile = ClassificationProfile::default_v1();
    let (ids, cs) = build_classifications(&profile);
    let input = Stage5Input {
        case_ids: &ids,
        classifications: &cs,
        profile: &profile,
        tool_name: "kira-lenkeprob".to_string(),
        tool_version: "0.0.0".to_string(),
    };
    let summary = build_summary(&input);
    assert_eq!(summary.n_cases, 2);
    assert_eq!(summary.labels.len(), 2);
    assert!(summary.labels.iter().all(|l| l.count == 1 && l.fraction == 0.5));

    let deficit = summary
        .flags
        .iter()
        .find(|f| f.name == "CURVE_TYPE_MASS_DEFICIT")
        .unwrap();
    assert_eq!(deficit.fraction, 0.5);
    assert_eq!(summary.flags.len(), flag_order().len());
}

#[test]
fn test_build_summary_empty() {
    let profile = ClassificationProfile::default_v1();
    let input = Stage5Input {
        case_ids: &[],
        classifications: &[],
        profile: &profile,
        tool_name: "kira-lenkeprob".to_string(),
        tool_version: "0.0.0".to_string(),
    };
    let summary = build_summary(&input);
    assert_eq!(summary.n_cases, 0);
    assert!(summary.labels.is_empty());
    assert_eq!(summary.p_tl_major.mean, 0.0);
}
