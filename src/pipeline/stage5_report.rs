use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::model::angles::Region;
use crate::model::categories::{CurveType, SagittalModifier};
use crate::model::flags::{Flag, flag_order};
use crate::model::profile::ClassificationProfile;
use crate::pipeline::stage4_classify::Classification;
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;
use crate::report::{FlagStat, LabelStat, SummaryData, bool_fraction, format_f64_6, named_stats};

pub const CASES_FILE: &str = "lenke.tsv";
pub const SUMMARY_FILE: &str = "summary.json";
pub const REPORT_FILE: &str = "report.txt";

#[derive(Debug, Clone)]
pub struct Stage5Input<'a> {
    pub case_ids: &'a [String],
    pub classifications: &'a [Classification],
    pub profile: &'a ClassificationProfile,
    pub tool_name: String,
    pub tool_version: String,
}

pub fn write_reports(input: &Stage5Input<'_>, out_dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(out_dir)?;

    write_case_tsv(input, &out_dir.join(CASES_FILE))?;

    let summary = build_summary(input);
    let json = render_summary_json(&summary)?;
    write_text(&out_dir.join(SUMMARY_FILE), &json)?;

    let report = render_report_text(&summary);
    write_text(&out_dir.join(REPORT_FILE), &report)?;

    tracing::info!(
        out_dir = %out_dir.display(),
        n_cases = input.classifications.len(),
        "reports written"
    );
    Ok(())
}

fn write_case_tsv(input: &Stage5Input<'_>, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    let mut header = vec!["case_id".to_string(), "label".to_string()];
    for curve_type in CurveType::ALL {
        header.push(format!("p_type{}", curve_type.number()));
    }
    header.push("curve_type_mass".to_string());
    for modifier in SagittalModifier::ALL {
        header.push(format!("p_stm_{}", modifier.name()));
    }
    header.push("p_tl_major".to_string());
    for region in Region::ALL {
        header.push(format!("p_structural_{}", region.short_name()));
    }
    header.push("flags".to_string());
    writeln!(w, "{}", header.join("\t"))?;

    for (case_id, c) in input.case_ids.iter().zip(input.classifications) {
        let p = &c.probabilities;
        let mut row = vec![case_id.clone(), p.label()];
        for v in p.curve_type {
            row.push(format_f64_6(v));
        }
        row.push(format_f64_6(p.curve_type_mass()));
        for v in p.sagittal_modifier {
            row.push(format_f64_6(v));
        }
        row.push(format_f64_6(p.p_tl_major));
        for region in &p.regions {
            row.push(format_f64_6(region.structural));
        }
        row.push(format_flags(&c.flags));
        writeln!(w, "{}", row.join("\t"))?;
    }

    w.flush()
}

pub fn build_summary(input: &Stage5Input<'_>) -> SummaryData {
    let cs = input.classifications;
    let n = cs.len();

    let mut curve_types = Vec::with_capacity(6);
    for (idx, curve_type) in CurveType::ALL.iter().enumerate() {
        let values = column(cs, |c| c.probabilities.curve_type[idx]);
        curve_types.push(named_stats(curve_type.name(), &values));
    }
    let mut sagittal_modifiers = Vec::with_capacity(3);
    for (idx, modifier) in SagittalModifier::ALL.iter().enumerate() {
        let values = column(cs, |c| c.probabilities.sagittal_modifier[idx]);
        sagittal_modifiers.push(named_stats(modifier.name(), &values));
    }
    let p_tl_major = named_stats("p_tl_major", &column(cs, |c| c.probabilities.p_tl_major));
    let curve_type_mass = named_stats(
        "curve_type_mass",
        &column(cs, |c| c.probabilities.curve_type_mass()),
    );

    let mut label_counts: BTreeMap<String, usize> = BTreeMap::new();
    for c in cs {
        *label_counts.entry(c.probabilities.label()).or_insert(0) += 1;
    }
    let labels = label_counts
        .into_iter()
        .map(|(label, count)| LabelStat {
            label,
            count,
            fraction: if n > 0 { count as f64 / n as f64 } else { 0.0 },
        })
        .collect();

    let flags = flag_order()
        .iter()
        .map(|flag| {
            let present: Vec<bool> = cs.iter().map(|c| c.flags.contains(flag)).collect();
            FlagStat {
                name: flag.name(),
                fraction: bool_fraction(&present),
            }
        })
        .collect();

    let sd = &input.profile.measurement_error;
    SummaryData {
        tool: input.tool_name.clone(),
        tool_version: input.tool_version.clone(),
        comparison_method: input.profile.comparison.name().to_string(),
        coronal_sd: sd.coronal,
        coronal_bend_sd: sd.coronal_bend,
        sagittal_sd: sd.sagittal,
        n_cases: n,
        curve_types,
        sagittal_modifiers,
        p_tl_major,
        curve_type_mass,
        labels,
        flags,
    }
}

fn column(cs: &[Classification], f: impl Fn(&Classification) -> f64) -> Vec<f64> {
    cs.iter().map(f).collect()
}

fn format_flags(flags: &[Flag]) -> String {
    let names: Vec<&str> = flags.iter().map(|f| f.name()).collect();
    names.join(",")
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_report.rs"]
mod tests;
