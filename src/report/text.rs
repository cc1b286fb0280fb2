use crate::model::angles::Region;
use crate::model::categories::{CurveType, SagittalModifier};
use crate::pipeline::stage4_classify::Classification;
use crate::report::{LabelStat, SummaryData, format_f64_6};

pub fn render_case_text(case_id: &str, classification: &Classification) -> String {
    let p = &classification.probabilities;
    let mut out = String::new();

    out.push_str(&format!("Case: {}\n", case_id));
    out.push_str(&format!("Most likely: {}\n\n", p.label()));

    out.push_str("Curve type\n");
    for curve_type in CurveType::ALL {
        out.push_str(&format!(
            "  {} {:<36} {}\n",
            curve_type.number(),
            curve_type.name(),
            format_f64_6(p.curve_type_probability(curve_type))
        ));
    }
    out.push_str(&format!(
        "  total mass {}\n\n",
        format_f64_6(p.curve_type_mass())
    ));

    out.push_str("Sagittal thoracic modifier\n");
    for (idx, modifier) in SagittalModifier::ALL.iter().enumerate() {
        out.push_str(&format!(
            "  {} {:<14} {}\n",
            modifier.symbol(),
            modifier.name(),
            format_f64_6(p.sagittal_modifier[idx])
        ));
    }
    out.push('\n');

    out.push_str(&format!(
        "Major curve: MT {} / TL/L {}\n",
        format_f64_6(p.p_mt_major),
        format_f64_6(p.p_tl_major)
    ));
    out.push_str("Structural probability:");
    for region in Region::ALL {
        out.push_str(&format!(
            " {}={}",
            region.short_name(),
            format_f64_6(p.regions[region.index()].structural)
        ));
    }
    out.push('\n');

    if !classification.flags.is_empty() {
        let names: Vec<&str> = classification.flags.iter().map(|f| f.name()).collect();
        out.push_str(&format!("Flags: {}\n", names.join(",")));
    }

    out
}

pub fn render_report_text(data: &SummaryData) -> String {
    let mut out = String::new();

    out.push_str("Probabilistic Lenke Classification Report\n");
    out.push_str("=========================================\n\n");

    out.push_str("1. Measurement model\n");
    out.push_str(&format!("Comparison method: {}\n", data.comparison_method));
    out.push_str(&format!(
        "SD coronal={} coronal_bend={} sagittal={}\n\n",
        format_f64_6(data.coronal_sd),
        format_f64_6(data.coronal_bend_sd),
        format_f64_6(data.sagittal_sd)
    ));

    out.push_str("2. Cohort\n");
    out.push_str(&format!("Cases: {}\n", data.n_cases));
    out.push_str(&format!("Dominant labels: {}\n\n", dominant_labels(&data.labels)));

    out.push_str("3. Mean curve type probability\n");
    for stat in &data.curve_types {
        out.push_str(&format!("{}: {}\n", stat.name, format_f64_6(stat.mean)));
    }
    out.push_str(&format!(
        "Curve type mass median: {}\n\n",
        format_f64_6(data.curve_type_mass.median)
    ));

    out.push_str("4. Mean sagittal modifier probability\n");
    for stat in &data.sagittal_modifiers {
        out.push_str(&format!("{}: {}\n", stat.name, format_f64_6(stat.mean)));
    }
    out.push('\n');

    out.push_str("5. Quality and caveats\n");
    for flag in &data.flags {
        out.push_str(&format!("{} fraction: {}\n", flag.name, format_f64_6(flag.fraction)));
    }
    if data.curve_type_mass.median < 0.95 {
        out.push_str("Note: curve type probabilities are not renormalized and may not sum to one.\n");
    }

    out
}

fn dominant_labels(labels: &[LabelStat]) -> String {
    if labels.is_empty() {
        return "none".to_string();
    }
    let mut sorted = labels.to_vec();
    sorted.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    let mut parts = Vec::new();
    for l in sorted.iter().take(2) {
        parts.push(format!("{} ({})", l.label, format_f64_6(l.fraction)));
    }
    parts.join(", ")
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
