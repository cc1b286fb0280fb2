use serde::Serialize;

pub mod json;
pub mod text;

#[derive(Debug, Clone, Serialize)]
pub struct NamedStats {
    pub name: &'static str,
    pub mean: f64,
    pub median: f64,
    pub p90: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct LabelStat {
    pub label: String,
    pub count: usize,
    pub fraction: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct FlagStat {
    pub name: &'static str,
    pub fraction: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: String,
    pub tool_version: String,
    pub comparison_method: String,
    pub coronal_sd: f64,
    pub coronal_bend_sd: f64,
    pub sagittal_sd: f64,

    pub n_cases: usize,
    pub curve_types: Vec<NamedStats>,
    pub sagittal_modifiers: Vec<NamedStats>,
    pub p_tl_major: NamedStats,
    pub curve_type_mass: NamedStats,
    pub labels: Vec<LabelStat>,
    pub flags: Vec<FlagStat>,
}

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}

pub fn quantile_indexed(values: &[f64], p: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let n = sorted.len();
    let idx = ((n - 1) as f64 * p).ceil() as usize;
    sorted[idx]
}

pub fn median(values: &[f64]) -> f64 {
    quantile_indexed(values, 0.5)
}

pub fn p90(values: &[f64]) -> f64 {
    quantile_indexed(values, 0.90)
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

pub fn named_stats(name: &'static str, values: &[f64]) -> NamedStats {
    NamedStats {
        name,
        mean: mean(values),
        median: median(values),
        p90: p90(values),
    }
}

pub fn bool_fraction(values: &[bool]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let count = values.iter().filter(|&&v| v).count();
    count as f64 / values.len() as f64
}
