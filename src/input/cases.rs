use std::collections::HashSet;
use std::io::BufRead;

use crate::input::InputError;
use crate::model::angles::{AngleTriple, CobbAngles};

#[derive(Debug, Clone, PartialEq)]
pub struct CaseRecord {
    pub case_id: String,
    pub angles: CobbAngles,
}

const ID_COLUMN: &str = "case_id";

const ANGLE_COLUMNS: [&str; 9] = [
    "coronal_pt",
    "coronal_mt",
    "coronal_tll",
    "bend_pt",
    "bend_mt",
    "bend_tll",
    "sagittal_pt",
    "sagittal_mt",
    "sagittal_tll",
];

fn is_skipped(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.is_empty() || trimmed.starts_with('#')
}

/// Reads a tab-separated case table. Blank lines and `#` comments are skipped.
pub fn parse_cases<R: BufRead>(mut reader: R) -> Result<Vec<CaseRecord>, InputError> {
    let mut buf = String::new();
    let mut line_no = 0usize;

    let header_cols = loop {
        buf.clear();
        if reader.read_line(&mut buf)? == 0 {
            return Err(InputError::Parse {
                line: line_no,
                msg: "case file is empty".to_string(),
            });
        }
        line_no += 1;
        let line = buf.trim_end_matches(['\r', '\n']);
        if is_skipped(line) {
            continue;
        }
        break line
            .split('\t')
            .map(|s| s.trim().to_ascii_lowercase())
            .collect::<Vec<_>>();
    };

    let find = |name: &str| -> Result<usize, InputError> {
        header_cols
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| InputError::Parse {
                line: line_no,
                msg: format!("missing column {name}"),
            })
    };
    let id_col = find(ID_COLUMN)?;
    let mut angle_cols = [0usize; 9];
    for (slot, name) in angle_cols.iter_mut().zip(ANGLE_COLUMNS) {
        *slot = find(name)?;
    }
    let min_fields = angle_cols.iter().copied().max().unwrap_or(0).max(id_col) + 1;

    let mut seen = HashSet::new();
    let mut out = Vec::new();

    loop {
        buf.clear();
        if reader.read_line(&mut buf)? == 0 {
            break;
        }
        line_no += 1;
        let line = buf.trim_end_matches(['\r', '\n']);
        if is_skipped(line) {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
        if fields.len() < min_fields {
            tracing::warn!(
                line = line_no,
                fields = fields.len(),
                "case line has too few fields; skipping"
            );
            continue;
        }

        let case_id = fields[id_col].to_string();
        if case_id.is_empty() {
            tracing::warn!(line = line_no, "case line has empty case_id; skipping");
            continue;
        }
        if !seen.insert(case_id.clone()) {
            tracing::warn!(
                line = line_no,
                case_id = %case_id,
                "duplicate case_id; keeping first"
            );
            continue;
        }

        let mut values = [0f64; 9];
        for ((value, &col), name) in values.iter_mut().zip(&angle_cols).zip(ANGLE_COLUMNS) {
            *value = fields[col].parse::<f64>().map_err(|_| InputError::Parse {
                line: line_no,
                msg: format!("invalid {name} value '{}'", fields[col]),
            })?;
        }

        out.push(CaseRecord {
            case_id,
            angles: CobbAngles {
                coronal: AngleTriple([values[0], values[1], values[2]]),
                coronal_bend: AngleTriple([values[3], values[4], values[5]]),
                sagittal: AngleTriple([values[6], values[7], values[8]]),
            },
        });
    }

    Ok(out)
}
