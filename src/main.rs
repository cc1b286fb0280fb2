use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use kira_lenkeprob::input::{InputError, load_cases, load_profile};
use kira_lenkeprob::logging::init_logging;
use kira_lenkeprob::model::angles::{AngleFamily, CobbAngles};
use kira_lenkeprob::model::profile::{ClassificationProfile, ComparisonMethod};
use kira_lenkeprob::pipeline::classify_batch;
use kira_lenkeprob::pipeline::stage1_validate::{
    ClassifyError, validate_measurement_error, validate_triple,
};
use kira_lenkeprob::pipeline::stage4_classify::classify_case;
use kira_lenkeprob::pipeline::stage5_report::{Stage5Input, write_reports};
use kira_lenkeprob::report::json::render_case_json;
use kira_lenkeprob::report::text::render_case_text;

type RunResult = Result<(), Box<dyn std::error::Error>>;

#[derive(Debug, Parser)]
#[command(name = "kira-lenkeprob", version)]
#[command(about = "Probabilistic Lenke classification under interobserver Cobb angle variability")]
struct Cli {
    /// Debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Classify a single case and print the probabilities
    Classify {
        /// Standing coronal Cobb angles PT,MT,TL/L
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        coronal: Vec<f64>,

        /// Bending coronal Cobb angles PT,MT,TL/L
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        bend: Vec<f64>,

        /// Sagittal Cobb angles T2-T5,T5-T12,T10-L2
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        sagittal: Vec<f64>,

        #[arg(long, default_value = "case")]
        case_id: String,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        #[command(flatten)]
        model: ModelArgs,
    },

    /// Classify every case of a tab-separated case file
    Batch {
        #[arg(long)]
        input: PathBuf,

        #[arg(long)]
        out: PathBuf,

        #[command(flatten)]
        model: ModelArgs,
    },
}

#[derive(Debug, Clone, Args)]
struct ModelArgs {
    /// Coronal SD in degrees; also used for bend films unless --bend-sd is given
    #[arg(long)]
    coronal_sd: Option<f64>,

    #[arg(long)]
    bend_sd: Option<f64>,

    #[arg(long)]
    sagittal_sd: Option<f64>,

    /// JSON classification profile; flags given on the command line win
    #[arg(long)]
    profile: Option<PathBuf>,

    #[arg(long, value_enum)]
    method: Option<MethodArg>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum MethodArg {
    Grid,
    ClosedForm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if let Err(err) = run(cli.command) {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> RunResult {
    match command {
        Command::Classify {
            coronal,
            bend,
            sagittal,
            case_id,
            format,
            model,
        } => {
            let profile = resolve_profile(&model)?;
            let angles = CobbAngles {
                coronal: validate_triple(AngleFamily::Coronal, &coronal)?,
                coronal_bend: validate_triple(AngleFamily::CoronalBend, &bend)?,
                sagittal: validate_triple(AngleFamily::Sagittal, &sagittal)?,
            };
            validate_measurement_error(&profile.measurement_error)?;
            let classification = classify_case(&angles, &profile);
            let rendered = match format {
                OutputFormat::Text => render_case_text(&case_id, &classification),
                OutputFormat::Json => render_case_json(&case_id, &classification)?,
            };
            println!("{}", rendered.trim_end());
            Ok(())
        }
        Command::Batch { input, out, model } => {
            let profile = resolve_profile(&model)?;
            let records = load_cases(&input)?;
            let cases: Vec<CobbAngles> = records.iter().map(|r| r.angles).collect();
            let case_ids: Vec<String> = records.iter().map(|r| r.case_id.clone()).collect();

            tracing::info!(
                n_cases = cases.len(),
                method = profile.comparison.name(),
                "classifying cases"
            );
            let classifications =
                classify_batch(&cases, &profile).map_err(|err| batch_error(err, &case_ids))?;

            let report_input = Stage5Input {
                case_ids: &case_ids,
                classifications: &classifications,
                profile: &profile,
                tool_name: "kira-lenkeprob".to_string(),
                tool_version: env!("CARGO_PKG_VERSION").to_string(),
            };
            write_reports(&report_input, &out)?;
            Ok(())
        }
    }
}

fn batch_error(err: ClassifyError, case_ids: &[String]) -> String {
    match err {
        ClassifyError::Case { index, source } => match case_ids.get(index) {
            Some(case_id) => format!("case {case_id}: {source}"),
            None => format!("case {index}: {source}"),
        },
        other => other.to_string(),
    }
}

fn resolve_profile(model: &ModelArgs) -> Result<ClassificationProfile, InputError> {
    let mut profile = match &model.profile {
        Some(path) => load_profile(path)?,
        None => ClassificationProfile::default_v1(),
    };
    let sd = &mut profile.measurement_error;
    if let Some(coronal) = model.coronal_sd {
        sd.coronal = coronal;
        sd.coronal_bend = coronal;
    }
    if let Some(bend) = model.bend_sd {
        sd.coronal_bend = bend;
    }
    if let Some(sagittal) = model.sagittal_sd {
        sd.sagittal = sagittal;
    }
    if let Some(method) = model.method {
        profile.comparison = match method {
            MethodArg::Grid => ComparisonMethod::Grid,
            MethodArg::ClosedForm => ComparisonMethod::ClosedForm,
        };
    }
    Ok(profile)
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
