use clap::Parser;
use serde::{Deserialize, Serialize};
use simmatch::io::load_rgb_image;
use simmatch::{MatchConfig, MatchVerdict, Matcher, Metric, DEFAULT_THRESHOLD};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "SimMatch CLI: verify that a template appears in an image")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print the JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output with match diagnostics.
    #[arg(long)]
    trace: bool,
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
enum MetricConfig {
    SqDiff,
    Ccorr,
}

impl From<MetricConfig> for Metric {
    fn from(value: MetricConfig) -> Self {
        match value {
            MetricConfig::SqDiff => Metric::SqDiffNormed,
            MetricConfig::Ccorr => Metric::CcorrNormed,
        }
    }
}

impl From<Metric> for MetricConfig {
    fn from(value: Metric) -> Self {
        match value {
            Metric::SqDiffNormed => MetricConfig::SqDiff,
            Metric::CcorrNormed => MetricConfig::Ccorr,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct Config {
    image_path: String,
    template_path: String,
    output_path: Option<String>,
    metric: MetricConfig,
    threshold: f32,
    parallel: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            image_path: String::new(),
            template_path: String::new(),
            output_path: None,
            metric: MetricConfig::SqDiff,
            threshold: DEFAULT_THRESHOLD,
            parallel: false,
        }
    }
}

#[derive(Debug, Serialize)]
struct LocationRecord {
    x: usize,
    y: usize,
}

#[derive(Debug, Serialize)]
struct Output {
    metric: MetricConfig,
    similarity: f32,
    threshold: f32,
    passed: bool,
    location: LocationRecord,
    min_value: f32,
    max_value: f32,
}

impl From<MatchVerdict> for Output {
    fn from(value: MatchVerdict) -> Self {
        Self {
            metric: value.metric.into(),
            similarity: value.similarity,
            threshold: value.threshold,
            passed: value.passed,
            location: LocationRecord {
                x: value.location.x,
                y: value.location.y,
            },
            min_value: value.extremum.min_value,
            max_value: value.extremum.max_value,
        }
    }
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("simmatch=info".parse()?))
            .with_target(false)
            .init();
    }

    if cli.print_schema {
        println!("{SCHEMA_JSON}");
        return Ok(ExitCode::SUCCESS);
    }
    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(ExitCode::SUCCESS);
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    if config.image_path.is_empty() || config.template_path.is_empty() {
        return Err("image_path and template_path must be set in the config".into());
    }

    let image = load_rgb_image(&config.image_path)?;
    let template = load_rgb_image(&config.template_path)?;

    let matcher = Matcher::new(MatchConfig {
        metric: config.metric.into(),
        threshold: config.threshold,
        parallel: config.parallel,
    });
    let verdict = matcher.match_image(image.view(), template.view())?;

    let json = serde_json::to_string_pretty(&Output::from(verdict))?;
    match &config.output_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    match failure_message(&config.image_path, &config.template_path, &verdict) {
        Some(message) => {
            eprintln!("{message}");
            Ok(ExitCode::FAILURE)
        }
        None => Ok(ExitCode::SUCCESS),
    }
}

/// Describes a failed verdict; `None` when the template was found.
fn failure_message(image_path: &str, template_path: &str, verdict: &MatchVerdict) -> Option<String> {
    if verdict.passed {
        return None;
    }
    Some(format!(
        "could not locate template {template_path} in image {image_path}: \
         similarity threshold is {}, returned similarity was {:.4}",
        verdict.threshold, verdict.similarity
    ))
}

#[cfg(test)]
mod tests {
    use super::failure_message;
    use simmatch::{Extremum, Location, MatchVerdict, Metric};

    fn verdict(similarity: f32, threshold: f32) -> MatchVerdict {
        let location = Location { x: 3, y: 2 };
        MatchVerdict {
            similarity,
            passed: similarity >= threshold,
            location,
            threshold,
            metric: Metric::CcorrNormed,
            extremum: Extremum {
                min_value: 0.0,
                max_value: similarity,
                min_loc: Location { x: 0, y: 0 },
                max_loc: location,
            },
        }
    }

    #[test]
    fn passing_verdict_has_no_message() {
        assert_eq!(failure_message("scene.png", "icon.png", &verdict(0.97, 0.95)), None);
    }

    #[test]
    fn failing_verdict_names_paths_and_scores() {
        let message = failure_message("scene.png", "icon.png", &verdict(0.81234, 0.95));
        assert_eq!(
            message.as_deref(),
            Some(
                "could not locate template icon.png in image scene.png: \
                 similarity threshold is 0.95, returned similarity was 0.8123"
            )
        );
    }
}
