use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use lumascan_core::io::open_source;
use lumascan_core::pipeline::config::{AnalyzerConfig, GridSize};
use lumascan_core::pipeline::{
    run_pipeline_reported, CancelToken, PipelineStage, ProgressReporter,
};
use lumascan_core::report::write_csv;

use crate::summary::print_analysis_summary;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Input SER file or directory of image frames
    pub input: PathBuf,

    /// Destination CSV file (must not already exist)
    #[arg(short, long)]
    pub output: PathBuf,

    /// Scene-change threshold on the normalized difference
    #[arg(long)]
    pub threshold: Option<u32>,

    /// Analysis grid size, e.g. 320x180
    #[arg(long)]
    pub grid: Option<GridSize>,

    /// Load analyzer settings from a TOML file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Drives an indicatif bar from pipeline progress callbacks.
///
/// The bar outlives individual stages (analyzing, then writing), so it is
/// finished by the caller once the last stage is done.
struct BarReporter {
    bar: ProgressBar,
}

impl ProgressReporter for BarReporter {
    fn begin_stage(&self, stage: PipelineStage, total_items: Option<usize>) {
        if let Some(total) = total_items {
            self.bar.set_length(total as u64);
        }
        self.bar.set_message(stage.to_string());
    }

    fn advance(&self, items_done: usize) {
        self.bar.set_position(items_done as u64);
    }
}

pub fn run(args: &AnalyzeArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str::<AnalyzerConfig>(&text)
                .with_context(|| format!("Failed to parse config {}", path.display()))?
        }
        None => AnalyzerConfig::default(),
    };
    if let Some(threshold) = args.threshold {
        config.scene_change_threshold = threshold;
    }
    if let Some(grid) = args.grid {
        config.grid = grid;
    }

    let mut source = open_source(&args.input)?;

    let bar = ProgressBar::no_length();
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    let reporter = Arc::new(BarReporter { bar: bar.clone() });

    let result =
        run_pipeline_reported(&config, source.as_mut(), reporter.clone(), &CancelToken::new())?;

    reporter.begin_stage(PipelineStage::Writing, None);
    write_csv(&result, &args.output)?;
    bar.finish();

    print_analysis_summary(&config, &result, &args.input, &args.output);

    Ok(())
}
