use std::path::Path;

use console::Style;
use lumascan_core::frame::AnalysisResult;
use lumascan_core::pipeline::config::AnalyzerConfig;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_analysis_summary(
    config: &AnalyzerConfig,
    result: &AnalysisResult,
    input: &Path,
    output: &Path,
) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Lumascan Analysis"));
    println!(
        "  {}",
        s.title.apply_to(
            "\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}"
        )
    );
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(output.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Grid"),
        s.value.apply_to(config.grid)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Threshold"),
        s.value.apply_to(config.scene_change_threshold)
    );
    println!();

    println!("  {}", s.header.apply_to("Results"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Frames"),
        s.value.apply_to(result.frame_count())
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Changes"),
        s.value.apply_to(result.scene_change_count)
    );
    if !result.records.is_empty() {
        let mean: u64 = result.records.iter().map(|r| r.avg_brightness as u64).sum();
        println!(
            "    {:<12}{}",
            s.label.apply_to("Brightness"),
            s.value
                .apply_to(format!("{} (mean)", mean / result.records.len() as u64))
        );
    }
    println!();
}
