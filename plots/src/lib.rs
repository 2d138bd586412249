//! # Result Plots
//! loads the timing files of one benchmark run, aligns them on the baseline
//! solver's times and renders the comparison charts.

use std::path::PathBuf;

use align::AlignedResults;
use align::align;
use align::summary::Comparison;
use align::summary::SeriesSummary;
use anyhow::Context;
use anyhow::Result;
use tracing::info;

pub mod chart;
pub mod export;
pub mod load;
pub mod parsing;
pub mod render;

use chart::Chart;
use chart::Labels;
use chart::Scale;
use chart::build_charts;
use load::InputPaths;
use load::load_results;

#[derive(Debug, Clone)]
pub struct PlotOptions {
    pub out_dir: PathBuf,
    /// where to write the aligned table, if anywhere
    pub csv: Option<PathBuf>,
    pub labels: Labels,
    pub scale: Scale,
    /// build the charts but don't write any png
    pub render: bool,
}

impl Default for PlotOptions {
    fn default() -> Self {
        PlotOptions {
            out_dir: PathBuf::from("."),
            csv: None,
            labels: Labels::default(),
            scale: Scale::Log,
            render: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Report {
    pub problems: usize,
    pub solved: usize,
    pub charts: Vec<Chart>,
    /// png files and csv written, in order
    pub written: Vec<PathBuf>,
    pub baseline: SeriesSummary,
    pub single: SeriesSummary,
    /// single-thread times against the baseline
    pub single_vs_baseline: Comparison,
    /// multithread and gpu times against single-thread
    pub multi_vs_single: Comparison,
    pub gpu_vs_single: Comparison,
}

impl Report {
    fn new(aligned: &AlignedResults, charts: Vec<Chart>) -> Self {
        Report {
            problems: aligned.len(),
            solved: aligned.solved_count(),
            charts,
            written: vec![],
            baseline: SeriesSummary::of(&aligned.baseline),
            single: SeriesSummary::of(&aligned.single),
            single_vs_baseline: Comparison::between(&aligned.baseline, &aligned.single),
            multi_vs_single: Comparison::between(&aligned.single, &aligned.multi),
            gpu_vs_single: Comparison::between(&aligned.single, &aligned.gpu),
        }
    }
}

/// load, align, chart. the whole run; nothing is read or written outside
/// the given paths.
pub fn run(inputs: &InputPaths, opts: &PlotOptions) -> Result<Report> {
    let raw = load_results(inputs)?;
    let aligned = align(raw)?;
    let charts = build_charts(&aligned, &opts.labels, opts.scale)?;
    let mut report = Report::new(&aligned, charts);

    if opts.render {
        std::fs::create_dir_all(&opts.out_dir)
            .with_context(|| format!("failed to create {}", opts.out_dir.display()))?;
        for chart in &report.charts {
            let path = opts.out_dir.join(&chart.file_name);
            render::render(chart, &path)
                .with_context(|| format!("failed to render {}", path.display()))?;
            info!(path = %path.display(), "wrote chart");
            report.written.push(path);
        }
    }

    if let Some(csv) = &opts.csv {
        export::write_csv(csv, &aligned.rows())?;
        info!(path = %csv.display(), "wrote aligned table");
        report.written.push(csv.clone());
    }

    Ok(report)
}

/// human readable summary of a run
pub fn pretty_print(report: &Report, labels: &Labels) -> String {
    let show = |o: Option<f64>| o.map_or_else(|| "none".to_string(), |v| format!("{v:.4}"));
    let cmp = |name: &str, c: &Comparison| {
        format!(
            "{name}\n \
             | faster: {}/{}\n \
             | slower: {}/{}\n \
             | speedup (geomean): {}\n \
             | kendall tau-b: {}",
            c.faster,
            c.pairs,
            c.slower,
            c.pairs,
            show(c.speedup),
            show(c.tau_b),
        )
    };
    format!(
        "{} problems, {} with solutions\n\
         {} median: {}s, total: {:.2}s\n\
         {} median: {}s, total: {:.2}s\n\
         {}\n{}\n{}",
        report.problems,
        report.solved,
        labels.baseline,
        show(report.baseline.median),
        report.baseline.total,
        labels.solver,
        show(report.single.median),
        report.single.total,
        cmp(
            &format!("{} vs {}", labels.solver, labels.baseline),
            &report.single_vs_baseline
        ),
        cmp("multithread vs singlethread", &report.multi_vs_single),
        cmp("gpu vs singlethread", &report.gpu_vs_single),
    )
}
