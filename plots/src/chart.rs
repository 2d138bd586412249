//! what gets drawn, independent of how

use align::AlignedResults;
use align::def::ResultSeries;
use align::error::AlignError;

pub const Y_DESC: &str = "Execution time in seconds";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap_derive::ValueEnum)]
pub enum Scale {
    #[default]
    Log,
    Linear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineColor {
    Red,
    Green,
    Blue,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub label: String,
    pub color: LineColor,
    pub values: ResultSeries,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub file_name: String,
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    pub scale: Scale,
    pub lines: Vec<Line>,
}

/// labels used for chart titles, legends and file names
#[derive(Debug, Clone)]
pub struct Labels {
    pub baseline: String,
    pub solver: String,
    pub problem_set: String,
}

impl Default for Labels {
    fn default() -> Self {
        Labels {
            baseline: "cvc4".to_string(),
            solver: "pebbles".to_string(),
            problem_set: "SyGuS CrCi".to_string(),
        }
    }
}

fn line(label: &str, color: LineColor, values: &[f64]) -> Line {
    Line {
        label: label.to_string(),
        color,
        values: values.to_vec(),
    }
}

fn scale_prefix(scale: Scale) -> &'static str {
    match scale {
        Scale::Log => "Log-scale",
        Scale::Linear => "Linear-scale",
    }
}

/// the three comparison charts: baseline vs solver on solved problems, the
/// same on unsolved problems, and the solver's execution modes on all
/// problems
pub fn build_charts(
    aligned: &AlignedResults,
    labels: &Labels,
    scale: Scale,
) -> Result<Vec<Chart>, AlignError> {
    let split = aligned.solved_split()?;
    let versus = format!("{}_versus_{}", labels.baseline, labels.solver);
    let title = format!(
        "{} comparison of {} and {}",
        scale_prefix(scale),
        labels.baseline,
        labels.solver
    );

    let solved = Chart {
        file_name: format!("{versus}_solved.png"),
        title: title.clone(),
        x_desc: format!("{} problems with solutions", labels.problem_set),
        y_desc: Y_DESC.to_string(),
        scale,
        lines: vec![
            line(&labels.baseline, LineColor::Red, &split.baseline.solved),
            line(&labels.solver, LineColor::Green, &split.single.solved),
        ],
    };

    let unsolved = Chart {
        file_name: format!("{versus}_unsolved.png"),
        title,
        x_desc: format!("{} problems with no solution", labels.problem_set),
        y_desc: Y_DESC.to_string(),
        scale,
        lines: vec![
            line(&labels.baseline, LineColor::Red, &split.baseline.unsolved),
            line(&labels.solver, LineColor::Green, &split.single.unsolved),
        ],
    };

    let modes = Chart {
        file_name: "single_versus_multi.png".to_string(),
        title: format!("Comparison of {} execution modes", labels.solver),
        x_desc: format!(
            "{} problems, ordered by {} time",
            labels.problem_set, labels.baseline
        ),
        y_desc: Y_DESC.to_string(),
        scale,
        lines: vec![
            line("multithread", LineColor::Red, &aligned.multi),
            line("singlethread", LineColor::Green, &aligned.single),
            line("gpu", LineColor::Blue, &aligned.gpu),
        ],
    };

    Ok(vec![solved, unsolved, modes])
}
