//! # Result Plots
//! this program should
//! - be run from the directory holding a benchmark run's result files (or be
//!   given their paths)
//! - sort every result series by the baseline solver's time
//! - split the solver's results into solved and unsolved problems
//!
//! and then write three png charts:
//! - baseline vs solver, problems with solutions
//! - baseline vs solver, problems without solutions
//! - singlethread vs multithread vs gpu
//!
//! exit:
//! - code 0: all charts written
//! - anything else: an input file is missing, malformed or misaligned

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use clap_derive::Parser;
use plots::PlotOptions;
use plots::chart::Labels;
use plots::chart::Scale;
use plots::load::InputPaths;
use plots::parsing::GPU_HEADER_PREFIX;
use plots::pretty_print;
use plots::run;

#[derive(Parser, Debug)]
#[command(version)]
pub struct Cli {
    /// `<baseline time> <solver time>` per line
    #[arg(long, default_value = "comparison_cvc4_pebbles.txt")]
    pub comparison: PathBuf,
    /// multithreaded solver time per line
    #[arg(long, default_value = "multithread.txt")]
    pub multithread: PathBuf,
    /// gpu solver time per line
    #[arg(long, default_value = "gpu_version.txt")]
    pub gpu: PathBuf,
    /// solution flag (T/F) per line
    #[arg(long, default_value = "found.txt")]
    pub found: PathBuf,
    /// lines of the gpu file starting with this are skipped
    #[arg(long, default_value = GPU_HEADER_PREFIX)]
    pub gpu_header: String,

    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,
    /// also write the aligned table to this csv file
    #[arg(long)]
    pub csv: Option<PathBuf>,

    #[arg(long, default_value = "cvc4")]
    pub baseline_label: String,
    #[arg(long, default_value = "pebbles")]
    pub solver_label: String,
    #[arg(long, default_value = "SyGuS CrCi")]
    pub problem_set: String,
    #[arg(long, value_enum, default_value_t = Scale::Log)]
    pub scale: Scale,

    /// only load and summarise, don't write any png
    #[arg(long)]
    pub no_render: bool,
    #[arg(short, long)]
    pub verbose: bool,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let filter = if args.verbose {
        "plots=debug,align=debug"
    } else {
        "plots=info,align=info"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let start = Instant::now();

    let inputs = InputPaths {
        comparison: args.comparison,
        multithread: args.multithread,
        gpu: args.gpu,
        found: args.found,
        gpu_header: Some(args.gpu_header).filter(|h| !h.is_empty()),
    };
    let opts = PlotOptions {
        out_dir: args.out_dir,
        csv: args.csv,
        labels: Labels {
            baseline: args.baseline_label,
            solver: args.solver_label,
            problem_set: args.problem_set,
        },
        scale: args.scale,
        render: !args.no_render,
    };

    let report = run(&inputs, &opts)?;

    println!("{}", pretty_print(&report, &opts.labels));
    for path in &report.written {
        println!("wrote {}", path.display());
    }
    println!("done in {}s", start.elapsed().as_secs_f32());

    Ok(())
}
