use std::fs;
use std::path::Path;
use std::path::PathBuf;

use align::RawResults;
use anyhow::Context;
use anyhow::Result;
use tracing::debug;
use tracing::info;

use crate::parsing::parse_flags;
use crate::parsing::parse_pairs;
use crate::parsing::parse_times;

/// the four result files of one benchmark run
#[derive(Debug, Clone)]
pub struct InputPaths {
    /// `<baseline> <single-thread>` times per line
    pub comparison: PathBuf,
    pub multithread: PathBuf,
    pub gpu: PathBuf,
    /// solution flag per line
    pub found: PathBuf,
    /// header prefix skipped in the gpu file
    pub gpu_header: Option<String>,
}

fn read(path: &Path) -> Result<String> {
    let text =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    debug!(path = %path.display(), lines = text.lines().count(), "read input");
    Ok(text)
}

/// read and parse all inputs, then make sure they describe the same problems
pub fn load_results(paths: &InputPaths) -> Result<RawResults> {
    let in_file = |p: &Path| format!("in {}", p.display());

    let (baseline, single) =
        parse_pairs(&read(&paths.comparison)?).with_context(|| in_file(&paths.comparison))?;
    let multi = parse_times(&read(&paths.multithread)?, None)
        .with_context(|| in_file(&paths.multithread))?;
    let gpu = parse_times(&read(&paths.gpu)?, paths.gpu_header.as_deref())
        .with_context(|| in_file(&paths.gpu))?;
    let solved = parse_flags(&read(&paths.found)?).with_context(|| in_file(&paths.found))?;

    let raw = RawResults {
        baseline,
        single,
        multi,
        gpu,
        solved,
    };
    let n = raw
        .check_lengths()
        .context("result files do not describe the same problems")?;
    info!(problems = n, "loaded results");
    Ok(raw)
}
