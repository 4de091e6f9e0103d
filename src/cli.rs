// src/cli.rs
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use color_eyre::eyre::{bail, Result, WrapErr};
use serde::Serialize;
use tracing::warn;

use crate::config::options::{AppOptions, ExportFormat};
use crate::file::Exporter;
use crate::input::load_names;
use crate::normalize::format_time;
use crate::progress::Progress;
use crate::record::RunnerResultSet;
use crate::scrape::{fetch_all, FetchReport};
use crate::source::{FileSource, RaceviewSource, ResultSource};
use crate::stats::{analyze, PerformanceStats, RunnerAnalysis};

#[derive(Debug, Parser)]
#[command(name = "race_scrape", version, about = "Fetch race results for runners and summarize their performance")]
pub struct Args {
    /// Runner names to search for
    pub names: Vec<String>,

    /// File with runner names (.txt: one per line, .csv: first column)
    #[arg(short = 'f', long = "names-file")]
    pub names_file: Option<PathBuf>,

    /// Only analyze this distance (default: every distance a runner has)
    #[arg(short, long)]
    pub distance: Option<String>,

    /// Read recorded responses from a JSON file instead of the portal
    #[arg(long = "source-file")]
    pub source_file: Option<PathBuf>,

    /// TOML config file (default: ./race_scrape.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Maximum concurrent fetches
    #[arg(short = 'j', long)]
    pub workers: Option<usize>,

    /// Write the detailed table of every analyzed distance
    #[arg(long)]
    pub export: bool,

    /// Export directory
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Print analyses as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Only list each runner's distances
    #[arg(long = "list-distances")]
    pub list_distances: bool,

    /// More logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FormatArg {
    Csv,
    Tsv,
}

impl From<FormatArg> for ExportFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Tsv => ExportFormat::Tsv,
        }
    }
}

impl Args {
    /// File options with command-line overrides applied.
    pub fn options(&self) -> Result<AppOptions> {
        let mut opts = AppOptions::load(self.config.as_deref()).wrap_err("loading configuration")?;
        if let Some(w) = self.workers {
            opts.fetch.max_workers = w;
        }
        if let Some(dir) = &self.out {
            opts.export.out_dir = dir.clone();
        }
        if let Some(f) = self.format {
            opts.export.format = f.into();
        }
        Ok(opts)
    }

    /// Positional names followed by names from `--names-file`.
    pub fn runner_names(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = self
            .names
            .iter()
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .collect();
        if let Some(path) = &self.names_file {
            names.extend(load_names(path)?);
        }
        Ok(names)
    }
}

/// Progress lines on stderr.
struct ConsoleProgress {
    total: usize,
    done: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        eprintln!("Fetching results for {total} runner(s)...");
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, name: &str, records: usize) {
        self.done += 1;
        eprintln!("[{}/{}] {name}: {records} result(s)", self.done, self.total);
    }
    fn item_failed(&mut self, name: &str, reason: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {name}: {reason}", self.done, self.total);
    }
}

pub fn run(args: Args) -> Result<()> {
    let opts = args.options()?;
    let names = args.runner_names()?;
    if names.is_empty() {
        bail!("no runner names given (pass names or --names-file)");
    }

    let source: Box<dyn ResultSource> = match &args.source_file {
        Some(path) => Box::new(
            FileSource::from_path(path).wrap_err_with(|| format!("reading {}", path.display()))?,
        ),
        None => Box::new(RaceviewSource::new(&opts.source).wrap_err("building HTTP client")?),
    };

    let mut progress = ConsoleProgress { total: 0, done: 0 };
    let report = fetch_all(&*source, &names, &opts.fetch, Some(&mut progress));

    for failure in &report.failures {
        warn!(runner = %failure.name, error = %failure.error, "no results for runner");
    }
    if report.is_empty() {
        bail!("no results found for any runner");
    }

    let mut out = io::stdout().lock();

    if args.list_distances {
        for name in report.names() {
            let set = &report.results[name];
            writeln!(out, "{name}: {}", set.distances().join(", "))?;
        }
        return Ok(());
    }

    let analyses = collect_analyses(&report, &names, args.distance.as_deref());

    if args.json {
        let views: Vec<AnalysisView<'_>> = analyses.iter().map(|(_, a)| AnalysisView::from(a)).collect();
        serde_json::to_writer_pretty(&mut out, &views)?;
        writeln!(out)?;
    } else {
        for (_, analysis) in &analyses {
            print_analysis(&mut out, analysis)?;
        }
    }

    if args.export {
        let mut exporter = Exporter::new(&opts.export);
        for (set, analysis) in &analyses {
            let path = exporter.export(analysis, &set.headers)?;
            eprintln!("Wrote {}", path.display());
        }
    }
    Ok(())
}

/// Analyses in input-name order. A runner lacking the requested distance is
/// reported on stderr and skipped.
fn collect_analyses<'r>(
    report: &'r FetchReport,
    names: &[String],
    distance: Option<&str>,
) -> Vec<(&'r RunnerResultSet, RunnerAnalysis)> {
    let mut analyses = Vec::new();
    let mut seen = std::collections::HashSet::new();

    for name in names.iter().filter(|n| seen.insert(n.as_str())) {
        let Some(set) = report.results.get(name) else { continue };

        let distances = match distance {
            Some(d) => vec![d.to_string()],
            None => set.distances(),
        };
        if distances.is_empty() {
            eprintln!("No race distances found for {name}");
            continue;
        }

        for d in &distances {
            match analyze(set, d) {
                Ok(analysis) => analyses.push((set, analysis)),
                Err(e) => eprintln!("{name}: {e}"),
            }
        }
    }
    analyses
}

fn print_analysis<W: Write>(out: &mut W, analysis: &RunnerAnalysis) -> io::Result<()> {
    let s = &analysis.stats;
    writeln!(out, "### {} - {}", analysis.runner, s.distance)?;
    writeln!(out, "  Best time:          {}", s.best_time())?;
    writeln!(out, "  Best pace:          {}", s.best_pace())?;
    writeln!(out, "  Total races:        {}", s.total_races)?;
    writeln!(out, "  Consistency score:  {:.1}%", s.consistency_score)?;
    writeln!(out, "  Best position:      {}", fmt_opt(s.best_position, 0))?;
    writeln!(out, "  Average position:   {}", fmt_opt(s.avg_position, 1))?;
    writeln!(
        out,
        "  Improvement rate:   {:.1}% ({})",
        s.improvement_rate.abs(),
        if s.improvement_rate > 0.0 { "Improving" } else { "Declining" },
    )?;
    writeln!(out, "  Median time:        {}", format_time(s.median_time))?;
    writeln!(out, "  Standard deviation: {:.1}s", s.std_dev)?;
    writeln!(out, "  Most common pace:   {}", s.avg_pace)?;
    writeln!(out, "  Position change:    {}", fmt_opt(s.position_improvement, 0))?;

    if !s.season_bests.is_empty() {
        writeln!(out, "  Season bests:")?;
        for (year, secs) in &s.season_bests {
            writeln!(out, "    {year}: {}", format_time(*secs))?;
        }
    }

    writeln!(out, "  Results (fastest first):")?;
    for r in analysis.group.records() {
        writeln!(
            out,
            "    {:>10}  {:>8}  pos {:>5}  {}",
            r.raw.time(),
            r.raw.pace(),
            r.raw.position(),
            r.raw.date(),
        )?;
    }
    writeln!(out)
}

fn fmt_opt(v: Option<f64>, decimals: usize) -> String {
    match v {
        Some(x) => format!("{x:.decimals$}"),
        None => "N/A".to_string(),
    }
}

/// JSON shape of one analysis.
#[derive(Serialize)]
struct AnalysisView<'a> {
    runner: &'a str,
    stats: &'a PerformanceStats,
    results: Vec<&'a std::collections::HashMap<String, String>>,
}

impl<'a> From<&'a RunnerAnalysis> for AnalysisView<'a> {
    fn from(a: &'a RunnerAnalysis) -> Self {
        Self {
            runner: &a.runner,
            stats: &a.stats,
            results: a.group.records().iter().map(|r| r.raw.fields()).collect(),
        }
    }
}
