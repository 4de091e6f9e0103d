// src/scrape.rs
use std::{
    any::Any,
    collections::{HashMap, HashSet},
    panic::{self, AssertUnwindSafe},
    sync::{mpsc, atomic::{AtomicUsize, Ordering}},
    thread,
    time::Duration,
};

use tracing::{debug, info, warn};

use crate::{
    config::options::FetchOptions,
    error::FetchError,
    progress::Progress,
    record::RunnerResultSet,
    source::ResultSource,
};

/// A runner that produced no result set, and why.
#[derive(Debug)]
pub struct FetchFailure {
    pub name: String,
    pub error: FetchError,
}

/// Outcome of one batch: every requested name lands in exactly one of the
/// two collections.
#[derive(Debug, Default)]
pub struct FetchReport {
    pub results: HashMap<String, RunnerResultSet>,
    pub failures: Vec<FetchFailure>,
}

impl FetchReport {
    pub fn is_empty(&self) -> bool { self.results.is_empty() }

    /// Successful runner names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.results.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn failure(&self, name: &str) -> Option<&FetchError> {
        self.failures.iter().find(|f| f.name == name).map(|f| &f.error)
    }
}

/// Fetch every name through `source` with at most `opts.max_workers`
/// concurrent calls (never more than there are names).
///
/// Blocks until each name has either a result set or a failure. A failing,
/// empty or panicking fetch affects only its own name.
pub fn fetch_all<S: ResultSource + ?Sized>(
    source: &S,
    names: &[String],
    opts: &FetchOptions,
    mut progress: Option<&mut dyn Progress>,
) -> FetchReport {
    let mut seen = HashSet::new();
    let names: Vec<&str> = names
        .iter()
        .map(String::as_str)
        .filter(|n| seen.insert(*n))
        .collect();

    let mut report = FetchReport::default();
    if names.is_empty() {
        return report;
    }

    let workers = opts.max_workers.max(1).min(names.len());
    let pause = Duration::from_millis(opts.request_pause_ms);
    info!(runners = names.len(), workers, "fetching results");

    if let Some(p) = progress.as_deref_mut() {
        p.begin(names.len());
        p.log(&format!("Using {workers} worker(s)"));
    }

    let counter = AtomicUsize::new(0);
    let (res_tx, res_rx) = mpsc::channel::<(&str, Result<RunnerResultSet, FetchError>)>();

    thread::scope(|scope| {
        for _ in 0..workers {
            let tx = res_tx.clone();
            let names = &names;
            let idx = &counter;

            scope.spawn(move || {
                loop {
                    let i = idx.fetch_add(1, Ordering::Relaxed);
                    let Some(&name) = names.get(i) else { break };

                    let result = fetch_one(source, name);
                    if tx.send((name, result)).is_err() {
                        break;
                    }
                    if !pause.is_zero() {
                        thread::sleep(pause);
                    }
                }
            });
        }
        drop(res_tx); // main thread is sole receiver now

        // Aggregate results; ends once every worker has hung up.
        for (name, result) in res_rx {
            match result {
                Ok(set) => {
                    info!(runner = name, records = set.len(), "fetched results");
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_done(name, set.len());
                    }
                    report.results.insert(name.to_string(), set);
                }
                Err(error) => {
                    warn!(runner = name, %error, "fetch failed");
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_failed(name, &error.to_string());
                    }
                    report.failures.push(FetchFailure { name: name.to_string(), error });
                }
            }
        }
    });

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    report
}

fn fetch_one<S: ResultSource + ?Sized>(source: &S, name: &str) -> Result<RunnerResultSet, FetchError> {
    debug!(runner = name, "fetch started");
    let page = panic::catch_unwind(AssertUnwindSafe(|| source.fetch(name)))
        .map_err(|payload| FetchError::Panicked(panic_message(payload.as_ref())))??;

    if page.results.is_empty() {
        return Err(FetchError::Empty);
    }
    Ok(RunnerResultSet::new(name, page.headers, page.results))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
