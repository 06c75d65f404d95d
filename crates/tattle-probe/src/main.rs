mod logging;

use std::{env, fs, io, thread};

use anyhow::{Context, Result};
use tattle::{internal_error, Cause, InternalReporter, LogSink, Report};

use logging::{init_logging, LoggingConfig};

const DEFAULT_THREADS: usize = 4;
const LINES_PER_THREAD: usize = 3;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let threads = match env::args().nth(1) {
        Some(arg) => arg
            .parse::<usize>()
            .with_context(|| format!("thread count must be a non-negative integer, got {:?}", arg))?,
        None => DEFAULT_THREADS,
    };

    log::info!("reporting each form once to stderr");
    report_each_form();

    log::info!("reporting from {} threads", threads);
    report_concurrently(threads);

    log::info!("routing one report through the log facade");
    let routed = InternalReporter::new(LogSink::default());
    internal_error!(in routed; "routed through {0}", "env_logger");

    log::info!("done");
    Ok(())
}

fn report_each_form() {
    tattle::error("plain message");
    tattle::error_fmt("value={0}", &[&42]);
    tattle::error_fmt("{0} is present, {1} is missing", &[&"first"]);
    tattle::error_fmt("malformed {0", &[&1]);

    let path = env::temp_dir().join("tattle-probe").join("missing.log");
    let err = match fs::read_to_string(&path) {
        Ok(_) => io::Error::other("probe file unexpectedly present"),
        Err(err) => err,
    };
    let cause = Cause::of(&err);

    tattle::error_cause(&cause);
    tattle::error_cause(&Cause::new("EmptyError", ""));
    tattle::error_with(&cause, "cannot read log file");
    tattle::error_with_fmt(&cause, "cannot read {0}", &[&path.display()]);
    tattle::report(Report::text("unified entry point").with_cause(&cause));
}

fn report_concurrently(threads: usize) {
    thread::scope(|s| {
        for t in 0..threads {
            s.spawn(move || {
                for i in 0..LINES_PER_THREAD {
                    internal_error!("thread {0} line {1}", t, i);
                }
            });
        }
    });
}
