use clap::error::ErrorKind;
use clap::Parser;
use std::io::{self, Write};
use stic_bench::harness::{average, run_suite};
use stic_bench::report::write_report;
use stic_bench::schema::SticReport;

#[derive(Parser, Debug, Default)]
#[command(name = "stic-bench", version)]
#[command(about = "STIC micro-benchmark: three runs of nine kernels, averaged (smaller is better)")]
struct Args {
    /// Print a JSON report instead of the text table; progress goes to stderr.
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Anything else on the command line is ignored.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    _rest: Vec<String>,
}

/// Never fails: arguments clap cannot make sense of fall back to a plain run.
fn parse_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(_) => Args::default(),
    }
}

fn now_utc_unix() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    format!("unix:{secs}")
}

fn main() -> io::Result<()> {
    let args = parse_args();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.json {
        let runs = run_suite(&mut io::stderr().lock())?;
        let report = SticReport::from_runs(&runs, now_utc_unix());
        let json = serde_json::to_string_pretty(&report).map_err(io::Error::other)?;
        writeln!(out, "{json}")?;
        return out.flush();
    }

    let [one, two, three] = run_suite(&mut out)?;
    write_report(&mut out, &average(&one, &two, &three))
}
