use std::io::{self, BufRead, Write};
use std::num::NonZeroUsize;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::Local;
use clap::Parser;

use setlog::error::{ValidationError, WorkoutError};
use setlog::session::{Retention, Session};
use setlog::store::{load_last_summary, save_last_summary};
use setlog::summary::SessionReport;
use setlog::validation::RawSetInput;
use setlog::volume::VolumePolicy;
use setlog::workout::{SetOutcome, Workout, parse_set_count};

/// Strength training set tracker with 1RM and effective volume estimates.
#[derive(Parser, Debug)]
#[command(name = "setlog")]
#[command(about = "Track a training session set by set: 1RM, rep maxes and effective volume")]
#[command(version)]
struct Args {
    /// Number of sets planned for this session (1-20).
    /// Prompted for when omitted. Can also be set via SETLOG_SETS.
    #[arg(short, long, env = "SETLOG_SETS", value_parser = parse_sets_arg)]
    sets: Option<u32>,

    /// Effective volume policy, fixed for the whole session.
    #[arg(long, value_enum, env = "SETLOG_POLICY", default_value_t = VolumePolicy::Capped)]
    policy: VolumePolicy,

    /// Keep only the most recent N sets. Keeps every set when omitted.
    #[arg(long, value_name = "N", env = "SETLOG_RETAIN")]
    retain: Option<NonZeroUsize>,

    /// File holding the summary of the last completed session.
    #[arg(
        long,
        value_name = "PATH",
        env = "SETLOG_SUMMARY_FILE",
        default_value = "last_session.txt"
    )]
    summary_file: PathBuf,

    /// Write one JSON line per accepted set and the final report as JSON
    /// on stdout. Prompts and input errors go to stderr.
    #[arg(long)]
    json: bool,
}

fn parse_sets_arg(raw: &str) -> Result<u32, String> {
    parse_set_count(raw).map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments
    let args = Args::parse();

    match load_last_summary(&args.summary_file) {
        Ok(Some(previous)) if args.json => eprintln!("Last session: {}", previous),
        Ok(Some(previous)) => println!("Last session: {}", previous),
        Ok(None) => {}
        Err(e) => log::warn!("Could not load last session summary: {}", e),
    }

    let session = Session::new(args.policy, Retention::from_capacity(args.retain));

    // Keep stdout machine-readable in JSON mode
    let mut prompts: Box<dyn Write> = if args.json {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    };
    let report = run_session(
        &mut io::stdin().lock(),
        &mut io::stdout(),
        &mut prompts,
        args.sets,
        session,
        args.json,
    )?;

    if args.json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!();
        println!("=== Session {} ===", Local::now().date_naive());
        println!("{}", report);
    }

    save_last_summary(&args.summary_file, &report.summary).with_context(|| {
        format!(
            "Failed to save session summary to {}",
            args.summary_file.display()
        )
    })?;
    log::info!("Saved summary to {}", args.summary_file.display());

    Ok(())
}

/// Runs one interactive session to completion and returns its report.
///
/// Reads the set count (unless `planned` is given) and then one
/// `weight reps rir` line per set. Invalid lines are reported and asked
/// again. Ending the input early is an error. Prompts and input errors are
/// written to `prompts`, results to `out`. With `json`, each accepted set
/// is written to `out` as one JSON line instead of the estimate table.
fn run_session<R: BufRead, W: Write, P: Write>(
    input: &mut R,
    out: &mut W,
    prompts: &mut P,
    planned: Option<u32>,
    session: Session,
    json: bool,
) -> Result<SessionReport> {
    let target_sets = match planned {
        Some(n) => n,
        None => prompt_set_count(input, prompts)?,
    };

    let mut workout = Workout::new(target_sets, session);
    log::info!(
        "Starting session: {} sets, {} policy",
        target_sets,
        workout.session().policy()
    );

    while !workout.is_complete() {
        write!(
            prompts,
            "Set {}/{} (weight reps rir): ",
            workout.next_set_number(),
            workout.target_sets()
        )?;
        prompts.flush()?;

        let Some(line) = read_line(input)? else {
            bail!(
                "input ended after {} of {} sets",
                workout.session().len(),
                target_sets
            );
        };

        match workout.submit(&RawSetInput::from_line(&line)) {
            Ok(outcome) if json => writeln!(out, "{}", serde_json::to_string(&outcome)?)?,
            Ok(outcome) => print_outcome(out, &outcome)?,
            Err(WorkoutError::Invalid(errors)) => print_errors(prompts, &errors)?,
            Err(e) => return Err(e.into()),
        }
    }

    log::info!("Session complete");
    Ok(SessionReport::from_session(workout.session()))
}

/// Asks for the set count until a valid one is entered.
fn prompt_set_count<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<u32> {
    loop {
        write!(out, "Number of sets: ")?;
        out.flush()?;

        let Some(line) = read_line(input)? else {
            bail!("input ended before the number of sets was entered");
        };

        match parse_set_count(&line) {
            Ok(n) => return Ok(n),
            Err(e) => print_errors(out, &[e])?,
        }
    }
}

/// Reads one line, returning None at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read from input")?;
    Ok((read > 0).then_some(line))
}

fn print_errors<W: Write>(out: &mut W, errors: &[ValidationError]) -> io::Result<()> {
    for error in errors {
        writeln!(out, "• {}", error)?;
    }
    Ok(())
}

fn print_outcome<W: Write>(out: &mut W, outcome: &SetOutcome) -> io::Result<()> {
    writeln!(
        out,
        "Current Total Volume: {:.2}",
        outcome.total_effective_volume
    )?;
    writeln!(out, "Estimated 1RM: {:.2}", outcome.one_rep_max)?;

    // No table after the last set
    if outcome.remaining_sets == 0 {
        return Ok(());
    }

    writeln!(out, "Rep Max Estimates:")?;
    let recommended = outcome.recommendation.map(|r| r.reps);
    for p in &outcome.projections {
        let label = if Some(p.reps) == recommended {
            " (Recommended)"
        } else {
            ""
        };
        writeln!(
            out,
            "{:>2}RM: {:.2} (Estimated Total Volume: {:.2}){}",
            p.reps, p.weight, p.total_volume, label
        )?;
    }
    Ok(())
}
