// ============================================================
// Layer 1: CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. Parses arguments with
// clap and hands the work to Layer 2 (application).
//
// Two commands are supported:
//   1. `predict`     : one prediction from flags, then exit
//   2. `interactive` : prompt for the form, predict, repeat
//
// Artifacts are loaded once, before the first prediction. If they
// cannot be loaded the command fails without prompting.

pub mod commands;
pub mod form;
pub mod render;

use anyhow::Result;
use clap::Parser;
use std::io::{self, BufRead, Write};

use crate::application::predict_use_case::{PredictOutcome, PredictUseCase};
use commands::{Commands, InteractiveArgs, PredictArgs};
use form::FormCollector;
use render::{render_prediction, MISSING_JOB_ROLE_WARNING};

#[derive(Parser, Debug)]
#[command(
    name = "time-to-hire",
    version,
    about = "Predict the expected hiring duration based on role, process, and candidate inputs."
)]
pub struct Cli {
    /// The subcommand to run (predict or interactive)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Predict(args)     => run_predict(args),
            Commands::Interactive(args) => run_interactive(args),
        }
    }
}

/// Handles the `predict` subcommand.
/// A missing job role prints the warning and exits successfully.
fn run_predict(args: PredictArgs) -> Result<()> {
    let config   = args.artifacts.resolve()?;
    let use_case = PredictUseCase::new(&config)?;

    match use_case.execute(&args.form.into())? {
        PredictOutcome::Predicted(p) => println!("{}", render_prediction(&p)),
        PredictOutcome::Rejected(_)  => println!("{MISSING_JOB_ROLE_WARNING}"),
    }
    Ok(())
}

/// Handles the `interactive` subcommand on stdin/stdout.
fn run_interactive(args: InteractiveArgs) -> Result<()> {
    let config   = args.artifacts.resolve()?;
    let use_case = PredictUseCase::new(&config)?;

    println!("⏳ Time to Hire Prediction");
    println!("Predict the expected hiring duration based on role, process, and candidate inputs.");

    let stdin  = io::stdin();
    let stdout = io::stdout();
    let mut form = FormCollector::new(stdin.lock(), stdout.lock());
    let served = interactive_session(&use_case, &mut form)?;

    tracing::info!("Interactive session ended after {} predictions", served);
    Ok(())
}

/// Form → predict → render, until the user quits or input ends.
/// Per-request failures are reported and the loop carries on.
/// Returns the number of successful predictions.
fn interactive_session<R: BufRead, W: Write>(
    use_case: &PredictUseCase,
    form:     &mut FormCollector<R, W>,
) -> Result<usize> {
    let mut served = 0;

    while let Some(record) = form.collect()? {
        match use_case.execute(&record) {
            Ok(PredictOutcome::Predicted(p)) => {
                served += 1;
                form.say(&render_prediction(&p))?;
            }
            Ok(PredictOutcome::Rejected(_)) => form.say(MISSING_JOB_ROLE_WARNING)?,
            Err(e) => {
                tracing::error!("{e:#}");
                form.say(&format!("❌ {e:#}"))?;
            }
        }

        if !form.ask_continue()? {
            break;
        }
    }

    Ok(served)
}
