use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use wire_gauge::form::{FormField, GaugeForm, Submission};
use wire_gauge::{logging, session, DisplayConfig, GaugeError};

#[derive(Debug, Parser)]
#[command(name = "awg")]
#[command(about = "Convert between AWG sizes and conductor diameter or area")]
struct Cli {
    /// TOML file overriding the displayed decimals
    #[arg(long)]
    config: Option<PathBuf>,

    /// Field to convert from: awg, mm, in, mm2, in2 or kcmil
    #[arg(long, requires = "value")]
    field: Option<FormField>,

    /// Value entered into --field
    #[arg(long, requires = "field")]
    value: Option<String>,

    /// Print every gauge from 0 to 40 and exit
    #[arg(long, conflicts_with_all = ["field", "value"])]
    table: bool,

    #[arg(short, long, help = "Enable verbose output")]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.verbose);
    tracing::debug!(?cli, "parsed command line");

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(%err, "awg failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode, GaugeError> {
    let display = match &cli.config {
        Some(path) => DisplayConfig::load(path)?,
        None => DisplayConfig::default(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.table {
        session::write_table(&mut out, &display)?;
        return Ok(ExitCode::SUCCESS);
    }

    let mut form = GaugeForm::new(display);
    if let (Some(field), Some(value)) = (cli.field, cli.value.as_deref()) {
        let outcome = form.submit(field, value);
        session::write_form(&mut out, &form)?;
        out.flush()?;
        return Ok(match outcome {
            Submission::Updated(_) => ExitCode::SUCCESS,
            Submission::Cleared | Submission::Rejected(_) => ExitCode::FAILURE,
        });
    }

    session::run(&mut form, io::stdin().lock(), &mut out)?;
    Ok(ExitCode::SUCCESS)
}
