//! `modthree` - remainder of a binary number divided by three.
//!
//! Usage: `modthree --in=<BINARY>`. The value must be attached with `=`;
//! surrounding whitespace in a quoted value is trimmed.

use clap::error::ErrorKind;
use clap::Parser;
use dfa_engine::modthree::mod_three;
use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Computation succeeded (also used for `--help` and `--version`).
const EXIT_OK: u8 = 0;
/// The machine failed on validated input.
const EXIT_RUNTIME_ERR: u8 = 1;
/// Missing, malformed or non-binary arguments.
const EXIT_INVALID_ARGS: u8 = 2;

/// Remainder of a binary number divided by three
#[derive(Parser, Debug)]
#[command(name = "modthree", version, long_about = None)]
#[command(after_help = "Example: modthree --in=1101  or  modthree --in=\"   1101   \"")]
struct Cli {
    /// Binary number, most significant bit first (no space after --in)
    #[arg(long = "in", value_name = "BINARY", require_equals = true)]
    input: Option<String>,
}

fn is_binary(input: &str) -> bool {
    !input.is_empty() && input.chars().all(|c| matches!(c, '0' | '1'))
}

/// Parse `args`, compute the remainder and report it. Returns the exit code.
fn run<I, T>(args: I, stdout: &mut impl Write, stderr: &mut impl Write) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => {
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    let _ = write!(stdout, "{err}");
                    EXIT_OK
                }
                _ => {
                    let _ = write!(stderr, "{err}");
                    EXIT_INVALID_ARGS
                }
            };
        }
    };

    let input = cli.input.as_deref().map(str::trim).unwrap_or_default();
    if input.is_empty() {
        let _ = writeln!(stderr, "provide --in=<binary>");
        return EXIT_INVALID_ARGS;
    }
    if !is_binary(input) {
        let _ = writeln!(stderr, "invalid input {input:?}: must contain only 0 and 1");
        return EXIT_INVALID_ARGS;
    }

    tracing::debug!(input, "computing remainder");
    match mod_three(input) {
        Ok(remainder) => {
            let _ = writeln!(stdout, "mod_three({input:?}) => {remainder}");
            EXIT_OK
        }
        Err(err) => {
            tracing::error!(error = %err, "computation failed");
            let _ = writeln!(stderr, "error: {err}");
            EXIT_RUNTIME_ERR
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time(),
        )
        .init();

    let code = run(
        std::env::args_os(),
        &mut std::io::stdout(),
        &mut std::io::stderr(),
    );
    ExitCode::from(code)
}
