//! Purpose: `client-cli` entry point: argument parsing, logging setup, and error emission.
//! Role: Binary crate root; parses args, delegates commands, maps errors to exit codes.
//! Invariants: Results go to stdout; diagnostics and logs go to stderr.
//! Invariants: Errors are one `error:` line (plus hint/cause) on a terminal, JSON otherwise.
//! Invariants: Process exit code is derived from `to_exit_code`.
use std::ffi::OsString;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand, ValueEnum, ValueHint, error::ErrorKind as ClapErrorKind};
use clap_complete::aot::Shell;
use serde_json::{Map, Value, json};
use std::error::Error as StdError;
use tracing_subscriber::EnvFilter;

mod color_json;
mod command_dispatch;
mod data_paths;
mod menu;
mod render;

use client_cli::{Error, ErrorKind, to_exit_code};
use color_json::{Painter, Style};

const LOG_ENV: &str = "CLIENT_CLI_LOG";

#[derive(Copy, Clone, Debug)]
struct RunOutcome {
    exit_code: i32,
}

impl RunOutcome {
    fn ok() -> Self {
        Self { exit_code: 0 }
    }
}

fn main() {
    let exit_code = match run() {
        Ok(outcome) => outcome.exit_code,
        Err((err, output)) => {
            emit_error(&err, output);
            to_exit_code(err.kind())
        }
    };
    std::process::exit(exit_code);
}

fn run() -> Result<RunOutcome, (Error, OutputOptions)> {
    let cli = match Cli::try_parse_from(std::env::args_os().collect::<Vec<OsString>>()) {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => {
                err.print().map_err(|io_err| {
                    (
                        Error::new(ErrorKind::Io)
                            .with_message("failed to write help")
                            .with_source(io_err),
                        OutputOptions::default(),
                    )
                })?;
                return Ok(RunOutcome::ok());
            }
            _ => {
                return Err((
                    Error::new(ErrorKind::Usage)
                        .with_message(clap_error_summary(&err))
                        .with_hint("Run `client-cli --help` for usage."),
                    OutputOptions::default(),
                ));
            }
        },
    };

    init_tracing(cli.verbose);

    let output = OutputOptions {
        color: cli.color,
        json: cli.json,
    };
    let data_file = data_paths::resolve_data_file(cli.file);
    tracing::debug!(data_file = %data_file.display(), "resolved data file");

    command_dispatch::dispatch_command(cli.command, data_file, output)
        .map_err(add_internal_hint)
        .map_err(|err| (err, output))
}

#[derive(Parser)]
#[command(
    name = "client-cli",
    version,
    about = "Search and de-duplicate client records stored in a JSON file",
    long_about = None,
    after_help = r#"EXAMPLES
  $ client-cli search bob                    # full_name contains "bob" (case-insensitive)
  $ client-cli search email music.com
  $ client-cli duplicates                    # records sharing an email
  $ client-cli -f other.json duplicates phone
  $ client-cli                               # interactive menu

DATA FILE
  --file, else $CLIENT_CLI_DATA, else data/clients.json"#
)]
struct Cli {
    #[arg(
        short = 'f',
        long,
        global = true,
        help = "JSON data file (array of client objects)",
        value_hint = ValueHint::FilePath
    )]
    file: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        default_value = "auto",
        help = "Colorize output: auto, always, never"
    )]
    color: ColorMode,
    #[arg(long, global = true, help = "Emit results as JSON")]
    json: bool,
    #[arg(short, long, global = true, help = "Log debug events to stderr")]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "Case-insensitive substring search on a field (default: full_name)")]
    Search {
        #[arg(
            value_name = "FIELD|QUERY",
            num_args = 1..=2,
            required = true,
            help = "QUERY alone searches full_name; FIELD QUERY searches FIELD"
        )]
        terms: Vec<String>,
    },
    #[command(about = "List records sharing an exact field value (default: email)")]
    Duplicates {
        #[arg(help = "Field to group by")]
        field: Option<String>,
    },
    #[command(about = "Print the number of records in the data file")]
    Count,
    #[command(about = "Verify every record has id, full_name, and email")]
    Check,
    #[command(about = "Generate shell completions")]
    Completion {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Copy, Clone, Debug, Default, ValueEnum)]
enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    fn use_color(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

#[derive(Copy, Clone, Debug, Default)]
struct OutputOptions {
    color: ColorMode,
    json: bool,
}

impl OutputOptions {
    fn stdout_painter(self) -> Painter {
        Painter::new(self.color.use_color(io::stdout().is_terminal()))
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn emit_json(value: &Value, output: OutputOptions) {
    let text = if io::stdout().is_terminal() || matches!(output.color, ColorMode::Always) {
        output.stdout_painter().json_pretty(value)
    } else {
        serde_json::to_string(value)
            .unwrap_or_else(|_| "{\"error\":\"json encode failed\"}".to_string())
    };
    println!("{text}");
}

fn emit_text(text: &str) {
    println!("{text}");
}

fn emit_error(err: &Error, output: OutputOptions) {
    let is_tty = io::stderr().is_terminal();
    if is_tty && !output.json {
        let painter = Painter::new(output.color.use_color(is_tty));
        eprintln!("{}", error_text(err, painter));
        return;
    }

    let json = serde_json::to_string(&error_json(err)).unwrap_or_else(|_| {
        "{\"error\":{\"kind\":\"Internal\",\"message\":\"json encode failed\"}}".to_string()
    });
    eprintln!("{json}");
}

fn add_internal_hint(err: Error) -> Error {
    if err.kind() != ErrorKind::Internal || err.hint().is_some() {
        return err;
    }
    err.with_hint("Unexpected failure; rerun with --verbose for details.")
}

fn error_message(err: &Error) -> String {
    if let Some(message) = err.message() {
        return message.to_string();
    }
    match err.kind() {
        ErrorKind::Internal => "internal error".to_string(),
        ErrorKind::Usage => "usage error".to_string(),
        ErrorKind::FileNotFound => "data file not found".to_string(),
        ErrorKind::MalformedInput => "invalid JSON format".to_string(),
        ErrorKind::InvalidShape => "unexpected data shape".to_string(),
        ErrorKind::UnknownField => "unknown field".to_string(),
        ErrorKind::Io => "i/o error".to_string(),
    }
}

fn error_causes(err: &Error) -> Vec<String> {
    let mut causes = Vec::new();
    let mut cur = err.source();
    while let Some(source) = cur {
        causes.push(source.to_string());
        cur = source.source();
    }
    causes
}

fn error_json(err: &Error) -> Value {
    let mut inner = Map::new();
    inner.insert("kind".to_string(), json!(format!("{:?}", err.kind())));
    inner.insert("message".to_string(), json!(error_message(err)));
    if let Some(hint) = err.hint() {
        inner.insert("hint".to_string(), json!(hint));
    }
    if let Some(path) = err.path() {
        inner.insert("path".to_string(), json!(path.display().to_string()));
    }
    if let Some(index) = err.index() {
        inner.insert("index".to_string(), json!(index));
    }
    if let Some(field) = err.field() {
        inner.insert("field".to_string(), json!(field));
    }
    let causes = error_causes(err);
    if !causes.is_empty() {
        inner.insert("causes".to_string(), json!(causes));
    }

    let mut outer = Map::new();
    outer.insert("error".to_string(), Value::Object(inner));
    Value::Object(outer)
}

fn error_text(err: &Error, painter: Painter) -> String {
    let mut lines = vec![format!(
        "{} {}",
        painter.paint("error:", Style::Error),
        error_message(err)
    )];
    if let Some(hint) = err.hint() {
        lines.push(format!("{} {hint}", painter.paint("hint:", Style::Warn)));
    }
    if let Some(cause) = error_causes(err).first() {
        lines.push(format!("{} {cause}", painter.paint("caused by:", Style::Warn)));
    }
    lines.join("\n")
}

fn clap_error_summary(err: &clap::Error) -> String {
    for line in err.to_string().lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Some(rest) = trimmed.strip_prefix("error:") {
            return rest.trim().to_string();
        }
        return trimmed.to_string();
    }
    "invalid arguments".to_string()
}
