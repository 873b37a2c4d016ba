//! Purpose: Hold top-level CLI command dispatch for `client-cli`.
//! Exports: `dispatch_command`.
//! Role: Keep `main.rs` focused on parse/bootstrap and delegate command execution.
//! Invariants: Each command loads the data file once and queries it read-only.
//! Invariants: Errors propagate unchanged; no partial output is printed before a failure.

use super::*;

use std::path::Path;

use client_cli::core::query::{EMAIL_FIELD, NAME_FIELD};
use client_cli::{QueryEngine, REQUIRED_FIELDS};

use crate::menu::MenuChoice;

pub(super) fn dispatch_command(
    command: Option<Command>,
    data_file: PathBuf,
    output: OutputOptions,
) -> Result<RunOutcome, Error> {
    match command {
        Some(Command::Completion { shell }) => {
            let mut cmd = Cli::command();
            clap_complete::aot::generate(shell, &mut cmd, "client-cli", &mut io::stdout());
            Ok(RunOutcome::ok())
        }
        Some(Command::Search { terms }) => {
            let (field, query) = split_search_terms(terms)?;
            run_search(&data_file, &field, &query, output)
        }
        Some(Command::Duplicates { field }) => {
            let field = field.unwrap_or_else(|| EMAIL_FIELD.to_string());
            run_duplicates(&data_file, &field, output)
        }
        Some(Command::Count) => {
            let engine = open_engine(&data_file)?;
            if output.json {
                emit_json(&render::count_json(engine.total_count()), output);
            } else {
                emit_text(&engine.total_count().to_string());
            }
            Ok(RunOutcome::ok())
        }
        Some(Command::Check) => {
            let engine = open_engine(&data_file)?;
            engine
                .dataset()
                .check_required_fields(REQUIRED_FIELDS)
                .map_err(|err| err.with_path(&data_file))?;
            if output.json {
                emit_json(&json!({ "ok": true, "count": engine.total_count() }), output);
            } else {
                emit_text(&format!(
                    "OK: {} record(s) with {}",
                    engine.total_count(),
                    REQUIRED_FIELDS.join(", ")
                ));
            }
            Ok(RunOutcome::ok())
        }
        None => run_menu(&data_file, output),
    }
}

fn split_search_terms(mut terms: Vec<String>) -> Result<(String, String), Error> {
    match terms.len() {
        1 => Ok((NAME_FIELD.to_string(), terms.remove(0))),
        2 => {
            let query = terms.remove(1);
            Ok((terms.remove(0), query))
        }
        _ => Err(Error::new(ErrorKind::Usage)
            .with_message("search query is required")
            .with_hint("Usage: client-cli search [FIELD] QUERY")),
    }
}

fn open_engine(data_file: &Path) -> Result<QueryEngine, Error> {
    client_cli::load(data_file).map(QueryEngine::new)
}

fn run_search(
    data_file: &Path,
    field: &str,
    query: &str,
    output: OutputOptions,
) -> Result<RunOutcome, Error> {
    let engine = open_engine(data_file)?;
    let results = engine.search_by_field(field, query)?;
    if output.json {
        emit_json(&render::search_json(field, query, &results), output);
    } else {
        emit_text(&render::search_text(
            field,
            query,
            &results,
            output.stdout_painter(),
        ));
    }
    Ok(RunOutcome::ok())
}

fn run_duplicates(data_file: &Path, field: &str, output: OutputOptions) -> Result<RunOutcome, Error> {
    let engine = open_engine(data_file)?;
    let groups = engine.find_duplicates_by_field(field)?;
    if output.json {
        emit_json(&render::duplicates_json(field, &groups), output);
    } else {
        emit_text(&render::duplicates_text(
            field,
            &groups,
            output.stdout_painter(),
        ));
    }
    Ok(RunOutcome::ok())
}

fn run_menu(data_file: &Path, output: OutputOptions) -> Result<RunOutcome, Error> {
    let stdin = io::stdin();
    let choice = menu::prompt_choice(&mut stdin.lock(), &mut io::stdout()).map_err(|err| {
        Error::new(ErrorKind::Io)
            .with_message("failed to read menu input")
            .with_source(err)
    })?;
    match choice {
        MenuChoice::Search { field, query } => run_search(data_file, &field, &query, output),
        MenuChoice::Duplicates { field } => run_duplicates(data_file, &field, output),
        MenuChoice::Exit => Ok(RunOutcome::ok()),
    }
}
