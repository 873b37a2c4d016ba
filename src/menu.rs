//! Purpose: Interactive menu shown when `client-cli` runs without a subcommand.
//! Exports: `MenuChoice`, `prompt_choice`.
//! Role: Collects one action from the user; the caller executes it.
//! Invariants: Invalid menu input re-prompts; EOF on input is treated as exit.
//! Invariants: Blank field answers fall back to `full_name` (search) or `email` (duplicates).

use std::io::{self, BufRead, Write};

use client_cli::core::query::{EMAIL_FIELD, NAME_FIELD};

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum MenuChoice {
    Search { field: String, query: String },
    Duplicates { field: String },
    Exit,
}

const BANNER: &str = "ClientCli - Client Data Management Tool
=========================================

What would you like to do?
1. Search records
2. Find duplicates
3. Exit
";

pub(crate) fn prompt_choice<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> io::Result<MenuChoice> {
    loop {
        writeln!(out, "{BANNER}")?;
        let Some(choice) = ask(input, out, "Enter your choice (1-3): ")? else {
            return Ok(MenuChoice::Exit);
        };
        match choice.as_str() {
            "1" => return prompt_search(input, out),
            "2" => return prompt_duplicates(input, out),
            "3" => {
                writeln!(out, "Goodbye!")?;
                return Ok(MenuChoice::Exit);
            }
            _ => writeln!(out, "Invalid choice. Please enter 1, 2, or 3.")?,
        }
    }
}

fn prompt_search<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<MenuChoice> {
    writeln!(out)?;
    let prompt = format!("Enter field to search (or press Enter for '{NAME_FIELD}'): ");
    let Some(field) = ask(input, out, &prompt)? else {
        return Ok(MenuChoice::Exit);
    };
    let Some(query) = ask(input, out, "Enter search query: ")? else {
        return Ok(MenuChoice::Exit);
    };
    if query.is_empty() {
        writeln!(out, "Search query cannot be empty.")?;
        return Ok(MenuChoice::Exit);
    }
    Ok(MenuChoice::Search {
        field: or_default(field, NAME_FIELD),
        query,
    })
}

fn prompt_duplicates<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<MenuChoice> {
    writeln!(out)?;
    let prompt = format!("Enter field to check for duplicates (or press Enter for '{EMAIL_FIELD}'): ");
    let Some(field) = ask(input, out, &prompt)? else {
        return Ok(MenuChoice::Exit);
    };
    Ok(MenuChoice::Duplicates {
        field: or_default(field, EMAIL_FIELD),
    })
}

/// Print `prompt`, read one line. `None` on EOF.
fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> io::Result<Option<String>> {
    write!(out, "{prompt}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn or_default(value: String, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value
    }
}
