//! Terminal prompt for choosing an app

use std::io::{self, IsTerminal};

use colored::Colorize;
use dialoguer::{Input, theme::ColorfulTheme};
use log::warn;

use crate::error::Result;
use crate::models::display::AppListDisplay;
use crate::output::table;
use crate::select::{AppListing, Prompt};

/// Prints the numbered listing to stderr and reads a choice from the terminal
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn choose(&mut self, listing: &AppListing) -> Result<Option<String>> {
        if !io::stdin().is_terminal() {
            warn!("stdin is not a terminal; pass an app id or list number instead");
            return Ok(None);
        }

        eprintln!("{}", "Available apps".bold());
        eprintln!("{}", table::format_table(&AppListDisplay::numbered(listing)));

        let count = listing.len();
        let answer = Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Enter the number (1-{}) or id of the app", count))
            .allow_empty(true)
            .validate_with(|input: &String| check_answer(input, count))
            .interact_text();

        match answer {
            Ok(a) => Ok(Some(a)),
            Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::Interrupted => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Reject numbers outside the listing; anything else is checked later
fn check_answer(input: &str, count: usize) -> std::result::Result<(), String> {
    match input.trim().parse::<i64>() {
        Ok(n) if n < 1 || n as u64 > count as u64 => {
            Err(format!("Enter a number between 1 and {}", count))
        }
        _ => Ok(()),
    }
}
