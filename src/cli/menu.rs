//! The interactive numbered menu.
//!
//! The menu reads choices and prompts from any `BufRead` and writes to any `Write`,
//! so the whole loop can be driven from a byte buffer in tests. Each action runs to
//! completion before the next prompt. A failing action reports its error and the
//! loop carries on; only end of input or the quit option ends it.

use crate::constants::LIST_TIMESTAMP_FORMAT;
use crate::errors::{AppError, AppResult};
use crate::journal::Entry;
use crate::ops::{select_entry, Journal};
use crate::sentiment::SentimentProvider;
use crate::store::EntryStore;
use std::io::{BufRead, Write};
use tracing::{error, info_span};
use uuid::Uuid;

const MENU: &str = "\n=== AURA Journaling CLI ===
1) Add new entry
2) View all entries
3) Search by sentiment
4) Search by keyword
5) Delete an entry
6) Mood report
7) Quit";

/// Menu actions, keyed by their number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Add,
    List,
    SearchSentiment,
    SearchKeyword,
    Delete,
    Report,
    Quit,
}

impl Action {
    fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Action::Add),
            "2" => Some(Action::List),
            "3" => Some(Action::SearchSentiment),
            "4" => Some(Action::SearchKeyword),
            "5" => Some(Action::Delete),
            "6" => Some(Action::Report),
            "7" => Some(Action::Quit),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Action::Add => "add",
            Action::List => "list",
            Action::SearchSentiment => "search_sentiment",
            Action::SearchKeyword => "search_keyword",
            Action::Delete => "delete",
            Action::Report => "report",
            Action::Quit => "quit",
        }
    }
}

/// Drives a [`Journal`] from line-oriented input.
pub struct Menu<'j, P, S, R, W> {
    journal: &'j mut Journal<P, S>,
    input: R,
    output: W,
}

impl<'j, P, S, R, W> Menu<'j, P, S, R, W>
where
    P: SentimentProvider,
    S: EntryStore,
    R: BufRead,
    W: Write,
{
    pub fn new(journal: &'j mut Journal<P, S>, input: R, output: W) -> Self {
        Self {
            journal,
            input,
            output,
        }
    }

    /// Runs the menu until the user quits or input ends.
    ///
    /// # Errors
    ///
    /// Only I/O failures on the menu's own input or output end the loop with an
    /// error; action failures are reported and the loop continues.
    pub fn run(&mut self) -> AppResult<()> {
        loop {
            writeln!(self.output, "{}", MENU)?;
            let Some(choice) = self.prompt("Choose an option: ")? else {
                writeln!(self.output, "\nGoodbye!")?;
                return Ok(());
            };

            let Some(action) = Action::from_choice(&choice) else {
                writeln!(self.output, "Invalid choice. Please enter a number from 1 to 7.")?;
                continue;
            };

            if action == Action::Quit {
                writeln!(self.output, "Goodbye!")?;
                return Ok(());
            }

            let span = info_span!(
                "menu_action",
                action = action.name(),
                correlation_id = %Uuid::new_v4()
            );
            let _guard = span.enter();

            match self.dispatch(action) {
                Ok(()) => {}
                Err(AppError::Validation(msg)) => {
                    writeln!(self.output, "{}. Returning to menu.", capitalize(&msg))?;
                }
                Err(AppError::Io(e)) => return Err(AppError::Io(e)),
                Err(e) => {
                    error!("Action {} failed: {}", action.name(), e);
                    writeln!(self.output, "Error: {}", e)?;
                }
            }
        }
    }

    fn dispatch(&mut self, action: Action) -> AppResult<()> {
        match action {
            Action::Add => self.add_entry(),
            Action::List => self.list_entries(),
            Action::SearchSentiment => self.search_by_sentiment(),
            Action::SearchKeyword => self.search_by_keyword(),
            Action::Delete => self.delete_entry(),
            Action::Report => self.mood_report(),
            Action::Quit => Ok(()),
        }
    }

    /// Writes `message`, then reads one line. `None` means input has ended.
    fn prompt(&mut self, message: &str) -> AppResult<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn add_entry(&mut self) -> AppResult<()> {
        writeln!(self.output, "\n--- Add new journal entry ---")?;
        let Some(text) = self.prompt("Write your entry:\n> ")? else {
            return Ok(());
        };

        if text.trim().is_empty() {
            writeln!(self.output, "No text entered. Returning to menu.")?;
            return Ok(());
        }

        let entry = self.journal.add_entry(&text)?;

        match &entry.sentiment {
            Some(sentiment) => {
                writeln!(self.output, "\nSentiment result:")?;
                writeln!(
                    self.output,
                    "{}: {}",
                    capitalize(&sentiment.label),
                    percent(sentiment.score)
                )?;
            }
            None => writeln!(
                self.output,
                "\nSentiment analysis unavailable; saving entry as unrated."
            )?,
        }
        if let Some(tag) = entry.tag {
            writeln!(self.output, "Tag: {}", tag)?;
        }
        if let Some(id) = entry.id {
            writeln!(self.output, "\nSaved entry with id: {}", id)?;
        }
        Ok(())
    }

    fn list_entries(&mut self) -> AppResult<()> {
        writeln!(self.output, "\n--- Your journal entries ---")?;
        let entries = self.journal.list_entries()?;

        if entries.is_empty() {
            writeln!(self.output, "No entries found.")?;
            return Ok(());
        }

        writeln!(self.output, "Total entries: {}", entries.len())?;
        self.print_entries(&entries)
    }

    fn search_by_sentiment(&mut self) -> AppResult<()> {
        writeln!(self.output, "\n--- Search by sentiment ---")?;
        let Some(label) = self.prompt("Sentiment (positive/neutral/negative): ")? else {
            return Ok(());
        };

        let entries = self.journal.entries_with_label(label.trim())?;
        self.print_results(&entries)
    }

    fn search_by_keyword(&mut self) -> AppResult<()> {
        writeln!(self.output, "\n--- Search by keyword ---")?;
        let Some(phrase) = self.prompt("Search phrase: ")? else {
            return Ok(());
        };

        let entries = self.journal.entries_matching(&phrase)?;
        self.print_results(&entries)
    }

    fn delete_entry(&mut self) -> AppResult<()> {
        writeln!(self.output, "\n--- Delete an entry ---")?;
        let entries = self.journal.list_entries()?;

        if entries.is_empty() {
            writeln!(self.output, "No entries to delete.")?;
            return Ok(());
        }

        self.print_entries(&entries)?;
        let Some(selection) = self.prompt("\nEntry number to delete: ")? else {
            return Ok(());
        };

        let entry = select_entry(&entries, &selection)?;
        let id = entry
            .id
            .ok_or_else(|| AppError::Validation("selected entry has no id".to_string()))?;

        let question = format!(
            "Delete entry #{} \"{}\"? (y/N): ",
            selection.trim(),
            preview(&entry.text)
        );
        let confirmed = self
            .prompt(&question)?
            .is_some_and(|answer| answer.trim() == "y");

        if !confirmed {
            writeln!(self.output, "Deletion cancelled.")?;
            return Ok(());
        }

        if self.journal.delete_entry(id)? {
            writeln!(self.output, "Entry deleted.")?;
        } else {
            writeln!(self.output, "Entry not found; it may already have been deleted.")?;
        }
        Ok(())
    }

    fn mood_report(&mut self) -> AppResult<()> {
        writeln!(self.output, "\n--- Mood report ---")?;
        let report = self.journal.mood_report()?;

        if report.total == 0 {
            writeln!(self.output, "No entries yet.")?;
            return Ok(());
        }

        write!(self.output, "{}", report)?;
        Ok(())
    }

    fn print_results(&mut self, entries: &[Entry]) -> AppResult<()> {
        if entries.is_empty() {
            writeln!(self.output, "No matching entries found.")?;
            return Ok(());
        }

        writeln!(self.output, "Found {} entries.", entries.len())?;
        self.print_entries(entries)
    }

    /// Prints entries newest first, numbered so the newest has the highest number.
    fn print_entries(&mut self, entries: &[Entry]) -> AppResult<()> {
        let total = entries.len();
        for (i, entry) in entries.iter().enumerate() {
            writeln!(
                self.output,
                "\nEntry #{} ({})",
                total - i,
                entry.timestamp.format(LIST_TIMESTAMP_FORMAT)
            )?;
            writeln!(self.output, "  Text: {}", entry.text)?;
            if let Some(sentiment) = &entry.sentiment {
                writeln!(
                    self.output,
                    "  Sentiment: {} ({})",
                    sentiment.label,
                    percent(sentiment.score)
                )?;
            }
            if let Some(tag) = entry.tag {
                writeln!(self.output, "  Tag: {}", tag)?;
            }
        }
        Ok(())
    }
}

fn percent(score: f64) -> String {
    format!("{:.2}%", score * 100.0)
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn preview(text: &str) -> String {
    const MAX_CHARS: usize = 40;
    if text.chars().count() <= MAX_CHARS {
        text.to_string()
    } else {
        let cut: String = text.chars().take(MAX_CHARS).collect();
        format!("{}...", cut)
    }
}
