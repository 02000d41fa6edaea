use super::modes::{estimate_single, SingleEstimate};
use super::report::{render_catalog, render_history, render_single, render_tips};
use crate::billing::{optimization_tips, CalculationRecord, RateCatalog};
use crate::debug_println;
use crate::session::SessionHistory;
use crate::utils::parse_usage;
use std::io::{self, BufRead, Write};

const HELP: &str = "Commands:
  calc <resource> <usage>   price a resource
  save                      save the last calculation
  history                   show recent saved calculations
  tips <resource>           show optimization tips
  catalog                   list resources and rates
  help                      show this help
  quit                      leave the session
";

/// Interactive calculator session over line-based input
///
/// The session owns nothing global: the catalog is borrowed and the history is
/// passed in by the caller.
pub struct Shell<'a> {
    catalog: &'a RateCatalog,
    currency: &'a str,
    last: Option<SingleEstimate>,
}

impl<'a> Shell<'a> {
    pub fn new(catalog: &'a RateCatalog, currency: &'a str) -> Self {
        Self {
            catalog,
            currency,
            last: None,
        }
    }

    /// Read commands until `quit` or end of input
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        output: &mut W,
        history: &mut SessionHistory,
    ) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if matches!(line, "quit" | "exit") {
                break;
            }

            let reply = self.execute(line, history);
            output.write_all(reply.as_bytes())?;
            output.flush()?;
        }

        debug_println!("Session ended with {} saved calculations", history.len());
        Ok(())
    }

    /// Execute one command line and return the text to show
    pub fn execute(&mut self, line: &str, history: &mut SessionHistory) -> String {
        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();

        match (command, args.as_slice()) {
            ("calc", [id, usage]) => self.calc(id, usage),
            ("calc", _) => "Usage: calc <resource> <usage>\n".to_string(),
            ("save", []) => match &self.last {
                Some(estimate) => {
                    history.record(CalculationRecord::from_line_item(
                        &estimate.entry,
                        &estimate.item,
                    ));
                    "Calculation saved!\n".to_string()
                }
                None => "Nothing to save: run calc first\n".to_string(),
            },
            ("history", []) => render_history(history, self.currency),
            ("tips", [id]) => match self.catalog.get(id) {
                Ok(entry) => render_tips(&optimization_tips(&entry.id)),
                Err(e) => format!("Error: {}\n", e),
            },
            ("catalog", []) => render_catalog(self.catalog, self.currency),
            ("help", _) => HELP.to_string(),
            _ => format!("Unknown command '{}'. Type 'help' for commands\n", line),
        }
    }

    fn calc(&mut self, id: &str, usage: &str) -> String {
        let usage = match parse_usage(usage) {
            Ok(usage) => usage,
            Err(e) => return format!("Error: {}\n", e),
        };

        match estimate_single(self.catalog, id, usage) {
            Ok(estimate) => {
                let out = render_single(&estimate, self.currency);
                self.last = Some(estimate);
                out
            }
            Err(e) => format!("Error: {}\n", e),
        }
    }
}
