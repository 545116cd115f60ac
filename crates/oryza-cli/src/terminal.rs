//! Line-oriented terminal front end.
//!
//! Views go to `out` so they can be piped; dialogs and notifications go to
//! `err`. With `json` set, views are written as pretty JSON.

use std::fmt::Display;
use std::io::{self, BufRead, Stderr, Stdin, StdinLock, Stdout, Write};

use serde::Serialize;

use oryza_app::{
    ContactView, DetailView, Dialog, GalleryView, Notification, NotificationKind, Notifier,
    OrdersView, Renderer,
};

/// Implements the controller's UI capabilities over a reader and two writers.
#[derive(Debug)]
pub struct TerminalUi<R, O, E> {
    input: R,
    out: O,
    err: E,
    assume_yes: bool,
    json: bool,
}

impl TerminalUi<StdinLock<'static>, Stdout, Stderr> {
    /// A front end on the process's standard streams.
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout(), io::stderr())
    }
}

impl<R, O, E> TerminalUi<R, O, E>
where
    R: BufRead,
    O: Write,
    E: Write,
{
    /// Creates a front end over the given streams.
    pub fn new(input: R, out: O, err: E) -> Self {
        Self {
            input,
            out,
            err,
            assume_yes: false,
            json: false,
        }
    }

    /// Answers every confirmation with yes.
    pub fn with_assume_yes(mut self, assume_yes: bool) -> Self {
        self.assume_yes = assume_yes;
        self
    }

    /// Writes views as JSON instead of text.
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Consumes the front end, returning its writers.
    pub fn into_writers(self) -> (O, E) {
        (self.out, self.err)
    }

    fn ask(&mut self, question: &str) -> Option<String> {
        if let Err(e) = write!(self.err, "{question} ").and_then(|()| self.err.flush()) {
            tracing::warn!(error = %e, "Failed to write prompt");
        }

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read answer");
                None
            }
        }
    }

    fn show<V: Display + Serialize>(&mut self, view: &V) {
        let written = if self.json {
            match serde_json::to_string_pretty(view) {
                Ok(json) => writeln!(self.out, "{json}"),
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to serialize view");
                    return;
                }
            }
        } else {
            write!(self.out, "{view}")
        };

        if let Err(e) = written {
            tracing::warn!(error = %e, "Failed to write view");
        }
    }
}

impl<R, O, E> Dialog for TerminalUi<R, O, E>
where
    R: BufRead,
    O: Write,
    E: Write,
{
    fn confirm(&mut self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        self.ask(&format!("{message} [y/N]"))
            .map(|answer| matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
            .unwrap_or(false)
    }

    fn prompt(&mut self, message: &str, current: &str) -> Option<String> {
        self.ask(&format!("{message} [{current}]"))
    }
}

impl<R, O, E> Notifier for TerminalUi<R, O, E>
where
    R: BufRead,
    O: Write,
    E: Write,
{
    fn notify(&mut self, notification: Notification) {
        let marker = match notification.kind {
            NotificationKind::Success => "✓",
            NotificationKind::Failure => "✗",
        };
        if let Err(e) = writeln!(self.err, "{marker} {notification}") {
            tracing::warn!(error = %e, "Failed to write notification");
        }
    }
}

impl<R, O, E> Renderer for TerminalUi<R, O, E>
where
    R: BufRead,
    O: Write,
    E: Write,
{
    fn render_gallery(&mut self, view: &GalleryView) {
        self.show(view);
    }

    fn render_detail(&mut self, view: &DetailView) {
        self.show(view);
    }

    fn render_orders(&mut self, view: &OrdersView) {
        self.show(view);
    }

    fn render_contact(&mut self, view: &ContactView) {
        self.show(view);
    }
}
