//! Print invoices to a writer (stdout in "clipboard" mode)

use std::io::Write;

use super::InvoiceDispatcher;
use crate::error::{TutorError, TutorResult};
use crate::services::PreparedInvoice;

const SEPARATOR: &str = "========================================";

/// Writes subject and body, separated by a rule between invoices
pub struct StdoutDispatcher<W: Write> {
    writer: W,
    written: usize,
}

impl StdoutDispatcher<std::io::Stdout> {
    /// Dispatcher writing to the process's stdout
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> StdoutDispatcher<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Give back the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> InvoiceDispatcher for StdoutDispatcher<W> {
    fn dispatch(&mut self, prepared: &PreparedInvoice) -> TutorResult<String> {
        let io_err = |e: std::io::Error| TutorError::Dispatch(e.to_string());

        if self.written > 0 {
            writeln!(self.writer, "\n{}\n", SEPARATOR).map_err(io_err)?;
        }
        writeln!(self.writer, "Subject: {}", prepared.invoice.subject).map_err(io_err)?;
        writeln!(self.writer).map_err(io_err)?;
        writeln!(self.writer, "{}", prepared.invoice.body).map_err(io_err)?;
        self.writer.flush().map_err(io_err)?;

        self.written += 1;
        Ok("stdout".to_string())
    }
}
