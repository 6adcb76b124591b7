//! Mail draft files ("draft" mode)
//!
//! Each invoice becomes an RFC 822 style `.eml` file marked unsent, which
//! desktop mail clients open as an editable draft. The draft id returned to
//! the caller is the file stem.

use std::fs;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::Local;
use uuid::Uuid;

use super::InvoiceDispatcher;
use crate::error::{TutorError, TutorResult};
use crate::services::PreparedInvoice;

/// Writes drafts into a directory
#[derive(Debug, Clone)]
pub struct DraftDirectory {
    dir: PathBuf,
}

impl DraftDirectory {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path a draft id is stored at
    pub fn path_for(&self, draft_id: &str) -> PathBuf {
        self.dir.join(format!("{}.eml", draft_id))
    }
}

/// Lower-case ASCII slug of a recipient name for file names
fn slug(s: &str) -> String {
    let mut out = String::new();
    for c in s.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.ends_with('-') && !out.is_empty() {
            out.push('-');
        }
    }
    let trimmed = out.trim_end_matches('-');
    if trimmed.is_empty() {
        "invoice".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Longest run of UTF-8 bytes per encoded word; 45 bytes encode to 60 chars,
/// keeping each header line under 78
const ENCODED_WORD_BYTES: usize = 45;

/// Subject header value safe to write raw
///
/// Line breaks become spaces so the value cannot start a new header.
/// Non-ASCII text is sent as RFC 2047 base64 encoded words, split on char
/// boundaries and folded onto continuation lines.
fn encode_subject(subject: &str) -> String {
    let flat: String = subject
        .chars()
        .map(|c| if c == '\r' || c == '\n' { ' ' } else { c })
        .collect();

    if flat.is_ascii() {
        return flat;
    }

    let mut words = Vec::new();
    let mut chunk = String::new();
    for c in flat.chars() {
        if chunk.len() + c.len_utf8() > ENCODED_WORD_BYTES {
            words.push(std::mem::take(&mut chunk));
        }
        chunk.push(c);
    }
    if !chunk.is_empty() {
        words.push(chunk);
    }

    words
        .iter()
        .map(|word| format!("=?utf-8?B?{}?=", STANDARD.encode(word)))
        .collect::<Vec<_>>()
        .join("\r\n ")
}

/// Render a draft message with CRLF line endings
fn render_message(prepared: &PreparedInvoice) -> String {
    let headers = [
        format!("Date: {}", Local::now().to_rfc2822()),
        format!("Subject: {}", encode_subject(&prepared.invoice.subject)),
        "MIME-Version: 1.0".to_string(),
        "Content-Type: text/plain; charset=utf-8".to_string(),
        "Content-Transfer-Encoding: 8bit".to_string(),
        "X-Unsent: 1".to_string(),
    ];

    let body = prepared
        .invoice
        .body
        .lines()
        .collect::<Vec<_>>()
        .join("\r\n");

    format!("{}\r\n\r\n{}\r\n", headers.join("\r\n"), body)
}

impl InvoiceDispatcher for DraftDirectory {
    fn dispatch(&mut self, prepared: &PreparedInvoice) -> TutorResult<String> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            TutorError::Dispatch(format!(
                "Failed to create drafts directory {}: {}",
                self.dir.display(),
                e
            ))
        })?;

        let short = Uuid::new_v4().simple().to_string();
        let draft_id = format!("{}-{}", slug(&prepared.template.recipient), &short[..8]);
        let path = self.path_for(&draft_id);

        fs::write(&path, render_message(prepared)).map_err(|e| {
            TutorError::Dispatch(format!("Failed to write draft {}: {}", path.display(), e))
        })?;

        tracing::info!(draft = %draft_id, path = %path.display(), "wrote mail draft");
        Ok(draft_id)
    }
}
