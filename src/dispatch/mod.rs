//! Invoice dispatch
//!
//! Where a composed invoice goes once it has been rendered. "Clipboard" mode
//! prints it (pipe to `pbcopy`, `wl-copy`, `clip`...), "draft" mode writes a
//! mail draft file that any mail client can open.

pub mod drafts;
pub mod stdout;

pub use drafts::DraftDirectory;
pub use stdout::StdoutDispatcher;

use crate::error::TutorResult;
use crate::services::PreparedInvoice;

/// Something that accepts a rendered invoice
pub trait InvoiceDispatcher {
    /// Hand one invoice over, returning a receipt (draft id, sink name...)
    fn dispatch(&mut self, prepared: &PreparedInvoice) -> TutorResult<String>;
}

/// Outcome of dispatching several invoices
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    pub success: usize,
    pub failed: usize,
    /// One "recipient: reason" line per failure
    pub errors: Vec<String>,
    pub receipts: Vec<String>,
}

impl DispatchSummary {
    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
}

/// Dispatch every invoice, carrying on past individual failures
pub fn dispatch_all<D>(dispatcher: &mut D, invoices: &[PreparedInvoice]) -> DispatchSummary
where
    D: InvoiceDispatcher + ?Sized,
{
    let mut summary = DispatchSummary::default();

    for prepared in invoices {
        match dispatcher.dispatch(prepared) {
            Ok(receipt) => {
                summary.success += 1;
                summary.receipts.push(receipt);
            }
            Err(e) => {
                tracing::warn!(recipient = %prepared.template.recipient, error = %e, "dispatch failed");
                summary.failed += 1;
                summary
                    .errors
                    .push(format!("{}: {}", prepared.template.recipient, e));
            }
        }
    }

    summary
}
