//! Service layer for tutor-invoice
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, selection and invoice preparation.

pub mod invoice;
pub mod template;

pub use invoice::{InvoiceService, PreparedInvoice};
pub use template::{TemplateInput, TemplateService, TemplateUpdate};
