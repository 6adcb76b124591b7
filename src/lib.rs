//! tutor-invoice - half-term invoice generator for private music tutors
//!
//! This library keeps a small store of recurring-student billing templates,
//! works out which UK school half-term a date falls in and renders the invoice
//! email for that half-term, either from a fixed layout or from a custom
//! placeholder template.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `invoice`: Term calendar and invoice composition (pure, no I/O)
//! - `models`: Billing templates, lesson days and term periods
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: Tracing subscriber setup
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `dispatch`: Where rendered invoices go (stdout or mail draft files)
//! - `export`: Template export and import
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use tutor_invoice::config::{Settings, TutorPaths};
//! use tutor_invoice::services::InvoiceService;
//! use tutor_invoice::storage::Storage;
//!
//! let paths = TutorPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::new(paths)?;
//! storage.load_all()?;
//!
//! let prepared = InvoiceService::new(&storage, &settings)
//!     .prepare_selected(tutor_invoice::invoice::calendar::today())?;
//! println!("{}", prepared.invoice.body);
//! ```

pub mod cli;
pub mod config;
pub mod dispatch;
pub mod display;
pub mod error;
pub mod export;
pub mod invoice;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{TutorError, TutorResult};
