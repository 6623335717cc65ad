//! Diagnostic channel for developer-facing failure records.
//!
//! Failures that must never reach the user's eyes (a contact submission that
//! could not reach the server, for instance) are emitted as `tracing` events.
//! [`DiagnosticLayer`] captures them into an in-memory [`DiagnosticLog`] and,
//! optionally, appends them to a JSONL file.
//!
//! ## Usage
//!
//! ```ignore
//! use folio_core::logging::{DiagnosticLayer, DiagnosticLog, DiagnosticWriter};
//! use tracing_subscriber::prelude::*;
//!
//! let log = DiagnosticLog::new();
//! let writer = DiagnosticWriter::new("./logs")?;
//! let subscriber = tracing_subscriber::registry()
//!     .with(DiagnosticLayer::new(log.clone()).with_writer(writer))
//!     .with(tracing_subscriber::fmt::layer());
//! tracing::subscriber::set_global_default(subscriber)?;
//! ```
//!
//! ### Querying with jq
//!
//! ```bash
//! jq 'select(.target == "folio::diagnostics")' logs/*_diagnostics.jsonl
//! ```

pub mod entry;
pub mod layer;
pub mod writer;

pub use entry::DiagnosticEntry;
pub use layer::{DiagnosticLayer, DiagnosticLog};
pub use writer::DiagnosticWriter;
