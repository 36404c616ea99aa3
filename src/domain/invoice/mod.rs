pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::{InvoiceDraft, InvoiceSummary, SubmissionReceipt};
pub use errors::InvoiceError;
pub use ports::{InvoiceListing, InvoiceSubmitter};
pub use services::{InvoiceSubmissionService, SubmissionHandle, SubmissionOutcome};
pub use value_objects::{
  ClientName, Currency, InvoiceNotes, InvoiceStatus, Money, PropertyAddress, ValueObjectError,
  format_amount,
};
