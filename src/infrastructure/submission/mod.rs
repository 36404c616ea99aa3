pub mod simulated;

pub use simulated::SimulatedInvoiceSubmitter;
