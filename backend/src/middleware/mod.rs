//! Request middleware for tracing and access logging.

pub mod request_log;
pub mod trace;

pub use request_log::RequestLog;
pub use trace::Trace;
