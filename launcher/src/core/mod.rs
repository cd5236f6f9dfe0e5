//! Core pipeline pieces
//!
//! Pure or self-contained components the orchestrator composes. None of them
//! performs network I/O directly.

pub mod link;
pub mod payload;
pub mod presentation;
pub mod writer;

pub use link::{build_request_url, decode_request_data, encode_payload};
pub use payload::TrackingPayloadBuilder;
pub use presentation::Presentation;
pub use writer::{DecisionUpdate, DecisionWriter};
