//! Custom extractors for Axum handlers.
//!
//! Both extractors reject with `application/problem+json` bodies so handlers
//! never see malformed input.

pub mod id_path;
pub mod validated_json;

pub use id_path::IdPath;
pub use validated_json::ValidatedJson;
