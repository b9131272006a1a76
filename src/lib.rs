//! Builder for Search Engine Results Page (SERP) API requests.
//!
//! [`SerpsRequest`] validates request parameters field by field and
//! serializes the populated ones to the JSON body an HTTP client sends
//! to the SERPS endpoint. Transport, authentication and response
//! handling are up to that client.

pub mod error;
pub mod serps_request;

pub use error::SerpsRequestError;
pub use serps_request::SerpsRequest;
