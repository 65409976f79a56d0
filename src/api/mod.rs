/// Generation endpoint client
///
/// This module handles:
/// - Packaging the prompt and screenshots as a multipart form (request.rs)
/// - Posting the form and interpreting the reply (client.rs)

pub mod client;
pub mod request;

pub use client::{GenerationClient, SubmitError};
pub use request::GenerationRequest;
