// CV tailoring: request validation, provider dispatch, output normalization.
// All provider calls go through llm_client; no direct vendor HTTP here.

pub mod handlers;
pub mod models;
