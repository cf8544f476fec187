//! Client for the summarize relay's HTTP API.

pub mod client;

pub use client::{RelayClient, SdkError, SummarizeRequest, SummarizeResponse};
