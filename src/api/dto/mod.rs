//! Data Transfer Objects for API requests and responses.
//!
//! Request bodies are deserialized with Serde and checked with validator
//! before they reach the services. Field names on the wire are camelCase.

pub mod health;
pub mod links;
