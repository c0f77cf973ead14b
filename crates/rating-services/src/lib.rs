//! Client boundary for the carrier rating-services call.
//!
//! The external API returns a flat array of per-service rule records for a
//! carrier lane. This crate holds the wire shapes ([`dto`]), folds them into
//! the indexed rule tree the validator consumes ([`assembly`]), and wraps
//! the fetch behind a mockable trait with a TTL cache ([`fetch`]) since the
//! upstream documents the call as expensive and recommends refreshing at
//! most daily. The HTTP transport itself lives outside this workspace.

pub mod assembly;
pub mod dto;
pub mod fetch;
