//! Generator subdomain: what goes over the wire and what the user types.
//!
//! - [`entities`]: request/response bodies of the two backend endpoints
//! - [`range`]: the raw min/max text and its validity gate

pub mod entities;
pub mod range;
