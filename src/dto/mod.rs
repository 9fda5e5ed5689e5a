//! Transfer objects exchanged over HTTP, one module per API version.
//!
//! Incoming fields are optional so that a missing field is reported by validation
//! together with every other failing field, instead of aborting JSON decoding.

pub mod v1;
pub mod v2;
