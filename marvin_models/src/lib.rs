//! Response models of the Apache CloudStack API.
//!
//! Every type mirrors the JSON object CloudStack returns for a resource, field
//! names included, so that payloads decode without renaming. Only the fields
//! the `marvin` crate reads are modelled; unknown fields are ignored.

#![forbid(unsafe_code)]
#![deny(missing_debug_implementations, nonstandard_style)]

#[macro_use]
extern crate serde_derive;

extern crate serde;
extern crate serde_json;

pub mod models;
