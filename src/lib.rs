#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![deny(missing_debug_implementations, nonstandard_style)]
#![warn(unreachable_pub)]

#[macro_use]
extern crate serde_derive;

extern crate serde;
extern crate serde_json;
extern crate url;

#[cfg(doctest)]
mod doctests {
    doc_comment::doctest!("../README.md");
}

pub mod api;
pub mod builder;
pub mod client;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod naming;
pub mod resources;
pub mod testing;
pub mod wait;

pub use error::{MarvinError, Result};
