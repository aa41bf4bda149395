extern crate rand;
#[macro_use]
extern crate serde;
extern crate thiserror;
#[cfg(test)]
extern crate rand_xoshiro;

pub mod base;
mod config;
pub mod gen_read;
mod read;
mod sequence;

pub use base::{CodecError, UNKNOWN_BASE};
pub use config::{ConfigError, SimConfig, DEFAULT_CONFIG};
pub use read::{PackedRead, MAX_READ_LEN};
pub use sequence::Sequence;
