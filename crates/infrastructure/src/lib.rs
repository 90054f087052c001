//! Netblocks Infrastructure Layer
pub mod dns;
