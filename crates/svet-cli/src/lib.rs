//! Library components of the `symptovet` CLI.

pub mod boundary;
pub mod logging;
pub mod render;
