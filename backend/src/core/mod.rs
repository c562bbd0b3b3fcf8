//! Configuration and initialization

pub mod config;
