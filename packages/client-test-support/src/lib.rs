//! Client test support utilities
//!
//! This crate provides utilities specifically for client testing: unified
//! logging initialization and fabrication of unsigned bearer tokens with
//! arbitrary claim payloads.

pub mod logging;
pub mod token;
