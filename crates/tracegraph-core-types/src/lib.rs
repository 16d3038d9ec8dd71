//! Core types shared across tracegraph facilities
//!
//! This crate holds the canonical schema constants used by the logging
//! facility and by anything that inspects its structured output:
//!
//! - **Field keys**: component, op, event, duration and size fields
//! - **Event names**: operation start / end / end_error

pub mod schema;
