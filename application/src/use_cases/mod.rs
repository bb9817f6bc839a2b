//! Use cases (application services)

pub mod context_handler;
