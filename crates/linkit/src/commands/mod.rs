//! Command handlers for the `linkit` CLI.

pub mod create;
