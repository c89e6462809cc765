//! # Courier Common
//!
//! Types shared by every crate in the workspace.
//!
//! * **[`model`]**: Cities, drivers, customers, restaurants and deliveries.
//! * **[`store`]**: The repository traits the dispatch core depends on.
//! * **[`order`]**: The order request contract and its outcome.
//! * **[`error`]**: Typed errors for the model, the stores and order intake.
//! * **[`config`]**: Runtime settings handed down from the front-end.
//! * **[`time`]**: Parsing and formatting of delivery times.

pub mod config;
pub mod error;
pub mod model;
pub mod order;
pub mod store;
pub mod time;
