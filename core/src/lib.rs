//! # Courier Core
//!
//! The dispatch logic of the workspace.
//!
//! * **[`selector`]**: Picks the least busy driver that is free at a given time.
//! * **[`ranking`]**: Orders drivers by accumulated distance.
//! * **[`intake`]**: Places orders: validates, selects, commits.
//! * **[`distance`]**: Estimates the distance of a new delivery.
//! * **[`store`]**: In-memory store and its JSON snapshot format.
//! * **[`seed`]**: Demo data set.
//!
//! The selector and the ranking engine never mutate anything. All writes go
//! through [`intake::OrderIntake`].

pub mod distance;
pub mod intake;
pub mod ranking;
pub mod seed;
pub mod selector;
pub mod store;
