//! Scenarios that run the dispatch core end to end against the in-memory store.

mod orders;
mod ranking;
mod selection;
mod support;
