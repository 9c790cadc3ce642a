//! Outbound adapters: everything the domain talks to through its ports.

pub mod persistence;
