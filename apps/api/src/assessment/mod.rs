// Assessment flow: track catalog, per-session state machine, registry.
// All question data is static; sessions are in-memory for the process
// lifetime only.

pub mod catalog;
pub mod handlers;
pub mod session;
pub mod store;
