//! Outbound registration webhook: best-effort JSON delivery and the manager
//! that runs deliveries in the background.

pub mod delivery;
pub mod manager;
