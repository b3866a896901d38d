//! Domain logic for the LogoForge backend.
//!
//! Pure, I/O-free building blocks shared by the database and API layers:
//! the moderation state machine, the download access gate, variant kinds,
//! typed settings accessors, and common error/ID types.

pub mod error;
pub mod gate;
pub mod moderation;
pub mod roles;
pub mod search;
pub mod settings;
pub mod types;
pub mod variant;
