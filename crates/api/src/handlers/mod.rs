pub mod accounts;
pub mod assets;
pub mod auth;
pub mod downloads;
pub mod moderation;
pub mod settings;
