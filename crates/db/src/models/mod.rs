pub mod account;
pub mod asset;
pub mod download;
pub mod setting;
