pub mod account_repo;
pub mod asset_repo;
pub mod download_repo;
pub mod settings_repo;

pub use account_repo::AccountRepo;
pub use asset_repo::AssetRepo;
pub use download_repo::DownloadRepo;
pub use settings_repo::SettingsRepo;
