pub mod album;
pub mod config;
pub mod error;
pub mod site;
pub mod storage;

pub use config::Config;
pub use error::Error;
pub use storage::Storage;
