pub mod delete;
pub mod download;
pub mod init;
pub mod list;
pub mod mksite;
pub mod upload;
