pub mod add;
pub mod backup;
pub mod config;
pub mod dashboard;
pub mod db;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod stats;
