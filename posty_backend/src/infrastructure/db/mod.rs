pub mod connection;
pub mod init_database;
pub mod migration;
