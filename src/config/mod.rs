/// Database connection and table creation
pub mod database;

/// Category seed configuration loaded from config.toml
pub mod categories;
