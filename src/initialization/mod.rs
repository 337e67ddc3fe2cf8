//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - Environment variables from a `.env` file
//! - Logger
//! - HTTP client

mod client;
mod logger;

pub use client::init_client;
pub use logger::init_logger_with;

/// Loads environment variables from a `.env` file, if one exists.
///
/// Tries the current directory first, then the directory holding the executable.
/// A missing file is not an error.
pub fn load_dotenv() {
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }
}
