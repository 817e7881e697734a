use crate::{Error, Result};
use std::path::PathBuf;

/// File name of the phone book inside the data directory
pub const STORE_FILE_NAME: &str = "phone_book.json";

/// Resolve the rolodex data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. ROLODEX_PATH environment variable (with tilde expansion)
/// 3. System data directory (recommended default)
/// 4. ~/.rolodex (fallback for systems without standard data directory)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    // Priority 1: Explicit path
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    // Priority 2: ROLODEX_PATH environment variable
    if let Ok(env_path) = std::env::var("ROLODEX_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    // Priority 3: System data directory (recommended default)
    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("rolodex"));
    }

    // Priority 4: Fallback to ~/.rolodex (last resort for systems without
    // a standard data directory)
    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".rolodex"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or system data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}
