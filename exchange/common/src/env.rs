use eyre::{Context, Result};
use tracing::debug;

/// recursively search for .env file in the current directory and its parents
/// return true if found and loaded, false otherwise
pub fn load_env_recursively() -> Result<bool> {
    let mut path = std::env::current_dir()?;
    debug!("Loading environment recursively from path: {}", path.display());
    loop {
        let env_path = path.join(".env");
        if env_path.exists() {
            debug!("loading .env from path: {}", env_path.display());
            dotenvy::from_path(&env_path)
                .with_context(|| format!("failed to load .env from path: {}", env_path.display()))?;
            return Ok(true);
        }
        if !path.pop() {
            break;
        }
    }
    Ok(false)
}

/// Value of `name`, treating unset and empty the same way.
pub fn env_var_non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}
