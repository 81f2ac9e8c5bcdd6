use base_x::AlphabetsConfig;
use std::path::PathBuf;

/// Loads the registry: built-ins, user and local overrides, then `extra` last.
///
/// `extra` may start with `~`, which expands to the home directory.
pub fn load_config(extra: Option<&str>) -> Result<AlphabetsConfig, Box<dyn std::error::Error>> {
    let mut config = AlphabetsConfig::load_with_overrides()?;

    if let Some(path) = extra {
        let expanded = PathBuf::from(shellexpand::tilde(path).as_ref());
        let overrides = AlphabetsConfig::load_from_file(&expanded)
            .map_err(|e| format!("Cannot load config '{}': {}", path, e))?;
        config.merge(overrides);
    }

    Ok(config)
}
