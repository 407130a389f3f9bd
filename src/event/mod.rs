mod schema;
mod validation;

pub use schema::{EventConfig, EventScoring, RaceConfig};
pub use validation::validate_event;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load an event from a YAML file, or JSON when the extension is `.json`.
///
/// # Errors
///
/// Returns an error if:
/// - The event file does not exist
/// - The event file cannot be read
/// - The contents cannot be parsed
pub fn load_event(path: &Path) -> Result<EventConfig> {
    if !path.exists() {
        anyhow::bail!("Event file not found at {}", path.display());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read event file at {}", path.display()))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let event: EventConfig = if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse event: invalid JSON in {}", path.display()))?
    } else {
        serde_saphyr::from_str(&content)
            .with_context(|| format!("Failed to parse event: invalid YAML in {}", path.display()))?
    };

    Ok(event)
}
