use app::types::{IndicatorError, IndicatorStore};
use tracing::{info, warn};

/// Environment variable naming the indicators snapshot file.
pub const SNAPSHOT_ENV: &str = "INDICATORS_SNAPSHOT";

/// Loads the indicator store from the snapshot at `path`.
///
/// A missing path yields an empty store; a path that cannot be read or parsed
/// is an error.
pub fn load_indicators(path: Option<&str>) -> Result<IndicatorStore, IndicatorError> {
    let Some(path) = path.filter(|p| !p.is_empty()) else {
        warn!("{SNAPSHOT_ENV} is not set; serving an empty indicator store");
        return Ok(IndicatorStore::default());
    };

    let store = IndicatorStore::from_path(path)?;
    info!(path, subscriptions = store.len(), "Loaded indicators snapshot");
    Ok(store)
}
