//! Startup: fetch the catalog once and turn it into the browsable tree.

use log::{info, warn};

use crate::api::{ApiError, PokeApi};
use crate::core::group::group;
use crate::core::state::{App, StalePolicy};
use crate::core::tree::CatalogTree;

/// Fetches and groups the catalog.
///
/// A failed fetch is returned as-is; the caller treats it as fatal. Entries
/// that cannot be grouped are logged and left out.
pub async fn load_catalog(api: &dyn PokeApi) -> Result<CatalogTree, ApiError> {
    let entries = api.fetch_catalog().await?;
    let grouping = group(entries);
    for rejected in &grouping.rejected {
        warn!("Skipping {}", rejected);
    }
    let tree = CatalogTree::new(grouping.groups);
    info!(
        "Catalog ready: {} entries in {} groups",
        tree.entry_count(),
        tree.group_count()
    );
    Ok(tree)
}

/// Loads the catalog and builds the initial [`App`].
pub async fn load_app(api: &dyn PokeApi, stale_policy: StalePolicy) -> Result<App, ApiError> {
    let tree = load_catalog(api).await?;
    Ok(App::new(tree, stale_policy))
}
