use anyhow::Context;
use courier_common::config::Config;
use courier_core::seed;
use courier_core::store::{InMemoryStore, Snapshot};
use tracing::{debug, info};

/// Loads the configured dataset, or the demo data when none is given.
pub fn open(cfg: &Config) -> anyhow::Result<InMemoryStore> {
    match &cfg.dataset {
        Some(path) => {
            let snapshot = Snapshot::load(path)?;
            InMemoryStore::from_snapshot(snapshot)
                .with_context(|| format!("dataset {} is inconsistent", path.display()))
        }
        None => {
            debug!("No dataset given, using demo data");
            Ok(seed::demo_store()?)
        }
    }
}

/// Writes the store back to the dataset when `--save` was given.
pub fn save(store: &InMemoryStore, cfg: &Config) -> anyhow::Result<()> {
    let (true, Some(path)) = (cfg.save, &cfg.dataset) else {
        return Ok(());
    };

    store.to_snapshot().save(path)?;
    info!("Saved dataset to {}", path.display());
    Ok(())
}
