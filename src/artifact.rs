//! Initialize-once holder for loaded artifacts.
//!
//! Loaders for expensive, immutable inputs (compiled schemas, parsed
//! configuration, fixture tables) hand their result to an [`ArtifactCache`]
//! owned by the caller instead of stashing it in a module-level global. The
//! codec itself never reads from one.

use once_cell::sync::OnceCell;
use tracing::debug;

/// Owned cache populated at most once and read-only afterwards.
#[derive(Debug)]
pub struct ArtifactCache<T> {
    label: &'static str,
    cell: OnceCell<T>,
}

impl<T> ArtifactCache<T> {
    /// Creates an empty cache. `label` appears in log events.
    pub const fn new(label: &'static str) -> Self {
        Self {
            label,
            cell: OnceCell::new(),
        }
    }

    /// Returns the cached artifact if it has been loaded.
    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    /// Whether the artifact has been loaded.
    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Returns the artifact, running `load` if nothing is cached yet.
    ///
    /// Concurrent callers block until the first load finishes; `load` runs at
    /// most once per successful initialisation. A failed load leaves the
    /// cache empty and the error is returned to the caller that ran it.
    pub fn get_or_load<E, F>(&self, load: F) -> Result<&T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        self.cell.get_or_try_init(|| {
            debug!(artifact = self.label, "loading artifact");
            load()
        })
    }
}
