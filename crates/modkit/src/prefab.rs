//! Part prefab metadata cache
//!
//! Building the module-name map for a part walks every module info of its
//! prefab, so the result is memoized per part name. Entries live until
//! [`PrefabPartDb::clear`] is called.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Editor description of one module on a part prefab
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleInfo {
    pub module_name: String,
    pub info: String,
}

impl ModuleInfo {
    pub fn new(module_name: impl Into<String>, info: impl Into<String>) -> Self {
        Self {
            module_name: module_name.into(),
            info: info.into(),
        }
    }
}

/// A part as listed by the host's part loader
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AvailablePart {
    pub name: String,
    pub title: String,
    pub module_infos: Vec<ModuleInfo>,
}

/// Lookup of loaded parts by prefab name
pub trait PartRegistry {
    fn part_info_by_name(&self, name: &str) -> Option<&AvailablePart>;
}

impl PartRegistry for HashMap<String, AvailablePart> {
    fn part_info_by_name(&self, name: &str) -> Option<&AvailablePart> {
        self.get(name)
    }
}

/// Module name to module info for one part
pub type ModuleDb = HashMap<String, ModuleInfo>;

/// Cache lookup counters
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

impl CacheStats {
    pub fn total(&self) -> u64 {
        self.hits + self.misses
    }

    /// Hit percentage, 0 when nothing was looked up yet
    pub fn hit_rate(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.hits as f64 * 100.0 / total as f64,
        }
    }

    pub fn miss_rate(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.misses as f64 * 100.0 / total as f64,
        }
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} lookups, {} hits ({:.1}%), {} misses ({:.1}%)",
            self.total(),
            self.hits,
            self.hit_rate(),
            self.misses,
            self.miss_rate()
        )
    }
}

/// Memoized per-part module databases
#[derive(Debug, Default)]
pub struct PrefabPartDb {
    entries: Mutex<HashMap<String, Arc<ModuleDb>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl PrefabPartDb {
    pub fn new() -> Self {
        Self::default()
    }

    /// Module database of the prefab named `part_name`.
    ///
    /// Unknown parts yield an empty map that is not cached, so a part
    /// registered later is still picked up.
    pub fn prefab_module_db<R>(&self, registry: &R, part_name: &str) -> Arc<ModuleDb>
    where
        R: PartRegistry + ?Sized,
    {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(db) = entries.get(part_name) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Arc::clone(db);
        }
        self.misses.fetch_add(1, Ordering::Relaxed);

        let Some(part) = registry.part_info_by_name(part_name) else {
            debug!("No prefab registered for part '{}'", part_name);
            return Arc::new(ModuleDb::new());
        };

        let db: ModuleDb = part
            .module_infos
            .iter()
            .map(|info| (info.module_name.clone(), info.clone()))
            .collect();
        debug!("Cached {} module infos for part '{}'", db.len(), part_name);

        let db = Arc::new(db);
        entries.insert(part_name.to_string(), Arc::clone(&db));
        db
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    pub fn log_stats(&self) {
        info!("Prefab cache: {} ({} parts)", self.stats(), self.len());
    }

    /// Number of cached parts
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forget all cached parts; counters are kept
    pub fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> HashMap<String, AvailablePart> {
        let tank = AvailablePart {
            name: "fuelTank".to_string(),
            title: "FL-T400 Fuel Tank".to_string(),
            module_infos: vec![
                ModuleInfo::new("ModuleFuelJettison", "Drains fuel"),
                ModuleInfo::new("ModulePartVariants", "Variants: 3"),
            ],
        };
        HashMap::from([(tank.name.clone(), tank)])
    }

    #[test]
    fn test_builds_module_db() {
        let db = PrefabPartDb::new();
        let modules = db.prefab_module_db(&registry(), "fuelTank");
        assert_eq!(modules.len(), 2);
        assert_eq!(modules["ModulePartVariants"].info, "Variants: 3");
    }

    #[test]
    fn test_second_lookup_hits_cache() {
        let db = PrefabPartDb::new();
        let parts = registry();
        let first = db.prefab_module_db(&parts, "fuelTank");
        let second = db.prefab_module_db(&parts, "fuelTank");
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(db.stats(), CacheStats { hits: 1, misses: 1 });
        assert_eq!(db.stats().hit_rate(), 50.0);
    }

    #[test]
    fn test_unknown_part_is_empty_and_not_cached() {
        let db = PrefabPartDb::new();
        let mut parts = registry();
        assert!(db.prefab_module_db(&parts, "probeCore").is_empty());
        assert!(db.is_empty());

        parts.insert(
            "probeCore".to_string(),
            AvailablePart {
                name: "probeCore".to_string(),
                module_infos: vec![ModuleInfo::new("ModuleCommand", "Crew: 0")],
                ..Default::default()
            },
        );
        assert_eq!(db.prefab_module_db(&parts, "probeCore").len(), 1);
        assert_eq!(db.len(), 1);
        assert_eq!(db.stats().misses, 2);
    }

    #[test]
    fn test_clear() {
        let db = PrefabPartDb::new();
        db.prefab_module_db(&registry(), "fuelTank");
        db.clear();
        assert!(db.is_empty());
        db.log_stats();
    }

    #[test]
    fn test_stats_display() {
        let stats = CacheStats { hits: 3, misses: 1 };
        assert_eq!(stats.to_string(), "4 lookups, 3 hits (75.0%), 1 misses (25.0%)");
        assert_eq!(CacheStats::default().hit_rate(), 0.0);
    }
}
