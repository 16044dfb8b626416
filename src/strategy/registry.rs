//! Strategy registry with a runtime-selectable current strategy.
//!
//! The current selection is a single `Arc<dyn SlotStrategy>` behind an
//! `RwLock`, so a reader always sees a matching key and display name.

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{info, warn};

use super::{builtin, run_schedule, SlotStrategy, StrategyInfo, DEFAULT_STRATEGY};
use crate::error::{Result, ScheduleError};
use crate::models::{ScheduleResult, WorkItem};

/// Named strategies plus the one currently selected.
///
/// # Example
/// ```
/// use u_sequencing::strategy::StrategyRegistry;
///
/// let registry = StrategyRegistry::new();
/// assert_eq!(registry.current().key, "greedy");
///
/// registry.select("edf").unwrap();
/// assert_eq!(registry.current().display_name, "EDF (Earliest Deadline First)");
///
/// assert!(registry.select("bogus").is_err());
/// assert_eq!(registry.current().key, "edf");
/// ```
pub struct StrategyRegistry {
    strategies: BTreeMap<&'static str, Arc<dyn SlotStrategy>>,
    current: RwLock<Arc<dyn SlotStrategy>>,
}

impl StrategyRegistry {
    /// Registers the built-in strategies with `greedy` selected.
    pub fn new() -> Self {
        let strategies: BTreeMap<_, _> = builtin().into_iter().map(|s| (s.key(), s)).collect();
        let current = strategies
            .get(DEFAULT_STRATEGY)
            .cloned()
            .unwrap_or_else(|| Arc::new(super::Greedy) as Arc<dyn SlotStrategy>);
        Self {
            strategies,
            current: RwLock::new(current),
        }
    }

    /// Registers the built-in strategies with `key` selected.
    ///
    /// # Errors
    /// [`ScheduleError::UnknownStrategy`] if `key` is not registered.
    pub fn with_default(key: &str) -> Result<Self> {
        let registry = Self::new();
        registry.select(key)?;
        Ok(registry)
    }

    /// Looks up a strategy by key.
    pub fn get(&self, key: &str) -> Option<Arc<dyn SlotStrategy>> {
        self.strategies.get(key).cloned()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.strategies.contains_key(key)
    }

    /// All registered strategies, sorted by key.
    pub fn list(&self) -> Vec<StrategyInfo> {
        self.strategies
            .values()
            .map(|s| StrategyInfo::of(s.as_ref()))
            .collect()
    }

    /// The currently selected strategy.
    pub fn current(&self) -> StrategyInfo {
        StrategyInfo::of(self.current_strategy().as_ref())
    }

    /// Selects the strategy used by [`run`](Self::run).
    ///
    /// # Errors
    /// [`ScheduleError::UnknownStrategy`] if `key` is not registered; the
    /// previous selection stays in effect.
    pub fn select(&self, key: &str) -> Result<StrategyInfo> {
        let Some(strategy) = self.get(key) else {
            warn!(key, "unknown strategy requested; keeping current selection");
            return Err(ScheduleError::UnknownStrategy(key.to_string()));
        };

        let info = StrategyInfo::of(strategy.as_ref());
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = strategy;
        info!(key = %info.key, name = %info.display_name, "strategy selected");
        Ok(info)
    }

    /// Runs the current strategy.
    pub fn run(&self, items: &[WorkItem]) -> Result<ScheduleResult> {
        let strategy = self.current_strategy();
        run_schedule(strategy.as_ref(), items)
    }

    /// Runs the strategy registered under `key`, leaving the selection alone.
    pub fn run_with(&self, key: &str, items: &[WorkItem]) -> Result<ScheduleResult> {
        let strategy = self
            .get(key)
            .ok_or_else(|| ScheduleError::UnknownStrategy(key.to_string()))?;
        run_schedule(strategy.as_ref(), items)
    }

    fn current_strategy(&self) -> Arc<dyn SlotStrategy> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StrategyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrategyRegistry")
            .field("strategies", &self.strategies.keys().collect::<Vec<_>>())
            .field("current", &self.current_strategy().key())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use std::thread;

    #[test]
    fn test_default_is_greedy() {
        let registry = StrategyRegistry::new();
        let current = registry.current();
        assert_eq!(current.key, "greedy");
        assert_eq!(current.display_name, "Greedy (Revenue-Deadline)");
    }

    #[test]
    fn test_list_sorted_by_key() {
        let keys: Vec<_> = StrategyRegistry::new()
            .list()
            .into_iter()
            .map(|info| info.key)
            .collect();
        assert_eq!(keys, vec!["edf", "fcfs", "greedy", "priority"]);
    }

    #[test]
    fn test_select_known() {
        let registry = StrategyRegistry::new();
        let info = registry.select("fcfs").unwrap();
        assert_eq!(info.display_name, "FCFS (First Come First Served)");
        assert_eq!(registry.current(), info);
    }

    #[test]
    fn test_select_unknown_keeps_current() {
        let registry = StrategyRegistry::new();
        registry.select("priority").unwrap();

        let err = registry.select("bogus").unwrap_err();
        assert!(matches!(err, ScheduleError::UnknownStrategy(ref key) if key == "bogus"));
        assert_eq!(registry.current().key, "priority");
    }

    #[test]
    fn test_with_default() {
        let registry = StrategyRegistry::with_default("edf").unwrap();
        assert_eq!(registry.current().key, "edf");
        assert!(StrategyRegistry::with_default("random").is_err());
    }

    #[test]
    fn test_run_uses_current() {
        let items = vec![
            WorkItem::new(1, 5, Money::from_major(300)),
            WorkItem::new(2, 1, Money::from_major(200)),
        ];
        let registry = StrategyRegistry::new();
        assert_eq!(registry.run(&items).unwrap().total_value, Money::from_major(500));

        registry.select("priority").unwrap();
        assert_eq!(registry.run(&items).unwrap().total_value, Money::from_major(300));
    }

    #[test]
    fn test_run_with() {
        let registry = StrategyRegistry::new();
        let items = vec![WorkItem::new(1, 5, Money::from_major(10))];
        assert_eq!(registry.run_with("edf", &items).unwrap().assigned_count, 1);
        assert_eq!(registry.current().key, "greedy");
        assert!(matches!(
            registry.run_with("nope", &items),
            Err(ScheduleError::UnknownStrategy(_))
        ));
    }

    #[test]
    fn test_concurrent_select_reads_consistent_pairs() {
        let registry = Arc::new(StrategyRegistry::new());
        let expected: BTreeMap<String, String> = registry
            .list()
            .into_iter()
            .map(|info| (info.key, info.display_name))
            .collect();

        let writers: Vec<_> = ["fcfs", "edf", "priority", "greedy"]
            .into_iter()
            .map(|key| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || {
                    for _ in 0..200 {
                        registry.select(key).unwrap();
                    }
                })
            })
            .collect();

        for _ in 0..500 {
            let info = registry.current();
            assert_eq!(expected.get(&info.key), Some(&info.display_name));
        }

        for writer in writers {
            writer.join().unwrap();
        }
    }
}
