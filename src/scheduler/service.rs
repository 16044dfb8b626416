//! Store-backed scheduling service.
//!
//! # Flow
//!
//! 1. Load pending items from the store.
//! 2. Run the currently selected strategy over them.
//! 3. On execute, mark every assigned item completed and persist it.
//!
//! Wall-clock time is always supplied by the caller.

use chrono::{Duration, NaiveDateTime};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::{debug, info};

use super::dashboard::{daily_revenue, DailyRevenue, DashboardStats, MONTH_DAYS, WEEK_DAYS};
use crate::config::SchedulerConfig;
use crate::demo::seed_demo_data;
use crate::error::{Result, ScheduleError};
use crate::models::{ItemId, ScheduleResult, WorkItem};
use crate::store::{ProjectDraft, ProjectStore};
use crate::strategy::{StrategyInfo, StrategyRegistry};
use crate::validation::validate_draft;

/// Projects, strategy selection and weekly schedules over one store.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use u_sequencing::models::Money;
/// use u_sequencing::scheduler::SchedulingService;
/// use u_sequencing::store::{InMemoryStore, ProjectDraft};
///
/// let now = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap().and_hms_opt(9, 0, 0).unwrap();
/// let service = SchedulingService::new(InMemoryStore::new());
/// service.create_project(ProjectDraft::new("HR Portal", 2, Money::from_major(100)), now).unwrap();
/// service.create_project(ProjectDraft::new("Chat Bot", 1, Money::from_major(50)), now).unwrap();
///
/// let week = service.generate_weekly_schedule().unwrap();
/// assert_eq!(week.total_value, Money::from_major(150));
/// ```
#[derive(Debug)]
pub struct SchedulingService<S> {
    store: S,
    registry: StrategyRegistry,
}

impl<S: ProjectStore> SchedulingService<S> {
    /// Creates a service with the default strategy selected.
    pub fn new(store: S) -> Self {
        Self::with_registry(store, StrategyRegistry::new())
    }

    pub fn with_registry(store: S, registry: StrategyRegistry) -> Self {
        Self { store, registry }
    }

    /// Creates a service with the configured default strategy.
    ///
    /// # Errors
    /// [`ScheduleError::UnknownStrategy`] if the configured key is unknown.
    pub fn from_config(store: S, config: &SchedulerConfig) -> Result<Self> {
        let registry = StrategyRegistry::with_default(&config.default_strategy)?;
        Ok(Self::with_registry(store, registry))
    }

    /// [`from_config`](Self::from_config), then seeds demo data when enabled.
    pub fn bootstrap(store: S, config: &SchedulerConfig, now: NaiveDateTime) -> Result<Self> {
        let service = Self::from_config(store, config)?;
        if config.demo.enabled {
            let mut rng = match config.demo.seed {
                Some(seed) => SmallRng::seed_from_u64(seed),
                None => SmallRng::from_os_rng(),
            };
            seed_demo_data(&service.store, &config.demo, now, &mut rng)?;
        }
        Ok(service)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn registry(&self) -> &StrategyRegistry {
        &self.registry
    }

    // ======================== Projects ========================

    pub fn list_projects(&self) -> Result<Vec<WorkItem>> {
        self.store.all()
    }

    pub fn get_project(&self, id: ItemId) -> Result<WorkItem> {
        self.store
            .get(id)?
            .ok_or(ScheduleError::ProjectNotFound(id))
    }

    /// Validates and stores a new pending project.
    pub fn create_project(&self, draft: ProjectDraft, now: NaiveDateTime) -> Result<WorkItem> {
        validate_draft(&draft).map_err(ScheduleError::InvalidProject)?;
        let item = self.store.insert(draft, now)?;
        debug!(id = item.id, title = %item.title, "project created");
        Ok(item)
    }

    /// Replaces title, deadline and revenue; status and timestamps are kept.
    pub fn update_project(&self, id: ItemId, draft: ProjectDraft) -> Result<WorkItem> {
        validate_draft(&draft).map_err(ScheduleError::InvalidProject)?;
        let mut item = self.get_project(id)?;
        item.title = draft.title;
        item.deadline = draft.deadline;
        item.revenue = draft.revenue;
        self.store.persist(item)
    }

    pub fn delete_project(&self, id: ItemId) -> Result<()> {
        if self.store.delete(id)? {
            debug!(id, "project deleted");
            Ok(())
        } else {
            Err(ScheduleError::ProjectNotFound(id))
        }
    }

    // ======================== Strategies ========================

    pub fn list_strategies(&self) -> Vec<StrategyInfo> {
        self.registry.list()
    }

    /// Selects the strategy for subsequent schedules.
    ///
    /// # Errors
    /// [`ScheduleError::UnknownStrategy`]; the previous selection is kept.
    pub fn select_strategy(&self, key: &str) -> Result<StrategyInfo> {
        self.registry.select(key)
    }

    pub fn current_strategy(&self) -> StrategyInfo {
        self.registry.current()
    }

    // ======================== Schedules ========================

    /// Runs the current strategy over all pending projects.
    pub fn generate_weekly_schedule(&self) -> Result<ScheduleResult> {
        let pending = self.store.load_pending()?;
        self.registry.run(&pending)
    }

    /// Generates the weekly schedule and marks its projects completed at `now`.
    ///
    /// Items deleted between generation and persistence are skipped.
    pub fn execute_current_schedule(&self, now: NaiveDateTime) -> Result<ScheduleResult> {
        let schedule = self.generate_weekly_schedule()?;

        let mut completed = 0usize;
        for item in schedule.assignment.values() {
            if let Some(stored) = self.store.get(item.id)? {
                self.store.persist(stored.with_completed_at(now))?;
                completed += 1;
            }
        }

        info!(
            strategy = %self.registry.current().key,
            completed,
            total = %schedule.total_value,
            "weekly schedule executed"
        );
        Ok(schedule)
    }

    // ======================== Dashboard ========================

    /// Revenue and counts for the last 7 and 30 days before `now`.
    pub fn dashboard_stats(&self, now: NaiveDateTime) -> Result<DashboardStats> {
        let weekly = self.store.completed_since(now - Duration::days(WEEK_DAYS))?;
        let monthly = self.store.completed_since(now - Duration::days(MONTH_DAYS))?;
        Ok(DashboardStats::calculate(&weekly, &monthly))
    }

    /// Completed revenue per day over the last 30 days, ascending by date.
    pub fn analytics(&self, now: NaiveDateTime) -> Result<Vec<DailyRevenue>> {
        let completed = self.store.completed_since(now - Duration::days(MONTH_DAYS))?;
        Ok(daily_revenue(&completed))
    }
}
