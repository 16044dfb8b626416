//! Weekly scheduling service and revenue dashboard.
//!
//! Wraps the strategy engine with the caller-side lifecycle: loading
//! pending projects from a store, executing a schedule (marking its
//! projects completed), and summarizing completed revenue.
//!
//! # Dashboard
//!
//! `DashboardStats` reports weekly and monthly revenue and completion
//! counts; `daily_revenue` builds the 30-day per-date series.

mod dashboard;
mod service;

pub use dashboard::{daily_revenue, DailyRevenue, DashboardStats, MONTH_DAYS, WEEK_DAYS};
pub use service::SchedulingService;
