//! Revenue figures over completed work.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Weekly revenue | Sum over items completed in the last 7 days |
//! | Monthly revenue | Sum over items completed in the last 30 days |
//! | Completed this week / month | Item counts for the same windows |
//! | Daily revenue | Last-30-day revenue grouped by completion date |

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{Money, WorkItem};

/// Days covered by the weekly figures.
pub const WEEK_DAYS: i64 = 7;

/// Days covered by the monthly figures and the daily series.
pub const MONTH_DAYS: i64 = 30;

/// Headline revenue figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub weekly_revenue: Money,
    pub monthly_revenue: Money,
    pub projects_completed_this_month: usize,
    pub projects_completed_this_week: usize,
}

impl DashboardStats {
    /// Computes figures from the items completed in each window.
    pub fn calculate(weekly: &[WorkItem], monthly: &[WorkItem]) -> Self {
        Self {
            weekly_revenue: weekly.iter().map(|item| item.revenue).sum(),
            monthly_revenue: monthly.iter().map(|item| item.revenue).sum(),
            projects_completed_this_month: monthly.len(),
            projects_completed_this_week: weekly.len(),
        }
    }
}

/// Revenue completed on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRevenue {
    pub date: NaiveDate,
    pub revenue: Money,
}

/// Groups completed revenue by completion date, ascending.
///
/// Items without a completion time are ignored.
pub fn daily_revenue(completed: &[WorkItem]) -> Vec<DailyRevenue> {
    let mut by_date: BTreeMap<NaiveDate, Money> = BTreeMap::new();
    for item in completed {
        if let Some(at) = item.completed_at {
            let total = by_date.entry(at.date()).or_default();
            *total = *total + item.revenue;
        }
    }

    by_date
        .into_iter()
        .map(|(date, revenue)| DailyRevenue { date, revenue })
        .collect()
}
