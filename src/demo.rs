//! Demo data for an empty or near-empty store.
//!
//! Produces a month of completed history (for dashboard figures) and a
//! backlog of pending projects (for the weekly schedule).

use chrono::{Duration, NaiveDateTime};
use rand::Rng;
use tracing::info;

use crate::config::DemoConfig;
use crate::error::Result;
use crate::models::Money;
use crate::store::{ProjectDraft, ProjectStore};

const HISTORY_TITLES: [&str; 20] = [
    "System Audit",
    "Logo Design",
    "Bug Bounty",
    "AWS Migration",
    "UI Sprint",
    "Backend Patch",
    "SEO Overhaul",
    "Data Backup",
    "Client Meeting",
    "Code Review",
    "Server Setup",
    "Email Fix",
    "Beta Launch",
    "User Research",
    "Compliance Check",
    "API Docs",
    "Asset Backup",
    "Network Tuning",
    "Security Patch",
    "CI/CD Setup",
];

const BACKLOG_TITLES: [&str; 15] = [
    "E-Commerce Engine",
    "Mobile App v3",
    "AI Predictor",
    "Crypto Wallet",
    "HR Portal",
    "Sales Dashboard",
    "IoT Hub",
    "Payment V2",
    "Smart Contract",
    "Video Streamer",
    "Chat Bot",
    "Edge Cache",
    "VR Sandbox",
    "ML Model Training",
    "Auth Service",
];

/// Replaces the store contents with demo data when it holds fewer than
/// `config.min_items` items.
///
/// Completed items: deadline 1..=10, revenue 2000..17000, completed within
/// the 30 days (plus up to 23 hours) before `now`.
/// Pending items: deadline 2..=26, revenue 5000..50000.
///
/// Returns the number of items created (0 when the store was left alone).
pub fn seed_demo_data<S, R>(
    store: &S,
    config: &DemoConfig,
    now: NaiveDateTime,
    rng: &mut R,
) -> Result<usize>
where
    S: ProjectStore + ?Sized,
    R: Rng,
{
    if store.count()? >= config.min_items {
        return Ok(0);
    }
    store.clear()?;

    for i in 0..config.completed {
        let title = format!("{} #{}", HISTORY_TITLES[i % HISTORY_TITLES.len()], i + 1);
        let draft = ProjectDraft::new(
            title,
            rng.random_range(1..=10),
            Money::from_major(2000 + rng.random_range(0..15000)),
        );
        let completed_at = now
            - Duration::days(rng.random_range(0..30))
            - Duration::hours(rng.random_range(0..24));

        let item = store.insert(draft, now)?;
        store.persist(item.with_completed_at(completed_at))?;
    }

    for i in 0..config.pending {
        let draft = ProjectDraft::new(
            BACKLOG_TITLES[i % BACKLOG_TITLES.len()],
            rng.random_range(2..=26),
            Money::from_major(5000 + rng.random_range(0..45000)),
        );
        store.insert(draft, now)?;
    }

    let created = config.completed + config.pending;
    info!(
        completed = config.completed,
        pending = config.pending,
        "demo data seeded"
    );
    Ok(created)
}
