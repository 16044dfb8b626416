//! Weekly slot allocation for deadline-constrained work items.
//!
//! Assigns pending work items ("projects") to the five slots of a work week
//! so that every placed item meets its deadline, using one of four
//! runtime-selectable strategies. The greedy strategy solves job sequencing
//! with deadlines exactly for unit-length items.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `WorkItem`, `ItemStatus`, `Money`,
//!   `ScheduleResult`, `CAPACITY`
//! - **`strategy`**: `SlotStrategy` implementations (FCFS, EDF, Priority,
//!   Greedy) and the `StrategyRegistry` selector
//! - **`validation`**: Engine preconditions and project payload checks
//! - **`store`**: `ProjectStore` boundary and an in-memory backend
//! - **`scheduler`**: Store-backed service, schedule execution, dashboard
//! - **`config`**: TOML configuration
//! - **`demo`**: Demo data seeding
//!
//! # References
//!
//! - Horowitz & Sahni (1978), "Fundamentals of Computer Algorithms", Ch. 4.4
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod config;
pub mod demo;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod store;
pub mod strategy;
pub mod validation;

pub use error::{Result, ScheduleError};
