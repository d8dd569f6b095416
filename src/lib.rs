//! Fleet dispatch planning for the U-Engine ecosystem.
//!
//! Assigns qualified operators (drivers) to scheduled trips, each trip
//! already bound to a transport unit. Hard constraints decide who may
//! drive; a priority-weighted cost score decides who should.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Operator`, `Unit`, `Trip`, `Assignment`,
//!   `AssignmentReason`, `UnassignedReason`
//! - **`eligibility`**: Hard-constraint rules and composable rule policies
//!   (`Basic`, `Extended`)
//! - **`scoring`**: Priority-weighted cost scoring (lower = better)
//! - **`scheduler`**: Greedy per-trip assigner and run summary
//! - **`config`**: Assigner configuration
//! - **`validation`**: Optional input integrity checks
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use chrono::NaiveDate;
//! use u_fleet::eligibility::PolicyKind;
//! use u_fleet::models::{Operator, Trip, Unit};
//! use u_fleet::scheduler::assign;
//!
//! let at = |h| NaiveDate::from_ymd_opt(2026, 1, 13).unwrap().and_hms_opt(h, 0, 0).unwrap();
//! let operators = vec![
//!     Operator::new("OP01", "B", "Veracruz").with_cost(120.0),
//!     Operator::new("OP02", "FEDERAL", "Veracruz").with_cost(150.0),
//! ];
//! let units: HashMap<String, Unit> = [
//!     Unit::new("U01", "B", "Veracruz").with_type("Torton"),
//!     Unit::new("U02", "FEDERAL", "Veracruz").with_type("Tracto"),
//! ]
//! .into_iter()
//! .map(|u| (u.id.clone(), u))
//! .collect();
//! let trips = vec![
//!     Trip::new("V02", "U02", at(9)).with_priority(2).with_duration_hours(8.0),
//!     Trip::new("V01", "U01", at(8)).with_priority(1).with_duration_hours(5.0),
//! ];
//!
//! let plan = assign(&operators, &units, &trips, PolicyKind::Basic);
//! assert_eq!(plan[0].trip_id, "V01");
//! assert_eq!(plan[0].operator_id.as_deref(), Some("OP01"));
//! assert_eq!(plan[1].operator_id.as_deref(), Some("OP02"));
//! ```
//!
//! # Logging
//!
//! Runs emit `tracing` events (per-trip outcomes at `debug`, rejections at
//! `trace`, a run summary at `info`). Install any subscriber to see them.

pub mod config;
pub mod eligibility;
pub mod models;
pub mod scheduler;
pub mod scoring;
pub mod validation;
