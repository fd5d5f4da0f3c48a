//! Core GoalGather library (domain models, demo data, filtering, navigation, config).

pub mod config;
pub mod filter;
pub mod fixtures;
pub mod forms;
pub mod images;
pub mod logging;
pub mod models;
pub mod navigation;
pub mod preferences;
pub mod social;
