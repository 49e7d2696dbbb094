//! ERP Lite Entitlements - plan feature-gating and segment module resolution.
//!
//! Decides which modules of a business segment a company can open on its
//! subscription plan, and which plan limits and capabilities apply.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
