//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Guard chains run server-side; by the time a settings
//! page renders, its supplier record is already resolved.

pub mod business_settings;
pub mod login;
pub mod onboarding;
pub mod profile_settings;
