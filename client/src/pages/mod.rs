//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Category pages hold a tab bar over their tools; formulas
//! come from `toolkit`, never from the view code.

pub mod about;
pub mod ai_tools;
pub mod converters;
pub mod daily;
pub mod dashboard;
pub mod developer;
pub mod finance;
pub mod home;
pub mod legal;
pub mod personal;
pub mod productivity;
pub mod sign_in;
pub mod student;
pub mod support;
