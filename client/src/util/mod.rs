//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod catalog;
pub mod confirm;
pub mod export;
pub mod ids;
pub mod reactive;
pub mod routing;
pub mod storage;
