//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `layout` is the site chrome around every route, `tool_layout` the chrome
//! around every calculator, and `fields` the inputs and result widgets the
//! calculators are built from.

pub mod fields;
pub mod layout;
pub mod tool_layout;
