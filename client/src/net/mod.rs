//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ai` is the only remote call the browser makes: prompts go to the host
//! server, which holds the model credentials.

pub mod ai;
