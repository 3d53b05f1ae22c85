//! Utility helpers shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! component logic so the session core stays natively testable.

pub mod bridge;
pub mod jwt;
pub mod search_params;
pub mod storage;
pub mod task;
pub mod unity;
pub mod validators;
