//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and the auth surfaces while reading shared
//! state from the Leptos context providers; all server calls go through the
//! `net` layer.

pub mod account_manager;
pub mod auth_modal;
pub mod boot;
pub mod email_validation_form;
pub mod footer;
pub mod guards;
pub mod header;
pub mod layout;
pub mod login_form;
pub mod password_reset_form;
pub mod password_reset_request_form;
pub mod register_form;
pub mod seo;
pub mod user_profile_modal;
