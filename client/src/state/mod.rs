//! Client-side session state.
//!
//! DESIGN
//! ======
//! The caches (`token`, `user`) are observable stores with a narrow
//! mutation contract; `session` holds the controller that is their only
//! writer; `provider` mirrors them into the reactive tree. Split this way,
//! the session core runs and tests natively with no browser in sight.

pub mod provider;
pub mod session;
pub mod store;
pub mod token;
pub mod user;
