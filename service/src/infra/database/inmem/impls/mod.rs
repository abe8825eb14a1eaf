//! [`Database`] implementations.
//!
//! [`Database`]: crate::infra::Database

mod check_in;
mod client;
mod macro_target;
mod workout_template;
