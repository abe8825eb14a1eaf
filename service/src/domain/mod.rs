//! Domain definitions.

pub mod check_in;
pub mod client;
pub mod macro_target;
pub mod workout_template;

pub use self::{
    check_in::CheckIn, client::Client, macro_target::MacroTarget,
    workout_template::WorkoutTemplate,
};
