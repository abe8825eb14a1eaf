//! [`Command`] definition.

pub mod authorize_client_session;
pub mod create_check_in;
pub mod create_client_session;
pub mod create_workout_template;
pub mod delete_workout_template;
pub mod register_client;
pub mod review_check_in;
pub mod set_macro_target;
pub mod update_client_password;
pub mod update_workout_template;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    authorize_client_session::AuthorizeClientSession,
    create_check_in::CreateCheckIn,
    create_client_session::CreateClientSession,
    create_workout_template::CreateWorkoutTemplate,
    delete_workout_template::DeleteWorkoutTemplate,
    register_client::RegisterClient, review_check_in::ReviewCheckIn,
    set_macro_target::SetMacroTarget,
    update_client_password::UpdateClientPassword,
    update_workout_template::UpdateWorkoutTemplate,
};
