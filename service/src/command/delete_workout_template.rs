//! [`Command`] for deleting a [`WorkoutTemplate`].

use common::operations::{By, Delete, Select};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{workout_template, WorkoutTemplate},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for deleting a [`WorkoutTemplate`].
#[derive(Clone, Copy, Debug, From)]
pub struct DeleteWorkoutTemplate {
    /// ID of the [`WorkoutTemplate`] to delete.
    pub id: workout_template::Id,
}

impl<Db> Command<DeleteWorkoutTemplate> for Service<Db>
where
    Db: Database<
            Select<By<Option<WorkoutTemplate>, workout_template::Id>>,
            Ok = Option<WorkoutTemplate>,
            Err = Traced<database::Error>,
        > + Database<
            Delete<By<WorkoutTemplate, workout_template::Id>>,
            Ok = (),
            Err = Traced<database::Error>,
        >,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: DeleteWorkoutTemplate,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let DeleteWorkoutTemplate { id } = cmd;

        drop(
            self.database()
                .execute(Select(By::new(id)))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?
                .ok_or(E::TemplateNotExists(id))
                .map_err(tracerr::wrap!())?,
        );

        self.database()
            .execute(Delete(By::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(())
    }
}

/// Error of [`DeleteWorkoutTemplate`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`WorkoutTemplate`] with the provided ID does not exist.
    #[display("`WorkoutTemplate(id: {_0})` does not exist")]
    #[from(ignore)]
    TemplateNotExists(#[error(not(source))] workout_template::Id),
}
