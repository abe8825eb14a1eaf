//! [`Command`] for creating a new [`WorkoutTemplate`].

use common::{
    operations::{By, Insert, Select},
    DateTime,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::workout_template::{Exercise, Title};
use crate::{
    domain::{client, workout_template, Client, WorkoutTemplate},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`WorkoutTemplate`].
#[derive(Clone, Debug)]
pub struct CreateWorkoutTemplate {
    /// ID of the [`Client`] to assign a new [`WorkoutTemplate`] to.
    pub client_id: client::Id,

    /// [`Title`] of a new [`WorkoutTemplate`].
    pub title: workout_template::Title,

    /// [`Exercise`]s of a new [`WorkoutTemplate`].
    pub exercises: Vec<workout_template::Exercise>,
}

impl<Db> Command<CreateWorkoutTemplate> for Service<Db>
where
    Db: Database<
            Select<By<Option<Client>, client::Id>>,
            Ok = Option<Client>,
            Err = Traced<database::Error>,
        > + Database<
            Insert<WorkoutTemplate>,
            Ok = (),
            Err = Traced<database::Error>,
        >,
{
    type Ok = WorkoutTemplate;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateWorkoutTemplate,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateWorkoutTemplate {
            client_id,
            title,
            exercises,
        } = cmd;

        if exercises.is_empty() {
            return Err(tracerr::new!(E::NoExercises));
        }

        drop(
            self.database()
                .execute(Select(By::new(client_id)))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?
                .ok_or(E::ClientNotExists(client_id))
                .map_err(tracerr::wrap!())?,
        );

        let now = DateTime::now();
        let template = WorkoutTemplate {
            id: workout_template::Id::new(),
            client_id,
            title,
            exercises,
            created_at: now.coerce(),
            updated_at: now.coerce(),
        };

        self.database()
            .execute(Insert(template.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(template)
    }
}

/// Error of [`CreateWorkoutTemplate`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`Client`] with the provided ID does not exist.
    #[display("`Client(id: {_0})` does not exist")]
    #[from(ignore)]
    ClientNotExists(#[error(not(source))] client::Id),

    /// No [`Exercise`]s provided.
    #[display("No exercises provided")]
    NoExercises,
}
