//! [`Command`] for updating a [`WorkoutTemplate`].

use common::{
    operations::{By, Select, Update},
    DateTime,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::workout_template::{Exercise, Title};
use crate::{
    domain::{workout_template, WorkoutTemplate},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for updating a [`WorkoutTemplate`].
#[derive(Clone, Debug)]
pub struct UpdateWorkoutTemplate {
    /// ID of the [`WorkoutTemplate`] to update.
    pub id: workout_template::Id,

    /// New [`Title`] of the [`WorkoutTemplate`], if changed.
    pub title: Option<workout_template::Title>,

    /// New [`Exercise`]s of the [`WorkoutTemplate`], if changed.
    pub exercises: Option<Vec<workout_template::Exercise>>,
}

impl<Db> Command<UpdateWorkoutTemplate> for Service<Db>
where
    Db: Database<
            Select<By<Option<WorkoutTemplate>, workout_template::Id>>,
            Ok = Option<WorkoutTemplate>,
            Err = Traced<database::Error>,
        > + Database<
            Update<WorkoutTemplate>,
            Ok = (),
            Err = Traced<database::Error>,
        >,
{
    type Ok = WorkoutTemplate;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: UpdateWorkoutTemplate,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateWorkoutTemplate {
            id,
            title,
            exercises,
        } = cmd;

        if exercises.as_ref().is_some_and(Vec::is_empty) {
            return Err(tracerr::new!(E::NoExercises));
        }

        let mut template = self
            .database()
            .execute(Select(By::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::TemplateNotExists(id))
            .map_err(tracerr::wrap!())?;

        if let Some(title) = title {
            template.title = title;
        }
        if let Some(exercises) = exercises {
            template.exercises = exercises;
        }
        template.updated_at = DateTime::now().coerce();

        self.database()
            .execute(Update(template.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(template)
    }
}

/// Error of [`UpdateWorkoutTemplate`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`WorkoutTemplate`] with the provided ID does not exist.
    #[display("`WorkoutTemplate(id: {_0})` does not exist")]
    #[from(ignore)]
    TemplateNotExists(#[error(not(source))] workout_template::Id),

    /// No [`Exercise`]s provided.
    #[display("No exercises provided")]
    NoExercises,
}
