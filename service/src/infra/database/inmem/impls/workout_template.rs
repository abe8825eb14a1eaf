//! [`WorkoutTemplate`]-related [`Database`] implementations.

use common::operations::{By, Delete, Insert, Select, Update};
use tracerr::Traced;
use uuid::Uuid;

use crate::{
    domain::{client, workout_template, WorkoutTemplate},
    infra::{
        database::{self, InMemory},
        Database,
    },
};

impl Database<Select<By<Option<WorkoutTemplate>, workout_template::Id>>>
    for InMemory
{
    type Ok = Option<WorkoutTemplate>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<WorkoutTemplate>, workout_template::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self
            .read()
            .map_err(tracerr::from_and_wrap!(=> database::Error))?
            .workout_templates
            .get(&id)
            .cloned())
    }
}

impl Database<Select<By<Vec<WorkoutTemplate>, client::Id>>> for InMemory {
    type Ok = Vec<WorkoutTemplate>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<WorkoutTemplate>, client::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let client_id = by.into_inner();
        let mut templates = self
            .read()
            .map_err(tracerr::from_and_wrap!(=> database::Error))?
            .workout_templates
            .values()
            .filter(|t| t.client_id == client_id)
            .cloned()
            .collect::<Vec<_>>();
        // Map iteration order is unstable, so order by creation explicitly.
        templates.sort_unstable_by_key(|t| (t.created_at, Uuid::from(t.id)));
        Ok(templates)
    }
}

impl Database<Insert<WorkoutTemplate>> for InMemory
where
    Self: Database<
        Update<WorkoutTemplate>,
        Ok = (),
        Err = Traced<database::Error>,
    >,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(template): Insert<WorkoutTemplate>,
    ) -> Result<Self::Ok, Self::Err> {
        self.execute(Update(template))
            .await
            .map_err(tracerr::wrap!())
    }
}

impl Database<Update<WorkoutTemplate>> for InMemory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(template): Update<WorkoutTemplate>,
    ) -> Result<Self::Ok, Self::Err> {
        drop(
            self.write()
                .map_err(tracerr::from_and_wrap!(=> database::Error))?
                .workout_templates
                .insert(template.id, template),
        );
        Ok(())
    }
}

impl Database<Delete<By<WorkoutTemplate, workout_template::Id>>> for InMemory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<WorkoutTemplate, workout_template::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        drop(
            self.write()
                .map_err(tracerr::from_and_wrap!(=> database::Error))?
                .workout_templates
                .remove(&id),
        );
        Ok(())
    }
}
