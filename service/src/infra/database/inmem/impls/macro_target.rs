//! [`MacroTarget`]-related [`Database`] implementations.

use common::operations::{By, Insert, Select, Update};
use tracerr::Traced;

use crate::{
    domain::{client, MacroTarget},
    infra::{
        database::{self, InMemory},
        Database,
    },
};

impl Database<Select<By<Option<MacroTarget>, client::Id>>> for InMemory {
    type Ok = Option<MacroTarget>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<MacroTarget>, client::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let client_id = by.into_inner();
        Ok(self
            .read()
            .map_err(tracerr::from_and_wrap!(=> database::Error))?
            .macro_targets
            .get(&client_id)
            .cloned())
    }
}

impl Database<Insert<MacroTarget>> for InMemory
where
    Self: Database<Update<MacroTarget>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(target): Insert<MacroTarget>,
    ) -> Result<Self::Ok, Self::Err> {
        self.execute(Update(target)).await.map_err(tracerr::wrap!())
    }
}

impl Database<Update<MacroTarget>> for InMemory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(target): Update<MacroTarget>,
    ) -> Result<Self::Ok, Self::Err> {
        drop(
            self.write()
                .map_err(tracerr::from_and_wrap!(=> database::Error))?
                .macro_targets
                .insert(target.client_id, target),
        );
        Ok(())
    }
}
