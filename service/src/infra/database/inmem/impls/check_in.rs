//! [`CheckIn`]-related [`Database`] implementations.

use std::cmp::Reverse;

use common::operations::{By, Insert, Select, Update};
use tracerr::Traced;
use uuid::Uuid;

use crate::{
    domain::{check_in, client, CheckIn},
    infra::{
        database::{self, InMemory},
        Database,
    },
};

impl Database<Select<By<Option<CheckIn>, check_in::Id>>> for InMemory {
    type Ok = Option<CheckIn>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<CheckIn>, check_in::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self
            .read()
            .map_err(tracerr::from_and_wrap!(=> database::Error))?
            .check_ins
            .get(&id)
            .cloned())
    }
}

impl Database<Select<By<Vec<CheckIn>, client::Id>>> for InMemory {
    type Ok = Vec<CheckIn>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<CheckIn>, client::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let client_id = by.into_inner();
        let mut check_ins = self
            .read()
            .map_err(tracerr::from_and_wrap!(=> database::Error))?
            .check_ins
            .values()
            .filter(|c| c.client_id == client_id)
            .cloned()
            .collect::<Vec<_>>();
        // Most recent first, with a stable tie-break on the ID.
        check_ins.sort_unstable_by_key(|c| {
            (Reverse(c.submitted_at), Uuid::from(c.id))
        });
        Ok(check_ins)
    }
}

impl Database<Insert<CheckIn>> for InMemory
where
    Self: Database<Update<CheckIn>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(check_in): Insert<CheckIn>,
    ) -> Result<Self::Ok, Self::Err> {
        self.execute(Update(check_in))
            .await
            .map_err(tracerr::wrap!())
    }
}

impl Database<Update<CheckIn>> for InMemory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(check_in): Update<CheckIn>,
    ) -> Result<Self::Ok, Self::Err> {
        drop(
            self.write()
                .map_err(tracerr::from_and_wrap!(=> database::Error))?
                .check_ins
                .insert(check_in.id, check_in),
        );
        Ok(())
    }
}
