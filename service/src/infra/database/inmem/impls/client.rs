//! [`Client`]-related [`Database`] implementations.

use common::operations::{By, Insert, Select, Update};
use tracerr::Traced;

use crate::{
    domain::{client, Client},
    infra::{
        database::{self, InMemory},
        Database,
    },
};

impl Database<Select<By<Option<Client>, client::Id>>> for InMemory {
    type Ok = Option<Client>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Client>, client::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self
            .read()
            .map_err(tracerr::from_and_wrap!(=> database::Error))?
            .clients
            .get(&id)
            .filter(|c| c.deleted_at.is_none())
            .cloned())
    }
}

impl<'e> Database<Select<By<Option<Client>, &'e client::Email>>> for InMemory {
    type Ok = Option<Client>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Client>, &'e client::Email>>,
    ) -> Result<Self::Ok, Self::Err> {
        let email = by.into_inner();
        Ok(self
            .read()
            .map_err(tracerr::from_and_wrap!(=> database::Error))?
            .clients
            .values()
            .find(|c| c.deleted_at.is_none() && c.email == *email)
            .cloned())
    }
}

impl Database<Insert<Client>> for InMemory
where
    Self: Database<Update<Client>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(client): Insert<Client>,
    ) -> Result<Self::Ok, Self::Err> {
        self.execute(Update(client)).await.map_err(tracerr::wrap!())
    }
}

impl Database<Update<Client>> for InMemory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(client): Update<Client>,
    ) -> Result<Self::Ok, Self::Err> {
        drop(
            self.write()
                .map_err(tracerr::from_and_wrap!(=> database::Error))?
                .clients
                .insert(client.id, client),
        );
        Ok(())
    }
}
