//! [`Command`] for updating a [`client::Password`].

use common::operations::{By, Select, Update};
use derive_more::{Display, Error, From};
use secrecy::{ExposeSecret as _, SecretBox};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::client::Password;
use crate::{
    domain::{client, Client},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for updating a [`client::Password`].
#[derive(Debug)]
pub struct UpdateClientPassword {
    /// ID of the [`Client`] which [`Password`] should be updated.
    pub client_id: client::Id,

    /// New [`Password`] of the [`Client`].
    pub new_password: SecretBox<client::Password>,

    /// Old [`Password`] of the [`Client`].
    pub old_password: SecretBox<client::Password>,
}

impl<Db> Command<UpdateClientPassword> for Service<Db>
where
    Db: Database<
            Select<By<Option<Client>, client::Id>>,
            Ok = Option<Client>,
            Err = Traced<database::Error>,
        > + Database<Update<Client>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Client;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: UpdateClientPassword,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateClientPassword {
            client_id,
            new_password,
            old_password,
        } = cmd;

        let new_password_hash =
            client::PasswordHash::new(new_password.expose_secret());
        let old_password_hash =
            client::PasswordHash::new(old_password.expose_secret());

        let mut client = self
            .database()
            .execute(Select(By::<Option<Client>, _>::new(client_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::ClientNotExists(client_id))
            .map_err(tracerr::wrap!())?;
        if client.password_hash != old_password_hash {
            return Err(tracerr::new!(E::WrongPassword));
        }

        if client.password_hash == new_password_hash {
            return Ok(client);
        }

        client.password_hash = new_password_hash;
        self.database()
            .execute(Update(client.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(client)
    }
}

/// Error of [`UpdateClientPassword`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`Client`] doesn't exist.
    #[display("`Client(id: {_0})` does not exist")]
    #[from(ignore)]
    ClientNotExists(#[error(not(source))] client::Id),

    /// Wrong old [`Password`] provided.
    #[display("Wrong old password")]
    WrongPassword,
}
