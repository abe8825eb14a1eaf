//! [`Command`] for creating a new [`Client`].

use common::{
    operations::{By, Insert, Select},
    DateTime,
};
use derive_more::{Display, Error, From};
use secrecy::{ExposeSecret as _, SecretBox};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::client::{Email, Goal, Name, Password};
use crate::{
    domain::{client, Client},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`Client`].
#[derive(Debug)]
pub struct RegisterClient {
    /// [`Name`] of a new [`Client`].
    pub name: client::Name,

    /// [`Email`] of a new [`Client`].
    pub email: client::Email,

    /// [`Password`] of a new [`Client`].
    pub password: SecretBox<client::Password>,

    /// Coaching [`Goal`] of a new [`Client`].
    pub goal: client::Goal,
}

impl<Db> Command<RegisterClient> for Service<Db>
where
    Db: for<'e> Database<
            Select<By<Option<Client>, &'e client::Email>>,
            Ok = Option<Client>,
            Err = Traced<database::Error>,
        > + Database<Insert<Client>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Client;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: RegisterClient,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let RegisterClient {
            name,
            email,
            password,
            goal,
        } = cmd;

        let existing = self
            .database()
            .execute(Select(By::new(&email)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        if existing.is_some() {
            return Err(tracerr::new!(E::EmailOccupied(email)));
        }

        let client = Client {
            id: client::Id::new(),
            name,
            email,
            password_hash: client::PasswordHash::new(password.expose_secret()),
            goal,
            created_at: DateTime::now().coerce(),
            deleted_at: None,
        };

        self.database()
            .execute(Insert(client.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(client)
    }
}

/// Error of [`RegisterClient`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`client::Email`] is already occupied.
    #[display("`{_0}` email is occupied")]
    #[from(ignore)]
    EmailOccupied(#[error(not(source))] client::Email),
}
