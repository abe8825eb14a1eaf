//! [`Command`] for creating a [`Session`].

use common::operations::{By, Select};
use derive_more::{Display, Error, From};
use secrecy::{ExposeSecret as _, SecretBox};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::client::{session::Token, Email, Password, Session};
use crate::{
    domain::{
        client::{self, session},
        Client,
    },
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for creating a [`Session`].
#[derive(Debug, From)]
pub enum CreateClientSession {
    /// Create a new [`Session`] by [`Client`] credentials.
    ByCredentials {
        /// [`Email`] of a [`Client`].
        email: client::Email,

        /// [`Password`] of a [`Client`].
        password: SecretBox<client::Password>,
    },

    /// Create a new [`Session`] by [`Client`] ID.
    ByClientId(client::Id),
}

/// Output of [`CreateClientSession`] [`Command`].
#[derive(Clone, Debug)]
pub struct Output {
    /// [`Token`] of the created [`Session`].
    pub token: session::Token,

    /// [`Client`] whose [`Session`] has been created.
    pub client: Client,

    /// [`DateTime`] when the [`Session`] expires.
    ///
    /// [`DateTime`]: common::DateTime
    pub expires_at: session::ExpirationDateTime,
}

impl<Db> Command<CreateClientSession> for Service<Db>
where
    Db: Database<
            Select<By<Option<Client>, client::Id>>,
            Ok = Option<Client>,
            Err = Traced<database::Error>,
        > + for<'e> Database<
            Select<By<Option<Client>, &'e client::Email>>,
            Ok = Option<Client>,
            Err = Traced<database::Error>,
        >,
{
    type Ok = Output;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateClientSession,
    ) -> Result<Self::Ok, Self::Err> {
        use CreateClientSession as Cmd;
        use ExecutionError as E;

        let client = match cmd {
            Cmd::ByCredentials { email, password } => {
                let client = self
                    .database()
                    .execute(Select(By::new(&email)))
                    .await
                    .map_err(tracerr::map_from_and_wrap!(=> E))?
                    .ok_or(E::WrongCredentials)
                    .map_err(tracerr::wrap!())?;

                let hash =
                    client::PasswordHash::new(password.expose_secret());
                if client.password_hash != hash {
                    return Err(tracerr::new!(E::WrongCredentials));
                }

                client
            }
            Cmd::ByClientId(client_id) => self
                .database()
                .execute(Select(By::new(client_id)))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?
                .ok_or(E::ClientNotExists(client_id))
                .map_err(tracerr::wrap!())?,
        };

        let issued = self.tokens().issue(client.id, &client.email);

        Ok(Output {
            token: issued.token,
            client,
            expires_at: issued.claims.expires_at,
        })
    }
}

/// Error of [`CreateClientSession`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`Client`] with the provided ID does not exist.
    #[display("`Client(id: {_0})` does not exist")]
    #[from(ignore)]
    ClientNotExists(#[error(not(source))] client::Id),

    /// [`CreateClientSession::ByCredentials`] contains wrong credentials.
    #[display("Wrong `Client` credentials")]
    WrongCredentials,
}
