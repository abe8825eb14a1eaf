//! [`Command`] for authorizing a [`Client`].

use common::operations::{By, Select};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{
        client::{self, session, Session},
        Client,
    },
    infra::{database, Database},
    token, Service,
};

use super::Command;

/// [`Command`] for authorizing a [`Client`].
#[derive(Clone, Debug, From)]
pub struct AuthorizeClientSession {
    /// [`Session`] token to authorize.
    pub token: session::Token,
}

impl<Db> Command<AuthorizeClientSession> for Service<Db>
where
    Db: Database<
        Select<By<Option<Client>, client::Id>>,
        Ok = Option<Client>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = Session;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: AuthorizeClientSession,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let AuthorizeClientSession { token } = cmd;

        let session = self
            .tokens()
            .verify(&token)
            .map_err(tracerr::from_and_wrap!(=> E))?;

        // A verified credential doesn't guarantee the identity still exists:
        // the checks are independent and both required.
        drop(
            self.database()
                .execute(Select(By::new(session.subject_id)))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?
                .ok_or(E::ClientNotExists(session.subject_id))
                .map_err(tracerr::wrap!())?,
        );

        Ok(session)
    }
}

/// Error of [`AuthorizeClientSession`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// Credential failed verification.
    #[display("Failed to verify session credential: {_0}")]
    InvalidToken(token::VerifyError),

    /// [`Client`] the [`Session`] belongs to does not exist.
    #[display("`Client(id: {_0})` does not exist")]
    #[from(ignore)]
    ClientNotExists(#[error(not(source))] client::Id),
}
