//! [`Command`] for creating a new [`CheckIn`].

use common::{
    operations::{By, Insert, Select},
    DateTime, Kilograms, Percent,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::check_in::Notes;
use crate::{
    domain::{check_in, client, CheckIn, Client},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`CheckIn`].
#[derive(Clone, Debug)]
pub struct CreateCheckIn {
    /// ID of the [`Client`] submitting a new [`CheckIn`].
    pub client_id: client::Id,

    /// Reported body weight.
    pub weight: Kilograms,

    /// Reported body fat percentage.
    pub body_fat: Option<Percent>,

    /// [`Notes`] attached by the [`Client`].
    pub notes: Option<check_in::Notes>,
}

impl<Db> Command<CreateCheckIn> for Service<Db>
where
    Db: Database<
            Select<By<Option<Client>, client::Id>>,
            Ok = Option<Client>,
            Err = Traced<database::Error>,
        > + Database<Insert<CheckIn>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = CheckIn;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: CreateCheckIn) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateCheckIn {
            client_id,
            weight,
            body_fat,
            notes,
        } = cmd;

        drop(
            self.database()
                .execute(Select(By::new(client_id)))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?
                .ok_or(E::ClientNotExists(client_id))
                .map_err(tracerr::wrap!())?,
        );

        let check_in = CheckIn {
            id: check_in::Id::new(),
            client_id,
            weight,
            body_fat,
            notes,
            feedback: None,
            submitted_at: DateTime::now().coerce(),
            reviewed_at: None,
        };

        self.database()
            .execute(Insert(check_in.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(check_in)
    }
}

/// Error of [`CreateCheckIn`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`Client`] with the provided ID does not exist.
    #[display("`Client(id: {_0})` does not exist")]
    #[from(ignore)]
    ClientNotExists(#[error(not(source))] client::Id),
}
