//! [`Command`] for reviewing a [`CheckIn`].

use common::{
    operations::{By, Select, Update},
    DateTime,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::check_in::Feedback;
use crate::{
    domain::{check_in, CheckIn},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for reviewing a [`CheckIn`].
///
/// Reviewing an already reviewed [`CheckIn`] replaces its [`Feedback`].
#[derive(Clone, Debug)]
pub struct ReviewCheckIn {
    /// ID of the [`CheckIn`] to review.
    pub id: check_in::Id,

    /// Trainer [`Feedback`] to attach.
    pub feedback: check_in::Feedback,
}

impl<Db> Command<ReviewCheckIn> for Service<Db>
where
    Db: Database<
            Select<By<Option<CheckIn>, check_in::Id>>,
            Ok = Option<CheckIn>,
            Err = Traced<database::Error>,
        > + Database<Update<CheckIn>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = CheckIn;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: ReviewCheckIn) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let ReviewCheckIn { id, feedback } = cmd;

        let mut check_in = self
            .database()
            .execute(Select(By::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::CheckInNotExists(id))
            .map_err(tracerr::wrap!())?;

        check_in.feedback = Some(feedback);
        check_in.reviewed_at = Some(DateTime::now().coerce());

        self.database()
            .execute(Update(check_in.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(check_in)
    }
}

/// Error of [`ReviewCheckIn`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`CheckIn`] with the provided ID does not exist.
    #[display("`CheckIn(id: {_0})` does not exist")]
    #[from(ignore)]
    CheckInNotExists(#[error(not(source))] check_in::Id),
}
