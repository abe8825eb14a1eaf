//! [`Command`] for setting a [`MacroTarget`].

use common::{
    operations::{By, Select, Update},
    DateTime, Grams,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{client, Client, MacroTarget},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for setting a [`MacroTarget`], replacing any previous one of
/// the same [`Client`].
#[derive(Clone, Copy, Debug)]
pub struct SetMacroTarget {
    /// ID of the [`Client`] to set a [`MacroTarget`] for.
    pub client_id: client::Id,

    /// Daily protein target.
    pub protein: Grams,

    /// Daily carbohydrate target.
    pub carbs: Grams,

    /// Daily fat target.
    pub fat: Grams,
}

impl<Db> Command<SetMacroTarget> for Service<Db>
where
    Db: Database<
            Select<By<Option<Client>, client::Id>>,
            Ok = Option<Client>,
            Err = Traced<database::Error>,
        > + Database<Update<MacroTarget>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = MacroTarget;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: SetMacroTarget,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let SetMacroTarget {
            client_id,
            protein,
            carbs,
            fat,
        } = cmd;

        drop(
            self.database()
                .execute(Select(By::new(client_id)))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?
                .ok_or(E::ClientNotExists(client_id))
                .map_err(tracerr::wrap!())?,
        );

        let target = MacroTarget {
            client_id,
            protein,
            carbs,
            fat,
            updated_at: DateTime::now().coerce(),
        };

        self.database()
            .execute(Update(target.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(target)
    }
}

/// Error of [`SetMacroTarget`] [`Command`] execution.
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
