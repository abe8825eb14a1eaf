//! In-memory [`Database`] implementation.
//!
//! [`Database`]: crate::infra::Database

mod impls;

use std::{
    collections::HashMap,
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use derive_more::{Display, Error as StdError};

use crate::domain::{
    check_in, client, workout_template, CheckIn, Client, MacroTarget,
    WorkoutTemplate,
};

/// In-memory [`Database`] backed by [`RwLock`]ed entity maps.
///
/// Every operation locks, applies and releases independently: no
/// transactions, no cross-entity consistency guarantees.
///
/// [`Database`]: crate::infra::Database
#[derive(Clone, Debug, Default)]
pub struct InMemory(Arc<RwLock<Tables>>);

/// Entity maps of an [`InMemory`] database.
#[derive(Debug, Default)]
struct Tables {
    /// [`Client`]s by their IDs.
    clients: HashMap<client::Id, Client>,

    /// [`WorkoutTemplate`]s by their IDs.
    workout_templates: HashMap<workout_template::Id, WorkoutTemplate>,

    /// [`MacroTarget`]s by the owning [`Client`]'s ID.
    macro_targets: HashMap<client::Id, MacroTarget>,

    /// [`CheckIn`]s by their IDs.
    check_ins: HashMap<check_in::Id, CheckIn>,
}

impl InMemory {
    /// Creates a new empty [`InMemory`] database.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires the read guard over the [`Tables`].
    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, Error> {
        self.0.read().map_err(|_| Error::Poisoned)
    }

    /// Acquires the write guard over the [`Tables`].
    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, Error> {
        self.0.write().map_err(|_| Error::Poisoned)
    }
}

/// [`InMemory`] database error.
#[derive(Clone, Copy, Debug, Display, StdError)]
pub enum Error {
    /// Storage lock was poisoned by a panicked writer.
    #[display("storage lock is poisoned")]
    Poisoned,
}
