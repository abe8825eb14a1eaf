//! [`Query`] collection related to [`WorkoutTemplate`]s.

use common::operations::By;

use crate::domain::{client, workout_template, WorkoutTemplate};
#[cfg(doc)]
use crate::{domain::Client, Query};

use super::DatabaseQuery;

/// Queries a [`WorkoutTemplate`] by its [`workout_template::Id`].
pub type ById =
    DatabaseQuery<By<Option<WorkoutTemplate>, workout_template::Id>>;

/// Queries all the [`WorkoutTemplate`]s assigned to a [`Client`].
pub type ByClient = DatabaseQuery<By<Vec<WorkoutTemplate>, client::Id>>;
