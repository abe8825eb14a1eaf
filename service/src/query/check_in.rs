//! [`Query`] collection related to [`CheckIn`]s.

use common::operations::By;

use crate::domain::{check_in, client, CheckIn};
#[cfg(doc)]
use crate::{domain::Client, Query};

use super::DatabaseQuery;

/// Queries a [`CheckIn`] by its [`check_in::Id`].
pub type ById = DatabaseQuery<By<Option<CheckIn>, check_in::Id>>;

/// Queries all the [`CheckIn`]s of a [`Client`], most recent first.
pub type ByClient = DatabaseQuery<By<Vec<CheckIn>, client::Id>>;
