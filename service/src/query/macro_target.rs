//! [`Query`] collection related to a [`MacroTarget`].

use common::operations::By;

use crate::domain::{client, MacroTarget};
#[cfg(doc)]
use crate::{domain::Client, Query};

use super::DatabaseQuery;

/// Queries the [`MacroTarget`] of a [`Client`].
pub type ByClient = DatabaseQuery<By<Option<MacroTarget>, client::Id>>;
