//! Macro-target-related HTTP API.

use axum::{Extension, Json};
use common::{DateTime, Grams};
use serde::{Deserialize, Serialize};
use service::{
    command::{self, Command as _},
    domain, query,
};

use crate::{context, define_error, AsError, Error, Service};

/// Body of a [`set()`] request.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct SetRequest {
    /// Daily protein target, in grams.
    pub protein: u32,

    /// Daily carbohydrate target, in grams.
    pub carbs: u32,

    /// Daily fat target, in grams.
    pub fat: u32,
}

/// Representation of a [`domain::MacroTarget`] in HTTP API responses.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroTarget {
    /// Daily protein target, in grams.
    pub protein: u32,

    /// Daily carbohydrate target, in grams.
    pub carbs: u32,

    /// Daily fat target, in grams.
    pub fat: u32,

    /// Total daily energy of the targets, in kilocalories.
    pub calories: u32,

    /// When the targets were last updated.
    #[serde(with = "common::datetime::serde::rfc3339")]
    pub updated_at: DateTime,
}

impl From<domain::MacroTarget> for MacroTarget {
    fn from(target: domain::MacroTarget) -> Self {
        Self {
            protein: target.protein.into(),
            carbs: target.carbs.into(),
            fat: target.fat.into(),
            calories: target.calories().into(),
            updated_at: target.updated_at.coerce(),
        }
    }
}

/// `PUT /api/macros`
///
/// Sets the daily macro targets of the authenticated client, replacing any
/// previous ones.
pub async fn set(
    Extension(service): Extension<Service>,
    session: context::Session,
    Json(req): Json<SetRequest>,
) -> Result<Json<MacroTarget>, Error> {
    let SetRequest { protein, carbs, fat } = req;

    let target = service
        .execute(command::SetMacroTarget {
            client_id: session.client_id,
            protein: Grams::from(protein),
            carbs: Grams::from(carbs),
            fat: Grams::from(fat),
        })
        .await
        .map_err(AsError::into_error)?;

    Ok(Json(target.into()))
}

/// `GET /api/macros`
///
/// Returns the daily macro targets of the authenticated client.
pub async fn find(
    Extension(service): Extension<Service>,
    session: context::Session,
) -> Result<Json<MacroTarget>, Error> {
    let target = service
        .execute(query::macro_target::ByClient::by(session.client_id))
        .await
        .map_err(AsError::into_error)?
        .ok_or_else(|| Error::from(MacrosError::NotSet))?;

    Ok(Json(target.into()))
}

impl AsError for command::set_macro_target::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
            Self::ClientNotExists(_) => None,
        }
    }
}

define_error! {
    enum MacrosError {
        #[code = "MACROS_NOT_SET"]
        #[status = NOT_FOUND]
        #[message = "Macro targets are not set"]
        NotSet,
    }
}
