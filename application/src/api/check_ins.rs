//! Check-in-related HTTP API.

use axum::{extract::Path, Extension, Json};
use common::{DateTime, Kilograms, Percent};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use service::{
    command::{self, Command as _},
    domain::{self, check_in, client},
    query,
};

use crate::{context, define_error, AsError, Error, Service};

/// Body of a [`create()`] request.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct CreateRequest {
    /// Reported body weight, in kilograms.
    pub weight: Decimal,

    /// Reported body fat percentage.
    pub body_fat: Option<Decimal>,

    /// Free-form notes of the client.
    pub notes: Option<String>,
}

/// Body of a [`review()`] request.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct ReviewRequest {
    /// Trainer feedback to attach.
    pub feedback: String,
}

/// Representation of a [`domain::CheckIn`] in HTTP API responses.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckIn {
    /// ID of the check-in.
    pub id: check_in::Id,

    /// ID of the client the check-in belongs to.
    pub client_id: client::Id,

    /// Reported body weight, in kilograms.
    pub weight: Kilograms,

    /// Reported body fat percentage.
    pub body_fat: Option<Percent>,

    /// Free-form notes of the client.
    pub notes: Option<String>,

    /// Trainer feedback, once reviewed.
    pub feedback: Option<String>,

    /// When the check-in was submitted.
    #[serde(with = "common::datetime::serde::rfc3339")]
    pub submitted_at: DateTime,

    /// When the check-in was last reviewed.
    pub reviewed_at: Option<String>,
}

impl From<domain::CheckIn> for CheckIn {
    fn from(check_in: domain::CheckIn) -> Self {
        Self {
            id: check_in.id,
            client_id: check_in.client_id,
            weight: check_in.weight,
            body_fat: check_in.body_fat,
            notes: check_in.notes.map(|n| n.to_string()),
            feedback: check_in.feedback.map(|f| f.to_string()),
            submitted_at: check_in.submitted_at.coerce(),
            reviewed_at: check_in.reviewed_at.map(|at| at.to_rfc3339()),
        }
    }
}

/// `POST /api/check-ins`
///
/// Submits a new check-in of the authenticated client.
pub async fn create(
    Extension(service): Extension<Service>,
    session: context::Session,
    Json(req): Json<CreateRequest>,
) -> Result<(http::StatusCode, Json<CheckIn>), Error> {
    let CreateRequest {
        weight,
        body_fat,
        notes,
    } = req;

    let weight = Kilograms::new(weight)
        .ok_or_else(|| Error::invalid_input(&"invalid `weight`"))?;
    let body_fat = body_fat
        .map(|p| {
            Percent::new(p)
                .ok_or_else(|| Error::invalid_input(&"invalid `bodyFat`"))
        })
        .transpose()?;
    let notes = notes
        .map(|n| {
            check_in::Notes::new(n)
                .ok_or_else(|| Error::invalid_input(&"invalid `notes`"))
        })
        .transpose()?;

    let check_in = service
        .execute(command::CreateCheckIn {
            client_id: session.client_id,
            weight,
            body_fat,
            notes,
        })
        .await
        .map_err(AsError::into_error)?;

    Ok((http::StatusCode::CREATED, Json(check_in.into())))
}

/// `GET /api/check-ins`
///
/// Lists the check-ins of the authenticated client, most recent first.
pub async fn list(
    Extension(service): Extension<Service>,
    session: context::Session,
) -> Result<Json<Vec<CheckIn>>, Error> {
    let check_ins = service
        .execute(query::check_in::ByClient::by(session.client_id))
        .await
        .map_err(AsError::into_error)?;

    Ok(Json(check_ins.into_iter().map(Into::into).collect()))
}

/// `GET /api/check-ins/{id}`
///
/// Returns a single check-in of the authenticated client.
pub async fn find(
    Extension(service): Extension<Service>,
    session: context::Session,
    Path(id): Path<check_in::Id>,
) -> Result<Json<CheckIn>, Error> {
    let check_in = fetch_owned(&service, &session, id).await?;

    Ok(Json(check_in.into()))
}

/// `POST /api/check-ins/{id}/review`
///
/// Attaches trainer feedback to a check-in of the authenticated client.
pub async fn review(
    Extension(service): Extension<Service>,
    session: context::Session,
    Path(id): Path<check_in::Id>,
    Json(req): Json<ReviewRequest>,
) -> Result<Json<CheckIn>, Error> {
    let ReviewRequest { feedback } = req;

    let feedback = check_in::Feedback::new(feedback)
        .ok_or_else(|| Error::invalid_input(&"invalid `feedback`"))?;

    drop(fetch_owned(&service, &session, id).await?);

    let check_in = service
        .execute(command::ReviewCheckIn { id, feedback })
        .await
        .map_err(AsError::into_error)?;

    Ok(Json(check_in.into()))
}

/// Fetches the [`domain::CheckIn`] with the provided ID, ensuring it belongs
/// to the authenticated client.
///
/// Foreign check-ins are reported as missing, not as forbidden, to avoid
/// disclosing their existence.
async fn fetch_owned(
    service: &Service,
    session: &context::Session,
    id: check_in::Id,
) -> Result<domain::CheckIn, Error> {
    service
        .execute(query::check_in::ById::by(id))
        .await
        .map_err(AsError::into_error)?
        .filter(|c| c.client_id == session.client_id)
        .ok_or_else(|| Error::from(CheckInError::NotFound))
}

impl AsError for command::create_check_in::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
            Self::ClientNotExists(_) => None,
        }
    }
}

impl AsError for command::review_check_in::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
            Self::CheckInNotExists(_) => Some(CheckInError::NotFound.into()),
        }
    }
}

define_error! {
    enum CheckInError {
        #[code = "CHECK_IN_NOT_FOUND"]
        #[status = NOT_FOUND]
        #[message = "Check-in not found"]
        NotFound,
    }
}
