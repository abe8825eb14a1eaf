//! Workout-template-related HTTP API.

use axum::{extract::Path, Extension, Json};
use common::DateTime;
use serde::{Deserialize, Serialize};
use service::{
    command::{self, Command as _},
    domain::{self, client, workout_template},
    query,
};

use crate::{context, define_error, AsError, Error, Service};

/// Body of a [`create()`] request.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct CreateRequest {
    /// Title of a new workout template.
    pub title: String,

    /// Exercises of a new workout template.
    pub exercises: Vec<Exercise>,
}

/// Body of an [`update()`] request.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct UpdateRequest {
    /// New title of the workout template, if changed.
    pub title: Option<String>,

    /// New exercises of the workout template, if changed.
    pub exercises: Option<Vec<Exercise>>,
}

/// Representation of a [`workout_template::Exercise`] in the HTTP API.
#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct Exercise {
    /// Name of the exercise.
    pub name: String,

    /// Number of sets to perform.
    pub sets: u8,

    /// Number of repetitions per set.
    pub reps: u8,

    /// Rest between sets, in seconds.
    pub rest_seconds: u16,

    /// Optional coaching cues.
    pub notes: Option<String>,
}

impl TryFrom<Exercise> for workout_template::Exercise {
    type Error = Error;

    fn try_from(ex: Exercise) -> Result<Self, Self::Error> {
        let Exercise {
            name,
            sets,
            reps,
            rest_seconds,
            notes,
        } = ex;

        Ok(Self {
            name: workout_template::ExerciseName::new(name).ok_or_else(
                || Error::invalid_input(&"invalid exercise `name`"),
            )?,
            sets,
            reps,
            rest_seconds,
            notes,
        })
    }
}

impl From<workout_template::Exercise> for Exercise {
    fn from(ex: workout_template::Exercise) -> Self {
        Self {
            name: ex.name.to_string(),
            sets: ex.sets,
            reps: ex.reps,
            rest_seconds: ex.rest_seconds,
            notes: ex.notes,
        }
    }
}

/// Representation of a [`domain::WorkoutTemplate`] in HTTP API responses.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutTemplate {
    /// ID of the workout template.
    pub id: workout_template::Id,

    /// ID of the client the workout template is assigned to.
    pub client_id: client::Id,

    /// Title of the workout template.
    pub title: String,

    /// Exercises of the workout template.
    pub exercises: Vec<Exercise>,

    /// When the workout template was created.
    #[serde(with = "common::datetime::serde::rfc3339")]
    pub created_at: DateTime,

    /// When the workout template was last updated.
    #[serde(with = "common::datetime::serde::rfc3339")]
    pub updated_at: DateTime,
}

impl From<domain::WorkoutTemplate> for WorkoutTemplate {
    fn from(template: domain::WorkoutTemplate) -> Self {
        Self {
            id: template.id,
            client_id: template.client_id,
            title: template.title.to_string(),
            exercises: template
                .exercises
                .into_iter()
                .map(Into::into)
                .collect(),
            created_at: template.created_at.coerce(),
            updated_at: template.updated_at.coerce(),
        }
    }
}

/// `POST /api/workouts`
///
/// Creates a new workout template for the authenticated client.
pub async fn create(
    Extension(service): Extension<Service>,
    session: context::Session,
    Json(req): Json<CreateRequest>,
) -> Result<(http::StatusCode, Json<WorkoutTemplate>), Error> {
    let CreateRequest { title, exercises } = req;

    let title = workout_template::Title::new(title)
        .ok_or_else(|| Error::invalid_input(&"invalid `title`"))?;
    let exercises = exercises
        .into_iter()
        .map(TryInto::try_into)
        .collect::<Result<Vec<_>, _>>()?;

    let template = service
        .execute(command::CreateWorkoutTemplate {
            client_id: session.client_id,
            title,
            exercises,
        })
        .await
        .map_err(AsError::into_error)?;

    Ok((http::StatusCode::CREATED, Json(template.into())))
}

/// `GET /api/workouts`
///
/// Lists the workout templates of the authenticated client.
pub async fn list(
    Extension(service): Extension<Service>,
    session: context::Session,
) -> Result<Json<Vec<WorkoutTemplate>>, Error> {
    let templates = service
        .execute(query::workout_template::ByClient::by(session.client_id))
        .await
        .map_err(AsError::into_error)?;

    Ok(Json(templates.into_iter().map(Into::into).collect()))
}

/// `GET /api/workouts/{id}`
///
/// Returns a single workout template of the authenticated client.
pub async fn find(
    Extension(service): Extension<Service>,
    session: context::Session,
    Path(id): Path<workout_template::Id>,
) -> Result<Json<WorkoutTemplate>, Error> {
    let template = fetch_owned(&service, &session, id).await?;

    Ok(Json(template.into()))
}

/// `PUT /api/workouts/{id}`
///
/// Updates a workout template of the authenticated client.
pub async fn update(
    Extension(service): Extension<Service>,
    session: context::Session,
    Path(id): Path<workout_template::Id>,
    Json(req): Json<UpdateRequest>,
) -> Result<Json<WorkoutTemplate>, Error> {
    let UpdateRequest { title, exercises } = req;

    drop(fetch_owned(&service, &session, id).await?);

    let title = title
        .map(|t| {
            workout_template::Title::new(t)
                .ok_or_else(|| Error::invalid_input(&"invalid `title`"))
        })
        .transpose()?;
    let exercises = exercises
        .map(|exs| {
            exs.into_iter()
                .map(TryInto::try_into)
                .collect::<Result<Vec<_>, _>>()
        })
        .transpose()?;

    let template = service
        .execute(command::UpdateWorkoutTemplate {
            id,
            title,
            exercises,
        })
        .await
        .map_err(AsError::into_error)?;

    Ok(Json(template.into()))
}

/// `DELETE /api/workouts/{id}`
///
/// Deletes a workout template of the authenticated client.
pub async fn delete(
    Extension(service): Extension<Service>,
    session: context::Session,
    Path(id): Path<workout_template::Id>,
) -> Result<http::StatusCode, Error> {
    drop(fetch_owned(&service, &session, id).await?);

    service
        .execute(command::DeleteWorkoutTemplate { id })
        .await
        .map_err(AsError::into_error)?;

    Ok(http::StatusCode::NO_CONTENT)
}

/// Fetches the [`domain::WorkoutTemplate`] with the provided ID, ensuring it
/// belongs to the authenticated client.
///
/// Foreign workout templates are reported as missing, not as forbidden, to
/// avoid disclosing their existence.
async fn fetch_owned(
    service: &Service,
    session: &context::Session,
    id: workout_template::Id,
) -> Result<domain::WorkoutTemplate, Error> {
    service
        .execute(query::workout_template::ById::by(id))
        .await
        .map_err(AsError::into_error)?
        .filter(|t| t.client_id == session.client_id)
        .ok_or_else(|| Error::from(WorkoutError::NotFound))
}

impl AsError for command::create_workout_template::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
            Self::ClientNotExists(_) => None,
            Self::NoExercises => {
                Some(Error::invalid_input(&"no exercises provided"))
            }
        }
    }
}

impl AsError for command::update_workout_template::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
            Self::TemplateNotExists(_) => Some(WorkoutError::NotFound.into()),
            Self::NoExercises => {
                Some(Error::invalid_input(&"no exercises provided"))
            }
        }
    }
}

impl AsError for command::delete_workout_template::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
            Self::TemplateNotExists(_) => Some(WorkoutError::NotFound.into()),
        }
    }
}

define_error! {
    enum WorkoutError {
        #[code = "WORKOUT_NOT_FOUND"]
        #[status = NOT_FOUND]
        #[message = "Workout template not found"]
        NotFound,
    }
}
