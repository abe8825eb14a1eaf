//! Authentication-related HTTP API.

use axum::{Extension, Json};
use common::DateTime;
use secrecy::SecretBox;
use serde::{Deserialize, Serialize};
use service::{
    command::{self, Command as _},
    domain::{self, client},
    query,
};

use crate::{context, define_error, AsError, Error, Service};

/// Body of a [`register()`] request.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Name of a new client.
    pub name: String,

    /// Email of a new client.
    pub email: String,

    /// Password of a new client.
    pub password: String,

    /// Coaching goal of a new client.
    pub goal: client::Goal,
}

/// Body of a [`login()`] request.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct LoginRequest {
    /// Email of a client.
    pub email: String,

    /// Password of a client.
    pub password: String,
}

/// Body of an [`update_password()`] request.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct UpdatePasswordRequest {
    /// Old password of the client.
    pub old_password: String,

    /// New password of the client.
    pub new_password: String,
}

/// Representation of a [`domain::Client`] in HTTP API responses.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    /// ID of the client.
    pub id: client::Id,

    /// Name of the client.
    pub name: String,

    /// Email of the client.
    pub email: String,

    /// Coaching goal of the client.
    pub goal: client::Goal,

    /// When the client was created.
    #[serde(with = "common::datetime::serde::rfc3339")]
    pub created_at: DateTime,
}

impl From<domain::Client> for Client {
    fn from(client: domain::Client) -> Self {
        Self {
            id: client.id,
            name: client.name.to_string(),
            email: client.email.to_string(),
            goal: client.goal,
            created_at: client.created_at.coerce(),
        }
    }
}

/// Response carrying a session credential.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    /// Signed session credential.
    pub token: String,

    /// Client the credential belongs to.
    pub client: Client,

    /// When the credential expires.
    #[serde(with = "common::datetime::serde::rfc3339")]
    pub expires_at: DateTime,
}

impl From<command::create_client_session::Output> for SessionResponse {
    fn from(out: command::create_client_session::Output) -> Self {
        Self {
            token: out.token.to_string(),
            client: out.client.into(),
            expires_at: out.expires_at.coerce(),
        }
    }
}

/// `POST /api/auth/register`
///
/// Creates a new client and issues a session credential for it.
pub async fn register(
    Extension(service): Extension<Service>,
    Json(req): Json<RegisterRequest>,
) -> Result<(http::StatusCode, Json<SessionResponse>), Error> {
    let RegisterRequest {
        name,
        email,
        password,
        goal,
    } = req;

    let name = client::Name::new(name)
        .ok_or_else(|| Error::invalid_input(&"invalid `name`"))?;
    let email = client::Email::new(email)
        .ok_or_else(|| Error::invalid_input(&"invalid `email`"))?;
    let password = client::Password::new(password)
        .ok_or_else(|| Error::invalid_input(&"invalid `password`"))?;

    let registered = service
        .execute(command::RegisterClient {
            name,
            email,
            password: SecretBox::new(Box::new(password)),
            goal,
        })
        .await
        .map_err(AsError::into_error)?;

    let out = service
        .execute(command::CreateClientSession::ByClientId(registered.id))
        .await
        .map_err(AsError::into_error)?;

    Ok((http::StatusCode::CREATED, Json(out.into())))
}

/// `POST /api/auth/login`
///
/// Issues a session credential for the provided client credentials.
pub async fn login(
    Extension(service): Extension<Service>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<SessionResponse>, Error> {
    let LoginRequest { email, password } = req;

    let email = client::Email::new(email)
        .ok_or_else(|| Error::invalid_input(&"invalid `email`"))?;
    let password = client::Password::new(password)
        .ok_or_else(|| Error::invalid_input(&"invalid `password`"))?;

    let out = service
        .execute(command::CreateClientSession::ByCredentials {
            email,
            password: SecretBox::new(Box::new(password)),
        })
        .await
        .map_err(AsError::into_error)?;

    Ok(Json(out.into()))
}

/// `GET /api/auth/session`
///
/// Verifies the attached session credential and returns the client it
/// belongs to.
pub async fn session(
    Extension(service): Extension<Service>,
    session: context::Session,
) -> Result<Json<SessionResponse>, Error> {
    let client = service
        .execute(query::client::ById::by(session.client_id))
        .await
        .map_err(AsError::into_error)?
        .ok_or_else(|| Error::internal(&"authorized client vanished"))?;

    Ok(Json(SessionResponse {
        token: session.token.to_string(),
        client: client.into(),
        expires_at: session.expires_at,
    }))
}

/// `PUT /api/auth/password`
///
/// Changes the password of the authenticated client.
pub async fn update_password(
    Extension(service): Extension<Service>,
    session: context::Session,
    Json(req): Json<UpdatePasswordRequest>,
) -> Result<http::StatusCode, Error> {
    let UpdatePasswordRequest {
        old_password,
        new_password,
    } = req;

    let old_password = client::Password::new(old_password)
        .ok_or_else(|| Error::invalid_input(&"invalid `oldPassword`"))?;
    let new_password = client::Password::new(new_password)
        .ok_or_else(|| Error::invalid_input(&"invalid `newPassword`"))?;

    drop(
        service
            .execute(command::UpdateClientPassword {
                client_id: session.client_id,
                new_password: SecretBox::new(Box::new(new_password)),
                old_password: SecretBox::new(Box::new(old_password)),
            })
            .await
            .map_err(AsError::into_error)?,
    );

    Ok(http::StatusCode::NO_CONTENT)
}

impl AsError for command::register_client::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
            Self::EmailOccupied(_) => {
                Some(RegistrationError::EmailOccupied.into())
            }
        }
    }
}

impl AsError for command::create_client_session::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
            Self::WrongCredentials => Some(CredentialsError::Wrong.into()),
            Self::ClientNotExists(_) => None,
        }
    }
}

impl AsError for command::update_client_password::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
            Self::WrongPassword => Some(PasswordError::WrongOld.into()),
            Self::ClientNotExists(_) => None,
        }
    }
}

define_error! {
    enum RegistrationError {
        #[code = "EMAIL_OCCUPIED"]
        #[status = CONFLICT]
        #[message = "Email is already occupied"]
        EmailOccupied,
    }
}

define_error! {
    enum CredentialsError {
        #[code = "WRONG_CREDENTIALS"]
        #[status = UNAUTHORIZED]
        #[message = "Wrong credentials"]
        Wrong,
    }
}

define_error! {
    enum PasswordError {
        #[code = "WRONG_OLD_PASSWORD"]
        #[status = FORBIDDEN]
        #[message = "Wrong old password"]
        WrongOld,
    }
}
