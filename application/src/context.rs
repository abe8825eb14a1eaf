//! [`Session`]-extraction definitions.

use axum::{async_trait, extract::FromRequestParts, RequestPartsExt as _};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use common::DateTime;
use service::{
    command::{self, Command as _},
    domain::client::{self, session},
};

use crate::{define_error, AsError, Error, Service};

/// [`Session`] of an authenticated [`Client`], extracted from the
/// `Authorization: Bearer` header of an HTTP request.
///
/// Extraction runs the full credential verification and resolves the
/// referenced identity against the store.
///
/// [`Client`]: service::domain::Client
#[derive(Clone, Debug)]
pub struct Session {
    /// ID of the [`Client`] this [`Session`] belongs to.
    ///
    /// [`Client`]: service::domain::Client
    pub client_id: client::Id,

    /// [`session::Token`] this [`Session`] was authorized with.
    pub token: session::Token,

    /// [`DateTime`] when this [`Session`] expires.
    pub expires_at: DateTime,
}

#[async_trait]
impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut http::request::Parts,
        _: &S,
    ) -> Result<Self, Self::Rejection> {
        let service =
            parts.extensions.get::<Service>().cloned().ok_or_else(|| {
                Error::internal(&"missing `Service` extension")
            })?;

        let res = parts.extract::<TypedHeader<Authorization<Bearer>>>().await;
        let TypedHeader(Authorization(bearer)) = res.map_err(|e| {
            if e.is_missing() {
                AuthError::AuthorizationRequired.into()
            } else {
                e.into_error()
            }
        })?;

        #[expect(unsafe_code, reason = "specified in correct header")]
        let token = unsafe {
            session::Token::new_unchecked(bearer.token().to_owned())
        };

        service
            .execute(command::AuthorizeClientSession {
                token: token.clone(),
            })
            .await
            .map(|s| Self {
                client_id: s.subject_id,
                token,
                expires_at: s.expires_at.coerce(),
            })
            .map_err(AsError::into_error)
    }
}

impl AsError for command::authorize_client_session::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
            // Collapsed into a single kind on purpose: the response must not
            // reveal which verification check failed.
            Self::InvalidToken(_) | Self::ClientNotExists(_) => {
                Some(AuthError::AuthorizationRequired.into())
            }
        }
    }
}

define_error! {
    enum AuthError {
        #[code = "AUTHORIZATION_REQUIRED"]
        #[status = UNAUTHORIZED]
        #[message = "Authorization required"]
        AuthorizationRequired,
    }
}
