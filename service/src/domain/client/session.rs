//! [`Session`] definitions.

#[cfg(doc)]
use common::DateTime;
use common::{unit, DateTimeOf};
use derive_more::{AsRef, Display, FromStr};
use serde::{Deserialize, Serialize};

#[cfg(doc)]
use crate::domain::Client;
use crate::domain::client;

/// Claims of a [`Client`] session credential.
///
/// Deserialization is closed: every field must be present with the right
/// type, and unknown fields are rejected.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Session {
    /// ID of the [`Client`] this [`Session`] belongs to.
    #[serde(rename = "subjectId")]
    pub subject_id: client::Id,

    /// Email address of the [`Client`] at issue time.
    ///
    /// Informational only: never used for authorization decisions, and not
    /// validated against the [`client::Email`] format.
    pub email: String,

    /// [`Kind`] discriminator of this [`Session`].
    pub kind: Kind,

    /// [`DateTime`] when this [`Session`] expires.
    #[serde(
        rename = "expiresAt",
        with = "common::datetime::serde::unix_timestamp"
    )]
    pub expires_at: ExpirationDateTime,
}

/// Kind discriminator of a [`Session`] credential, rejecting well-signed
/// credentials minted for another audience.
#[derive(Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub struct Kind(String);

impl Kind {
    /// [`Kind`] value of a [`Client`] session credential.
    pub const CLIENT: &'static str = "client";

    /// Creates the [`Client`] session [`Kind`].
    #[must_use]
    pub fn client() -> Self {
        Self(Self::CLIENT.into())
    }

    /// Indicates whether this [`Kind`] is the [`Client`] session one.
    #[must_use]
    pub fn is_client(&self) -> bool {
        self.0 == Self::CLIENT
    }
}

/// Access token of a [`Session`].
#[derive(AsRef, Clone, Debug, Display, FromStr)]
pub struct Token(String);

impl Token {
    /// Creates a new [`Token`] without checking its contents.
    ///
    /// # Safety
    ///
    /// The provided `token` must be a valid [`Token`] representation.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub const unsafe fn new_unchecked(token: String) -> Self {
        Self(token)
    }
}

/// [`DateTime`] of a [`Session`] expiration.
pub type ExpirationDateTime = DateTimeOf<(Session, unit::Expiration)>;
