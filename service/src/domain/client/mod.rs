//! [`Client`] definitions.

pub mod session;

use std::sync::LazyLock;

#[cfg(doc)]
use common::DateTime;
use common::{unit, DateTimeOf};
use derive_more::{AsRef, Display, From, FromStr, Into};
use regex::Regex;
use secrecy::{zeroize::Zeroize, CloneableSecret};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use xxhash_rust::xxh3;

pub use self::session::Session;

/// Coached client of the platform.
#[derive(Clone, Debug, From)]
pub struct Client {
    /// ID of this [`Client`].
    pub id: Id,

    /// [`Name`] of this [`Client`].
    pub name: Name,

    /// [`Email`] of this [`Client`], serving as its login handle.
    pub email: Email,

    /// [`PasswordHash`] of this [`Client`].
    pub password_hash: PasswordHash,

    /// Coaching [`Goal`] of this [`Client`].
    pub goal: Goal,

    /// [`DateTime`] when this [`Client`] was created.
    pub created_at: CreationDateTime,

    /// [`DateTime`] when this [`Client`] was deleted.
    pub deleted_at: Option<DeletionDateTime>,
}

/// ID of a [`Client`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Name of a [`Client`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
pub struct Name(String);

impl Name {
    /// Creates a new [`Name`] without checking its format.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `name` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Creates a new [`Name`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`Name`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty() && name.len() <= 512
    }
}

impl FromStr for Name {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Name`")
    }
}

/// Email address of a [`Client`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(str, String)]
pub struct Email(String);

impl Email {
    /// Creates a new [`Email`] without checking its format.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `address` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// Creates a new [`Email`] if the given `address` is valid.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Option<Self> {
        let address = address.into();
        Self::check(&address).then_some(Self(address))
    }

    /// Checks whether the given `address` is a valid [`Email`].
    fn check(address: impl AsRef<str>) -> bool {
        /// Regular expression checking [`Email`] invariants:
        /// - Must contain exactly one `@`;
        /// - Local part and domain must be non-empty and free of whitespace;
        /// - Domain must contain at least one dot-separated label pair.
        static REGEX: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^[^@\s]+@[^@\s.]+(\.[^@\s.]+)+$").expect("valid regex")
        });

        let address = address.as_ref();
        address.len() <= 320 && REGEX.is_match(address)
    }
}

impl FromStr for Email {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Email`")
    }
}

/// Password of a [`Client`].
#[derive(Clone, Debug, Display, Eq, PartialEq)]
pub struct Password(String);

impl Password {
    /// Creates a new [`Password`] without checking its format.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `password` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(password: impl Into<String>) -> Self {
        Self(password.into())
    }

    /// Creates a new [`Password`] if the given `password` is valid.
    #[must_use]
    pub fn new(password: impl Into<String>) -> Option<Self> {
        let password = password.into();
        Self::check(&password).then_some(Self(password))
    }

    /// Checks whether the given `password` is a valid [`Password`].
    fn check(password: impl AsRef<str>) -> bool {
        let password = password.as_ref();
        password.len() >= 8 && password.len() <= 128
    }
}

impl FromStr for Password {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Password`")
    }
}

impl CloneableSecret for Password {}
impl Zeroize for Password {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

/// Password hash of a [`Client`].
#[derive(Clone, Debug, Display, Eq, PartialEq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Creates a new [`PasswordHash`] from the given [`Password`].
    #[must_use]
    pub fn new(password: &Password) -> Self {
        // TODO: Move to a memory-hard KDF (`argon2`).
        Self(format!("{:032x}", xxh3::xxh3_128(password.0.as_bytes())))
    }
}

/// Coaching goal of a [`Client`].
#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    /// Losing body fat.
    #[display("cut")]
    Cut,

    /// Gaining muscle mass.
    #[display("bulk")]
    Bulk,

    /// Holding the current composition.
    #[display("maintain")]
    Maintain,
}

/// [`DateTime`] when a [`Client`] was created.
pub type CreationDateTime = DateTimeOf<(Client, unit::Creation)>;

/// [`DateTime`] when a [`Client`] was deleted.
pub type DeletionDateTime = DateTimeOf<(Client, unit::Deletion)>;

#[cfg(test)]
mod spec {
    use super::{Email, Name, Password};

    #[test]
    fn email_accepts_plain_addresses() {
        for address in ["a@b.com", "first.last@sub.domain.org", "x+y@b.co"] {
            assert!(Email::new(address).is_some(), "rejected `{address}`");
        }
    }

    #[test]
    fn email_rejects_garbage() {
        for address in
            ["", "a", "a@", "@b.com", "a@b", "a b@c.com", "a@b .com", "a@@b.c"]
        {
            assert!(Email::new(address).is_none(), "accepted `{address}`");
        }
    }

    #[test]
    fn name_rejects_padded_or_empty() {
        assert!(Name::new("").is_none());
        assert!(Name::new(" Jane").is_none());
        assert!(Name::new("Jane ").is_none());
        assert!(Name::new("Jane Doe").is_some());
    }

    #[test]
    fn password_requires_length() {
        assert!(Password::new("short").is_none());
        assert!(Password::new("l0ng-enough").is_some());
        assert!(Password::new("x".repeat(129)).is_none());
    }
}
