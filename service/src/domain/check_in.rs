//! [`CheckIn`] definitions.

#[cfg(doc)]
use common::DateTime;
use common::{unit, DateTimeOf, Kilograms, Percent};
use derive_more::{AsRef, Display, From, FromStr, Into};
use uuid::Uuid;

#[cfg(doc)]
use crate::domain::Client;
use crate::domain::client;

/// Progress check-in submitted by a [`Client`].
#[derive(Clone, Debug)]
pub struct CheckIn {
    /// ID of this [`CheckIn`].
    pub id: Id,

    /// ID of the [`Client`] this [`CheckIn`] belongs to.
    pub client_id: client::Id,

    /// Body weight reported in this [`CheckIn`].
    pub weight: Kilograms,

    /// Body fat percentage reported in this [`CheckIn`].
    pub body_fat: Option<Percent>,

    /// [`Notes`] the [`Client`] attached to this [`CheckIn`].
    pub notes: Option<Notes>,

    /// Trainer [`Feedback`] on this [`CheckIn`].
    pub feedback: Option<Feedback>,

    /// [`DateTime`] when this [`CheckIn`] was submitted.
    pub submitted_at: SubmissionDateTime,

    /// [`DateTime`] when this [`CheckIn`] was last reviewed.
    pub reviewed_at: Option<ReviewDateTime>,
}

/// ID of a [`CheckIn`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Free-form notes of a [`CheckIn`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
pub struct Notes(String);

impl Notes {
    /// Creates a new [`Notes`] without checking its format.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `notes` match the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(notes: impl Into<String>) -> Self {
        Self(notes.into())
    }

    /// Creates a new [`Notes`] if the given `notes` are valid.
    #[must_use]
    pub fn new(notes: impl Into<String>) -> Option<Self> {
        let notes = notes.into();
        Self::check(&notes).then_some(Self(notes))
    }

    /// Checks whether the given `notes` are valid [`Notes`].
    fn check(notes: impl AsRef<str>) -> bool {
        let notes = notes.as_ref();
        !notes.is_empty() && notes.len() <= 4096
    }
}

impl FromStr for Notes {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Notes`")
    }
}

/// Trainer feedback on a [`CheckIn`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
pub struct Feedback(String);

impl Feedback {
    /// Creates a new [`Feedback`] without checking its format.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `feedback` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(feedback: impl Into<String>) -> Self {
        Self(feedback.into())
    }

    /// Creates a new [`Feedback`] if the given `feedback` is valid.
    #[must_use]
    pub fn new(feedback: impl Into<String>) -> Option<Self> {
        let feedback = feedback.into();
        Self::check(&feedback).then_some(Self(feedback))
    }

    /// Checks whether the given `feedback` is a valid [`Feedback`].
    fn check(feedback: impl AsRef<str>) -> bool {
        let feedback = feedback.as_ref();
        !feedback.is_empty() && feedback.len() <= 4096
    }
}

impl FromStr for Feedback {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Feedback`")
    }
}

/// [`DateTime`] when a [`CheckIn`] was submitted.
pub type SubmissionDateTime = DateTimeOf<(CheckIn, unit::Submission)>;

/// [`DateTime`] when a [`CheckIn`] was reviewed.
pub type ReviewDateTime = DateTimeOf<(CheckIn, unit::Review)>;
