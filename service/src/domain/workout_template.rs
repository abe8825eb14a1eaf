//! [`WorkoutTemplate`] definitions.

#[cfg(doc)]
use common::DateTime;
use common::{unit, DateTimeOf};
use derive_more::{AsRef, Display, From, FromStr, Into};
use uuid::Uuid;

#[cfg(doc)]
use crate::domain::Client;
use crate::domain::client;

/// Workout prescription assigned to a [`Client`].
#[derive(Clone, Debug)]
pub struct WorkoutTemplate {
    /// ID of this [`WorkoutTemplate`].
    pub id: Id,

    /// ID of the [`Client`] this [`WorkoutTemplate`] is assigned to.
    pub client_id: client::Id,

    /// [`Title`] of this [`WorkoutTemplate`].
    pub title: Title,

    /// Ordered [`Exercise`]s of this [`WorkoutTemplate`].
    pub exercises: Vec<Exercise>,

    /// [`DateTime`] when this [`WorkoutTemplate`] was created.
    pub created_at: CreationDateTime,

    /// [`DateTime`] when this [`WorkoutTemplate`] was last updated.
    pub updated_at: UpdateDateTime,
}

/// ID of a [`WorkoutTemplate`].
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

/// Title of a [`WorkoutTemplate`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
pub struct Title(String);

impl Title {
    /// Creates a new [`Title`] without checking its format.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `title` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    /// Creates a new [`Title`] if the given `title` is valid.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Option<Self> {
        let title = title.into();
        Self::check(&title).then_some(Self(title))
    }

    /// Checks whether the given `title` is a valid [`Title`].
    fn check(title: impl AsRef<str>) -> bool {
        let title = title.as_ref();
        title.trim() == title && !title.is_empty() && title.len() <= 256
    }
}

impl FromStr for Title {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Title`")
    }
}

/// Single exercise prescription inside a [`WorkoutTemplate`].
#[derive(Clone, Debug)]
pub struct Exercise {
    /// [`ExerciseName`] of this [`Exercise`].
    pub name: ExerciseName,

    /// Number of sets to perform.
    pub sets: u8,

    /// Number of repetitions per set.
    pub reps: u8,

    /// Rest between sets, in seconds.
    pub rest_seconds: u16,

    /// Optional coaching cues for this [`Exercise`].
    pub notes: Option<String>,
}

/// Name of an [`Exercise`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
pub struct ExerciseName(String);

impl ExerciseName {
    /// Creates a new [`ExerciseName`] without checking its format.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `name` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Creates a new [`ExerciseName`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`ExerciseName`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty() && name.len() <= 128
    }
}

impl FromStr for ExerciseName {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `ExerciseName`")
    }
}

/// [`DateTime`] when a [`WorkoutTemplate`] was created.
pub type CreationDateTime = DateTimeOf<(WorkoutTemplate, unit::Creation)>;

/// [`DateTime`] when a [`WorkoutTemplate`] was last updated.
pub type UpdateDateTime = DateTimeOf<(WorkoutTemplate, unit::Update)>;
