//! Marker types.

/// Marker type describing an entity creation.
#[derive(Clone, Copy, Debug)]
pub struct Creation;

/// Marker type describing an entity deletion.
#[derive(Clone, Copy, Debug)]
pub struct Deletion;

/// Marker type describing an entity expiration.
#[derive(Clone, Copy, Debug)]
pub struct Expiration;

/// Marker type describing an entity review.
#[derive(Clone, Copy, Debug)]
pub struct Review;

/// Marker type describing an entity submission.
#[derive(Clone, Copy, Debug)]
pub struct Submission;

/// Marker type describing an entity update.
#[derive(Clone, Copy, Debug)]
pub struct Update;
