//! User data model.
//!
//! A [`User`] is the stored representation: an immutable store-assigned
//! [`UserId`] plus three text fields. A [`UserDraft`] carries the text fields
//! alone and is what callers hand to the service when creating or replacing
//! a user, so client-supplied identifiers never reach the store.
//!
//! Text fields are optional. Creation requires all three to be present and
//! non-blank; a replacement may leave any of them unset, and an unset field
//! is stored and reported as absent.

use std::fmt;

/// Store-assigned numeric user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw identifier.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Access the raw identifier.
    pub const fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<UserId> for i64 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

/// The mutable fields of a user, without an identifier.
///
/// # Examples
/// ```
/// use backend::domain::UserDraft;
///
/// let draft = UserDraft::new("Ann", "Lee", "ann@x.com");
/// assert_eq!(draft.email(), Some("ann@x.com"));
///
/// let partial = UserDraft::from_parts(Some("Ann".into()), None, None);
/// assert_eq!(partial.last_name(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserDraft {
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
}

impl UserDraft {
    /// Build a draft with all three fields set.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self::from_parts(
            Some(first_name.into()),
            Some(last_name.into()),
            Some(email.into()),
        )
    }

    /// Build a draft whose fields may be unset.
    pub fn from_parts(
        first_name: Option<String>,
        last_name: Option<String>,
        email: Option<String>,
    ) -> Self {
        Self {
            first_name,
            last_name,
            email,
        }
    }

    /// Given name.
    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    /// Family name.
    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    /// Contact email address.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

/// Application user as held by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    draft: UserDraft,
}

impl User {
    /// Combine an identifier with the fields of a draft.
    pub fn new(id: UserId, draft: UserDraft) -> Self {
        Self { id, draft }
    }

    /// Stable identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Given name.
    pub fn first_name(&self) -> Option<&str> {
        self.draft.first_name()
    }

    /// Family name.
    pub fn last_name(&self) -> Option<&str> {
        self.draft.last_name()
    }

    /// Contact email address.
    pub fn email(&self) -> Option<&str> {
        self.draft.email()
    }

    /// Split the user into its identifier and draft fields.
    pub fn into_parts(self) -> (UserId, UserDraft) {
        (self.id, self.draft)
    }
}
