//! Course entity, its validated attributes, and list filtering.
//!
//! A course is an identifier plus a name. Identifiers are allocated by the
//! backing store and never change; names are validated on every write.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Maximum number of characters accepted for a course name.
pub const COURSE_NAME_MAX: usize = 255;

/// Validation errors raised while building course attributes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CourseValidationError {
    /// No name was supplied.
    #[error("course name is required")]
    MissingName,
    /// The name was empty once surrounding whitespace was removed.
    #[error("course name must not be empty")]
    EmptyName,
    /// The name exceeds [`COURSE_NAME_MAX`] characters.
    #[error("course name must be at most {max} characters")]
    NameTooLong { max: usize },
}

/// Server-assigned course identifier.
///
/// # Examples
/// ```
/// use courses::domain::CourseId;
///
/// let id: CourseId = "42".parse().expect("integer id");
/// assert_eq!(id.get(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(i64);

impl CourseId {
    /// Wrap a raw identifier produced by a backing store.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw integer value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl FromStr for CourseId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self)
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated course name.
///
/// Surrounding whitespace is trimmed; the remainder must be non-empty and at
/// most [`COURSE_NAME_MAX`] characters long.
///
/// # Examples
/// ```
/// use courses::domain::{CourseName, CourseValidationError};
///
/// let name = CourseName::new("  Algebra ").expect("valid name");
/// assert_eq!(name.as_ref(), "Algebra");
/// assert_eq!(CourseName::new("   "), Err(CourseValidationError::EmptyName));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CourseName(String);

impl CourseName {
    /// Validate and construct a [`CourseName`].
    pub fn new(name: impl Into<String>) -> Result<Self, CourseValidationError> {
        Self::from_owned(name.into())
    }

    /// Validate an optional name, treating `None` as a missing field.
    pub fn from_optional(name: Option<String>) -> Result<Self, CourseValidationError> {
        name.map_or(Err(CourseValidationError::MissingName), Self::from_owned)
    }

    fn from_owned(name: String) -> Result<Self, CourseValidationError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(CourseValidationError::EmptyName);
        }
        if trimmed.chars().count() > COURSE_NAME_MAX {
            return Err(CourseValidationError::NameTooLong {
                max: COURSE_NAME_MAX,
            });
        }
        if trimmed.len() == name.len() {
            Ok(Self(name))
        } else {
            Ok(Self(trimmed.to_owned()))
        }
    }
}

impl AsRef<str> for CourseName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for CourseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CourseName> for String {
    fn from(value: CourseName) -> Self {
        value.0
    }
}

impl TryFrom<String> for CourseName {
    type Error = CourseValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// A persisted course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    id: CourseId,
    name: CourseName,
}

impl Course {
    /// Assemble a course from its persisted parts.
    #[must_use]
    pub fn new(id: CourseId, name: CourseName) -> Self {
        Self { id, name }
    }

    /// Stable identifier.
    #[must_use]
    pub fn id(&self) -> CourseId {
        self.id
    }

    /// Current name.
    #[must_use]
    pub fn name(&self) -> &CourseName {
        &self.name
    }

    /// Replace the name, keeping the identifier.
    #[must_use]
    pub fn renamed(self, name: CourseName) -> Self {
        Self { id: self.id, name }
    }
}

/// Equality predicates applied when listing courses.
///
/// Supplied predicates are combined with logical AND; an empty filter
/// matches every course. The name predicate compares text exactly.
///
/// # Examples
/// ```
/// use courses::domain::{Course, CourseFilter, CourseId, CourseName};
///
/// let course = Course::new(CourseId::new(1), CourseName::new("Physics").expect("name"));
/// assert!(CourseFilter::default().matches(&course));
/// assert!(CourseFilter::default().with_id(CourseId::new(1)).matches(&course));
/// assert!(!CourseFilter::default().with_name("physics").matches(&course));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseFilter {
    id: Option<CourseId>,
    name: Option<String>,
}

impl CourseFilter {
    /// Restrict results to the course with this identifier.
    #[must_use]
    pub fn with_id(mut self, id: CourseId) -> Self {
        self.id = Some(id);
        self
    }

    /// Restrict results to courses whose name equals `name` exactly.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Identifier predicate, if any.
    #[must_use]
    pub fn id(&self) -> Option<CourseId> {
        self.id
    }

    /// Name predicate, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Whether no predicate is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.name.is_none()
    }

    /// Evaluate the filter against a course.
    #[must_use]
    pub fn matches(&self, course: &Course) -> bool {
        let id_matches = self.id.is_none_or(|id| id == course.id());
        let name_matches = self
            .name
            .as_deref()
            .is_none_or(|name| name == course.name().as_ref());
        id_matches && name_matches
    }
}
