//! Route types, their grade vocabularies, and validated video tags.
//!
//! A [`VideoTag`] can only be built for a grade that belongs to its route
//! type's table. That rule also holds for tags read back through serde.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::CoreError;

/// Yosemite Decimal System grades accepted for sport routes, easiest first.
pub const SPORT_GRADES: [&str; 22] = [
    "5.8", "5.9", "5.10a", "5.10b", "5.10c", "5.10d", "5.11a", "5.11b", "5.11c", "5.11d",
    "5.12a", "5.12b", "5.12c", "5.12d", "5.13a", "5.13b", "5.13c", "5.13d", "5.14a", "5.14b",
    "5.14c", "5.14d",
];

/// V-scale grades accepted for boulder problems, easiest first.
pub const BOULDERING_GRADES: [&str; 17] = [
    "V0", "V1", "V2", "V3", "V4", "V5", "V6", "V7", "V8", "V9", "V10", "V11", "V12", "V13",
    "V14", "V15", "V16",
];

/// Climbing discipline. Determines which grade vocabulary applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteType {
    Sport,
    Bouldering,
}

impl RouteType {
    pub const ALL: [RouteType; 2] = [RouteType::Sport, RouteType::Bouldering];

    /// Machine-friendly identifier for this route type.
    pub const fn as_str(self) -> &'static str {
        match self {
            RouteType::Sport => "sport",
            RouteType::Bouldering => "bouldering",
        }
    }

    pub const fn variants_display() -> &'static str {
        "sport, bouldering"
    }

    /// The ordered list of grades valid for this route type.
    pub const fn grade_options(self) -> &'static [&'static str] {
        match self {
            RouteType::Sport => &SPORT_GRADES,
            RouteType::Bouldering => &BOULDERING_GRADES,
        }
    }

    /// Exact, case-sensitive membership test against [`Self::grade_options`].
    pub fn accepts(self, grade: &str) -> bool {
        self.grade_options().contains(&grade)
    }
}

impl fmt::Display for RouteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RouteType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RouteType::ALL
            .into_iter()
            .find(|route| route.as_str() == s)
            .ok_or_else(|| CoreError::UnknownValue {
                kind: "route type",
                value: s.to_string(),
                expected: RouteType::variants_display(),
            })
    }
}

/// Returned when a grade is not part of the route type's vocabulary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid grade '{grade}' for route type {route_type}")]
pub struct InvalidGradeError {
    pub route_type: RouteType,
    pub grade: String,
}

/// A (route type, grade) pair whose grade is known to be valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "TagFields", rename_all = "camelCase")]
pub struct VideoTag {
    route_type: RouteType,
    grade: String,
}

impl VideoTag {
    pub fn new(route_type: RouteType, grade: impl Into<String>) -> Result<Self, InvalidGradeError> {
        let grade = grade.into();
        if !route_type.accepts(&grade) {
            return Err(InvalidGradeError { route_type, grade });
        }
        Ok(Self { route_type, grade })
    }

    pub fn route_type(&self) -> RouteType {
        self.route_type
    }

    pub fn grade(&self) -> &str {
        &self.grade
    }
}

impl fmt::Display for VideoTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.route_type, self.grade)
    }
}

/// Builds a validated tag. Free-function form of [`VideoTag::new`].
pub fn make_tag(route_type: RouteType, grade: &str) -> Result<VideoTag, InvalidGradeError> {
    VideoTag::new(route_type, grade)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TagFields {
    route_type: RouteType,
    grade: String,
}

impl TryFrom<TagFields> for VideoTag {
    type Error = InvalidGradeError;

    fn try_from(fields: TagFields) -> Result<Self, Self::Error> {
        VideoTag::new(fields.route_type, fields.grade)
    }
}
