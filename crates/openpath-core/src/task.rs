//! Daily task types.
//!
//! A day on a path resolves to a [`DayTask`] with three fixed sub-tasks
//! (the "trident"): an Input to study, an Output to build, and a
//! Synthesis question to reflect on. Tasks are identified by a
//! [`TaskKey`] scoping the day number to its career path.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Composite key identifying one day of one career path.
///
/// Serialized in the canonical `{path_id}-day-{day_number}` text form,
/// but compared structurally so path ids that are prefixes of one
/// another can never bleed progress into each other.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskKey {
    pub path_id: String,
    pub day_number: u32,
}

impl TaskKey {
    pub fn new(path_id: impl Into<String>, day_number: u32) -> Self {
        Self {
            path_id: path_id.into(),
            day_number,
        }
    }
}

impl fmt::Display for TaskKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-day-{}", self.path_id, self.day_number)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid task key: {0:?}")]
pub struct ParseTaskKeyError(pub String);

impl FromStr for TaskKey {
    type Err = ParseTaskKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (path_id, day) = s
            .rsplit_once("-day-")
            .ok_or_else(|| ParseTaskKeyError(s.to_string()))?;
        let day_number: u32 = day.parse().map_err(|_| ParseTaskKeyError(s.to_string()))?;
        if path_id.is_empty() || day_number == 0 {
            return Err(ParseTaskKeyError(s.to_string()));
        }
        Ok(Self {
            path_id: path_id.to_string(),
            day_number,
        })
    }
}

impl Serialize for TaskKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TaskKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// One of the three sub-tasks of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubtaskPart {
    Input,
    Output,
    Synthesis,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown sub-task part: {0:?} (expected input, output or synthesis)")]
pub struct ParsePartError(pub String);

impl FromStr for SubtaskPart {
    type Err = ParsePartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "input" => Ok(Self::Input),
            "output" => Ok(Self::Output),
            "synthesis" => Ok(Self::Synthesis),
            other => Err(ParsePartError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Video,
    Article,
    Doc,
    Tool,
}

/// A learning resource attached to a day's Input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionType {
    Link,
    Code,
    Text,
    File,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnswerType {
    MultipleChoice,
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputTask {
    pub description: String,
    pub resources: Vec<Resource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputTask {
    pub description: String,
    pub submission_type: SubmissionType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesisTask {
    pub question: String,
    pub answer_type: AnswerType,
}

/// A fully resolved day: topic, phase label, and the three sub-tasks.
///
/// Never stored -- always derived from `(path_id, day_number)` by the
/// curriculum catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayTask {
    pub key: TaskKey,
    pub topic: String,
    pub phase: String,
    /// True once the day falls in the terminal placement-readiness phase.
    pub placement: bool,
    pub input: InputTask,
    pub output: OutputTask,
    pub synthesis: SynthesisTask,
}
