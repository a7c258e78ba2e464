//! Data models for the storage layer

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::cli::types::{PlayerId, Uid};

use super::table::SeasonTable;

/// The `input` object of every record: what a strategy gets to see.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftInput {
    pub uid: Uid,
    #[serde(rename = "draft class")]
    pub draft_class: Vec<PlayerId>,
    #[serde(rename = "last season")]
    pub last_season: SeasonTable,
    /// Any other input fields, passed through to strategies and back out untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One line of a draft input, draft output or gold file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    pub input: DraftInput,
    /// Ground truth; present in gold files only.
    #[serde(rename = "next season", default, skip_serializing_if = "Option::is_none")]
    pub next_season: Option<SeasonTable>,
    /// Drafted roster; present in prediction files only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<Vec<PlayerId>>,
    /// Other top-level fields of the line.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Instance {
    pub fn new(input: DraftInput) -> Self {
        Self {
            input,
            next_season: None,
            output: None,
            extra: Map::new(),
        }
    }

    pub fn uid(&self) -> &Uid {
        &self.input.uid
    }

    /// Copy of this instance's input wrapped with a drafted roster. Nothing
    /// outside `input` is carried over.
    pub fn with_output(&self, roster: Vec<PlayerId>) -> Self {
        Self::new(self.input.clone()).into_output(roster)
    }

    /// The whole record, top-level fields included, with `output` set.
    pub fn into_output(mut self, roster: Vec<PlayerId>) -> Self {
        self.output = Some(roster);
        self
    }
}
