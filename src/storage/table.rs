//! Conversion boundary between embedded season tables and [`SeasonRecord`].
//!
//! Season tables travel inside JSON lines as a *string* holding a serialized
//! table. Decoding accepts the pandas orients `records`, `columns` and
//! `split`, as well as a table embedded inline rather than as a string.
//! Tables read from a file are written back exactly as they were read, text
//! columns and number formatting included. A table built in code is encoded
//! as `records` orient wrapped in a string.

use serde::{de::Error as _, ser::Error as _, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::{collections::BTreeSet, ops::Deref};

use crate::{
    cli::types::PlayerId,
    error::{DraftError, Result},
    stats::{
        catalog::{GAME_ID, PERSON_ID},
        GameRow, SeasonRecord,
    },
};

/// Decode a table that may be wrapped in a JSON string.
pub fn decode_embedded(raw: &Value) -> Result<SeasonRecord> {
    match raw {
        Value::String(text) => {
            let inner: Value = serde_json::from_str(text)?;
            decode(&inner)
        }
        other => decode(other),
    }
}

/// Decode an already-parsed table value.
pub fn decode(table: &Value) -> Result<SeasonRecord> {
    let mut columns = BTreeSet::new();
    let rows = match table {
        Value::Array(records) => records
            .iter()
            .map(|record| match record {
                Value::Object(cells) => row_from_cells(
                    cells.iter().map(|(name, value)| (name.as_str(), value)),
                    &mut columns,
                ),
                _ => Err(invalid("records must be JSON objects")),
            })
            .collect::<Result<Vec<_>>>()?,
        Value::Object(obj) if obj.contains_key("columns") && obj.contains_key("data") => {
            decode_split(obj, &mut columns)?
        }
        Value::Object(obj) => decode_columns(obj, &mut columns)?,
        Value::Null => Vec::new(),
        _ => return Err(invalid("expected an array of records or a column object")),
    };
    Ok(SeasonRecord::new(columns, rows))
}

/// Encode a season as `records` orient. Null cells are written for declared
/// columns a row has no value for.
pub fn encode(season: &SeasonRecord) -> Value {
    let records = season
        .rows()
        .iter()
        .map(|row| {
            let mut cells = Map::new();
            cells.insert(PERSON_ID.to_string(), Value::from(row.person_id.as_u64()));
            if let Some(game_id) = &row.game_id {
                cells.insert(GAME_ID.to_string(), Value::from(game_id.clone()));
            }
            for column in season.columns() {
                let cell = row.stats.get(column).map_or(Value::Null, |v| Value::from(*v));
                cells.insert(column.clone(), cell);
            }
            Value::Object(cells)
        })
        .collect();
    Value::Array(records)
}

/// A season table field: the typed record plus the JSON it was read from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeasonTable {
    record: SeasonRecord,
    raw: Option<Value>,
}

impl SeasonTable {
    /// Decode `raw` and keep it for writing back.
    pub fn parse(raw: Value) -> Result<Self> {
        let record = decode_embedded(&raw)?;
        Ok(Self {
            record,
            raw: Some(raw),
        })
    }

    pub fn record(&self) -> &SeasonRecord {
        &self.record
    }

    /// The table as it appeared in the input, if it came from one.
    pub fn raw(&self) -> Option<&Value> {
        self.raw.as_ref()
    }
}

impl From<SeasonRecord> for SeasonTable {
    fn from(record: SeasonRecord) -> Self {
        Self { record, raw: None }
    }
}

impl Deref for SeasonTable {
    type Target = SeasonRecord;

    fn deref(&self) -> &SeasonRecord {
        &self.record
    }
}

impl Serialize for SeasonTable {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match &self.raw {
            Some(raw) => raw.serialize(serializer),
            None => {
                let text = serde_json::to_string(&encode(&self.record)).map_err(S::Error::custom)?;
                serializer.serialize_str(&text)
            }
        }
    }
}

impl<'de> Deserialize<'de> for SeasonTable {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        SeasonTable::parse(raw).map_err(D::Error::custom)
    }
}

fn invalid(message: &str) -> DraftError {
    DraftError::InvalidTable {
        message: message.to_string(),
    }
}

fn decode_split(obj: &Map<String, Value>, columns: &mut BTreeSet<String>) -> Result<Vec<GameRow>> {
    let names: Vec<&str> = obj["columns"]
        .as_array()
        .ok_or_else(|| invalid("split `columns` must be an array"))?
        .iter()
        .map(|name| name.as_str().ok_or_else(|| invalid("column names must be strings")))
        .collect::<Result<_>>()?;
    let data = obj["data"]
        .as_array()
        .ok_or_else(|| invalid("split `data` must be an array"))?;

    data.iter()
        .map(|row| {
            let cells = row
                .as_array()
                .ok_or_else(|| invalid("split rows must be arrays"))?;
            row_from_cells(names.iter().copied().zip(cells.iter()), columns)
        })
        .collect()
}

fn decode_columns(obj: &Map<String, Value>, columns: &mut BTreeSet<String>) -> Result<Vec<GameRow>> {
    let mut labels: BTreeSet<&str> = BTreeSet::new();
    for column in obj.values() {
        let cells = column
            .as_object()
            .ok_or_else(|| invalid("columns orient expects {column: {index: value}}"))?;
        labels.extend(cells.keys().map(String::as_str));
    }
    let mut index: Vec<&str> = labels.into_iter().collect();
    // pandas writes integer row labels as strings; numeric labels first, in numeric order
    index.sort_by_key(|label| row_label_key(*label));

    index
        .iter()
        .map(|key| {
            let cells = obj
                .iter()
                .map(|(name, column)| (name.as_str(), column.get(*key).unwrap_or(&Value::Null)));
            row_from_cells(cells, columns)
        })
        .collect()
}

fn row_label_key(label: &str) -> (bool, u64, &str) {
    match label.parse::<u64>() {
        Ok(n) => (false, n, label),
        Err(_) => (true, 0, label),
    }
}

fn row_from_cells<'a>(
    cells: impl Iterator<Item = (&'a str, &'a Value)>,
    columns: &mut BTreeSet<String>,
) -> Result<GameRow> {
    let mut person_id = None;
    let mut row = GameRow::default();

    for (name, value) in cells {
        match name {
            PERSON_ID => person_id = parse_person_id(value),
            GAME_ID => {
                row.game_id = match value {
                    Value::String(s) => Some(s.clone()),
                    Value::Number(n) => Some(n.to_string()),
                    _ => None,
                }
            }
            _ => match value {
                Value::Number(n) => {
                    if let Some(v) = n.as_f64() {
                        columns.insert(name.to_string());
                        row.stats.insert(name.to_string(), v);
                    }
                }
                Value::Bool(b) => {
                    columns.insert(name.to_string());
                    row.stats.insert(name.to_string(), if *b { 1.0 } else { 0.0 });
                }
                Value::Null => {
                    columns.insert(name.to_string());
                }
                // names, dates and other text columns are not statistics
                _ => {}
            },
        }
    }

    row.person_id = person_id.ok_or_else(|| DraftError::missing(PERSON_ID))?;
    Ok(row)
}

fn parse_person_id(value: &Value) -> Option<PlayerId> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0 && *f >= 0.0).map(|f| f as u64))
            .map(PlayerId::new),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
