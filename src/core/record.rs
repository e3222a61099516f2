use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ChartError, ChartResult};

pub const SCORE_MIN: f64 = 0.0;
pub const SCORE_MAX: f64 = 10.0;

const HOMERIC_DATA_JSON: &str = include_str!("../../data/iliad_colour_data.json");

/// One ancient Greek colour term and its plotted scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorTermRecord {
    /// Greek orthography; unique join key across a data set.
    #[serde(rename = "Greek_Term")]
    pub term: String,
    #[serde(rename = "Transliteration")]
    pub transliteration: String,
    #[serde(rename = "English")]
    pub english_gloss: String,
    #[serde(rename = "Context")]
    pub context: String,
    #[serde(rename = "Unique_gleam_score")]
    pub gleam_score: f64,
    #[serde(rename = "Luminosity_Score")]
    pub luminosity_score: f64,
}

impl ColorTermRecord {
    #[must_use]
    pub fn new(
        term: impl Into<String>,
        transliteration: impl Into<String>,
        english_gloss: impl Into<String>,
        context: impl Into<String>,
        gleam_score: f64,
        luminosity_score: f64,
    ) -> Self {
        Self {
            term: term.into(),
            transliteration: transliteration.into(),
            english_gloss: english_gloss.into(),
            context: context.into(),
            gleam_score,
            luminosity_score,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.term.trim().is_empty() {
            return Err(ChartError::InvalidData(
                "colour term must not be empty".to_owned(),
            ));
        }
        for (field, value) in [
            ("gleam score", self.gleam_score),
            ("luminosity score", self.luminosity_score),
        ] {
            if !value.is_finite() || !(SCORE_MIN..=SCORE_MAX).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "{field} of `{}` must be finite and in [{SCORE_MIN}, {SCORE_MAX}], got {value}",
                    self.term
                )));
            }
        }
        Ok(())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DataSetPayload {
    Records(Vec<ColorTermRecord>),
    Wrapped { colour_scales: Vec<ColorTermRecord> },
}

/// Immutable, validated set of colour-term records.
///
/// Loaded once per view mount. Construction is all-or-nothing: any invalid
/// record rejects the whole set.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSet {
    records: Vec<ColorTermRecord>,
}

impl DataSet {
    pub fn new(records: Vec<ColorTermRecord>) -> ChartResult<Self> {
        if records.is_empty() {
            return Err(ChartError::InvalidData(
                "data set must contain at least one record".to_owned(),
            ));
        }

        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            record.validate()?;
            if !seen.insert(record.term.as_str()) {
                return Err(ChartError::InvalidData(format!(
                    "duplicate colour term `{}`",
                    record.term
                )));
            }
        }

        debug!(count = records.len(), "loaded colour-term data set");
        Ok(Self { records })
    }

    /// Parses either a bare record array or an object with a
    /// `colour_scales` array.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let payload: DataSetPayload = serde_json::from_str(input)
            .map_err(|err| ChartError::DataLoad(format!("invalid data set json: {err}")))?;
        Self::from_payload(payload)
    }

    pub fn from_reader<T: Read>(reader: T) -> ChartResult<Self> {
        let payload: DataSetPayload = serde_json::from_reader(reader)
            .map_err(|err| ChartError::DataLoad(format!("invalid data set json: {err}")))?;
        Self::from_payload(payload)
    }

    pub fn from_path(path: impl AsRef<Path>) -> ChartResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| {
            ChartError::DataLoad(format!("failed to open `{}`: {err}", path.display()))
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// The bundled fourteen Homeric colour terms from the *Iliad*.
    pub fn homeric() -> ChartResult<Self> {
        Self::from_json_str(HOMERIC_DATA_JSON)
    }

    fn from_payload(payload: DataSetPayload) -> ChartResult<Self> {
        match payload {
            DataSetPayload::Records(records) | DataSetPayload::Wrapped {
                colour_scales: records,
            } => Self::new(records),
        }
    }

    #[must_use]
    pub fn records(&self) -> &[ColorTermRecord] {
        &self.records
    }

    #[must_use]
    pub fn get(&self, term: &str) -> Option<&ColorTermRecord> {
        self.records.iter().find(|record| record.term == term)
    }

    #[must_use]
    pub fn contains(&self, term: &str) -> bool {
        self.get(term).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColorTermRecord> {
        self.records.iter()
    }
}
