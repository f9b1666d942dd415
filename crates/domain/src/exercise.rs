use derive_more::{Display, Into};
use thiserror::Error;

use crate::Name;

#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    pub name: Name,
    pub series_count: Series,
    pub rep_range: String,
    pub rest_seconds: String,
    pub load_kg: Load,
    pub video_url: Option<String>,
    pub notes: Option<String>,
}

impl Exercise {
    #[must_use]
    pub fn new(name: Name, series_count: Series, rep_range: &str, rest_seconds: &str) -> Self {
        Self {
            name,
            series_count,
            rep_range: rep_range.trim().to_string(),
            rest_seconds: rest_seconds.trim().to_string(),
            load_kg: Load::default(),
            video_url: None,
            notes: None,
        }
    }

    #[must_use]
    pub fn with_load(mut self, load_kg: Load) -> Self {
        self.load_kg = load_kg;
        self
    }

    pub fn reset_load(&mut self) {
        self.load_kg = Load::default();
    }
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Series(u32);

impl Series {
    pub fn new(value: u32) -> Result<Self, SeriesError> {
        if value == 0 {
            return Err(SeriesError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Series {
    type Error = SeriesError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u32>() {
            Ok(parsed_value) => Series::new(parsed_value),
            Err(_) => Err(SeriesError::ParseError),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum SeriesError {
    #[error("Series must be a positive integer")]
    OutOfRange,
    #[error("Series must be an integer")]
    ParseError,
}

/// External load in kilograms.
#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Load(f32);

impl Load {
    pub fn new(value: f32) -> Result<Self, LoadError> {
        if !(0.0..1000.0).contains(&value) {
            return Err(LoadError::OutOfRange);
        }

        Ok(Self(value))
    }

    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }
}

impl TryFrom<&str> for Load {
    type Error = LoadError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value.trim().is_empty() {
            return Ok(Load::default());
        }
        match value.replace(',', ".").trim().parse::<f32>() {
            Ok(parsed_value) => Load::new(parsed_value),
            Err(_) => Err(LoadError::ParseError),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum LoadError {
    #[error("Load must be in the range 0.0 to 999.9 kg")]
    OutOfRange,
    #[error("Load must be a decimal")]
    ParseError,
}
