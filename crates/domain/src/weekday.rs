use std::str::FromStr;

use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

use crate::TrackerError;

/// A slot of the weekly schedule.
///
/// The Spanish labels of the web planner are accepted when parsing, but a day is always
/// displayed and persisted by its English name.
#[derive(
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
)]
#[strum(ascii_case_insensitive)]
pub enum Weekday {
    #[strum(to_string = "Monday", serialize = "Lunes")]
    Monday,
    #[strum(to_string = "Tuesday", serialize = "Martes")]
    Tuesday,
    #[strum(to_string = "Wednesday", serialize = "Miércoles", serialize = "Miercoles")]
    Wednesday,
    #[strum(to_string = "Thursday", serialize = "Jueves")]
    Thursday,
    #[strum(to_string = "Friday", serialize = "Viernes")]
    Friday,
    #[strum(to_string = "Saturday", serialize = "Sábado", serialize = "Sabado")]
    Saturday,
    #[strum(to_string = "Sunday", serialize = "Domingo")]
    Sunday,
}

impl Weekday {
    pub const COUNT: usize = 7;

    pub fn iter() -> impl Iterator<Item = Weekday> {
        <Self as IntoEnumIterator>::iter()
    }

    pub fn parse(name: &str) -> Result<Self, TrackerError> {
        Weekday::from_str(name.trim()).map_err(|_| TrackerError::InvalidDay(name.to_string()))
    }

    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(value: chrono::Weekday) -> Self {
        match value {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}
