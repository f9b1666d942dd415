use chrono::{DateTime, Utc};

use crate::{Exercise, RoutineID, WeekID, Weekday, WorkoutPlanID};

/// Multi-week workout plan a trainer prepares for a client.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutPlan {
    pub id: WorkoutPlanID,
    pub name: String,
    pub weeks: Vec<Week>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WorkoutPlan {
    #[must_use]
    pub fn new(name: &str, now: DateTime<Utc>) -> Self {
        Self {
            id: WorkoutPlanID::random(),
            name: name.to_string(),
            weeks: vec![Week::new(1)],
            created_at: now,
            updated_at: now,
        }
    }

    /// Appends an empty week and returns its number.
    pub fn add_week(&mut self, now: DateTime<Utc>) -> u32 {
        let number = u32::try_from(self.weeks.len()).unwrap_or(u32::MAX - 1) + 1;
        self.weeks.push(Week::new(number));
        self.updated_at = now;
        number
    }

    #[must_use]
    pub fn week(&self, number: u32) -> Option<&Week> {
        self.weeks.iter().find(|w| w.number == number)
    }

    /// Replaces the routine of a day in the given week. The day of the routine is set to
    /// `day`. Returns `false` if the week does not exist.
    pub fn set_routine(
        &mut self,
        week_number: u32,
        day: Weekday,
        routine: DailyRoutine,
        now: DateTime<Utc>,
    ) -> bool {
        let Some(week) = self.weeks.iter_mut().find(|w| w.number == week_number) else {
            return false;
        };
        let routine = DailyRoutine { day, ..routine };
        match week.routines.iter_mut().find(|r| r.day == day) {
            Some(current) => *current = routine,
            None => week.routines.push(routine),
        }
        self.updated_at = now;
        true
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Week {
    pub id: WeekID,
    pub number: u32,
    pub routines: Vec<DailyRoutine>,
}

impl Week {
    #[must_use]
    pub fn new(number: u32) -> Self {
        Self {
            id: WeekID::random(),
            number,
            routines: Weekday::iter().map(DailyRoutine::new).collect(),
        }
    }

    #[must_use]
    pub fn routine(&self, day: Weekday) -> Option<&DailyRoutine> {
        self.routines.iter().find(|r| r.day == day)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyRoutine {
    pub id: RoutineID,
    pub day: Weekday,
    pub title: String,
    pub description: String,
    pub exercises: Vec<Exercise>,
}

impl DailyRoutine {
    #[must_use]
    pub fn new(day: Weekday) -> Self {
        Self {
            id: RoutineID::random(),
            day,
            title: format!("Rutina {day}"),
            description: String::new(),
            exercises: vec![],
        }
    }
}
