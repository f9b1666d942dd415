use chrono::{DateTime, Utc};
use log::debug;

use crate::{ClientID, Exercise, Name, Series, TrackerError, Weekday, WorkoutLog};

/// Exercise lists for all seven days of a week.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct WeeklySchedule {
    days: [Vec<Exercise>; Weekday::COUNT],
}

impl WeeklySchedule {
    /// Schedule with the default Monday workout, all other days empty.
    #[must_use]
    pub fn seeded() -> Self {
        let mut schedule = Self::default();
        if let (Ok(pulldown), Ok(chin_up), Ok(two), Ok(one)) = (
            Name::new("Neutral Grip Pulldown"),
            Name::new("Strict Chin-up"),
            Series::new(2),
            Series::new(1),
        ) {
            *schedule.day_mut(Weekday::Monday) = vec![
                Exercise::new(pulldown, two, "10-12", "60"),
                Exercise::new(chin_up, one, "4", "90"),
            ];
        }
        schedule
    }

    #[must_use]
    pub fn day(&self, day: Weekday) -> &[Exercise] {
        &self.days[day.index()]
    }

    pub fn day_mut(&mut self, day: Weekday) -> &mut Vec<Exercise> {
        &mut self.days[day.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &[Exercise])> {
        Weekday::iter().map(|day| (day, self.day(day)))
    }

    pub fn reset_loads(&mut self) {
        self.days.iter_mut().flatten().for_each(Exercise::reset_load);
    }
}

impl FromIterator<(Weekday, Vec<Exercise>)> for WeeklySchedule {
    fn from_iter<T: IntoIterator<Item = (Weekday, Vec<Exercise>)>>(iter: T) -> Self {
        let mut schedule = Self::default();
        for (day, exercises) in iter {
            *schedule.day_mut(day) = exercises;
        }
        schedule
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRecord {
    pub day: Weekday,
    pub completed_at: DateTime<Utc>,
    pub exercises: Vec<Exercise>,
}

/// Observable state change of a tracker.
#[derive(Debug, Clone, PartialEq)]
pub enum Change {
    SelectedDay(Weekday),
    CurrentExercises(Vec<Exercise>),
}

impl Change {
    #[must_use]
    pub fn property_name(&self) -> &'static str {
        match self {
            Change::SelectedDay(_) => "selectedDay",
            Change::CurrentExercises(_) => "currentExercises",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionID(usize);

type Subscriber = Box<dyn FnMut(&Change)>;

/// Weekly exercise schedule of one user together with the log of completed days.
///
/// Each day can be committed at most once until a new week is started.
pub struct WeeklyWorkoutTracker {
    selected_day: Weekday,
    schedule: WeeklySchedule,
    completions: Vec<CompletionRecord>,
    archive: Vec<CompletionRecord>,
    subscribers: Vec<(SubscriptionID, Subscriber)>,
    next_subscription: usize,
}

impl WeeklyWorkoutTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::with_schedule(WeeklySchedule::seeded())
    }

    #[must_use]
    pub fn with_schedule(schedule: WeeklySchedule) -> Self {
        Self {
            selected_day: Weekday::Monday,
            schedule,
            completions: vec![],
            archive: vec![],
            subscribers: vec![],
            next_subscription: 0,
        }
    }

    #[must_use]
    pub fn from_log(log: WorkoutLog) -> Self {
        Self {
            selected_day: log.selected_day,
            completions: log.completions,
            archive: log.archive,
            ..Self::with_schedule(log.schedule)
        }
    }

    #[must_use]
    pub fn to_log(&self, client_id: ClientID) -> WorkoutLog {
        WorkoutLog {
            client_id,
            selected_day: self.selected_day,
            schedule: self.schedule.clone(),
            completions: self.completions.clone(),
            archive: self.archive.clone(),
        }
    }

    pub fn days(&self) -> impl Iterator<Item = Weekday> {
        Weekday::iter()
    }

    #[must_use]
    pub fn selected_day(&self) -> Weekday {
        self.selected_day
    }

    pub fn set_selected_day(&mut self, day: Weekday) {
        if self.selected_day == day {
            return;
        }
        self.selected_day = day;
        let exercises = self.current_exercises().to_vec();
        self.notify(&Change::SelectedDay(day));
        self.notify(&Change::CurrentExercises(exercises));
    }

    pub fn select_day(&mut self, name: &str) -> Result<(), TrackerError> {
        self.set_selected_day(Weekday::parse(name)?);
        Ok(())
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(&Change) + 'static) -> SubscriptionID {
        let id = SubscriptionID(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionID) -> bool {
        let len = self.subscribers.len();
        self.subscribers.retain(|(subscription, _)| *subscription != id);
        self.subscribers.len() < len
    }

    fn notify(&mut self, change: &Change) {
        for (_, subscriber) in &mut self.subscribers {
            subscriber(change);
        }
    }

    /// Exercises of the selected day.
    #[must_use]
    pub fn current_exercises(&self) -> &[Exercise] {
        self.schedule.day(self.selected_day)
    }

    /// Live exercise list of the selected day. Changes made through it are not announced
    /// to subscribers.
    pub fn current_exercises_mut(&mut self) -> &mut Vec<Exercise> {
        self.schedule.day_mut(self.selected_day)
    }

    pub fn add_exercise(&mut self, exercise: Exercise) {
        debug!("add exercise {} on {}", exercise.name, self.selected_day);
        self.current_exercises_mut().push(exercise);
    }

    pub fn edit_exercise(&mut self, index: usize, exercise: Exercise) -> Result<(), TrackerError> {
        let day = self.selected_day;
        let exercises = self.current_exercises_mut();
        let len = exercises.len();
        match exercises.get_mut(index) {
            Some(current) => {
                *current = exercise;
                Ok(())
            }
            None => Err(TrackerError::IndexOutOfRange { day, index, len }),
        }
    }

    #[must_use]
    pub fn schedule(&self) -> &WeeklySchedule {
        &self.schedule
    }

    #[must_use]
    pub fn completions(&self) -> &[CompletionRecord] {
        &self.completions
    }

    /// Completions of previous weeks, oldest first.
    #[must_use]
    pub fn archive(&self) -> &[CompletionRecord] {
        &self.archive
    }

    #[must_use]
    pub fn is_committed(&self, day: Weekday) -> bool {
        self.completions.iter().any(|c| c.day == day)
    }

    pub fn commit_selected_day(&mut self) -> bool {
        self.commit_selected_day_at(Utc::now())
    }

    /// Records the exercises of the selected day as completed and resets their loads.
    ///
    /// Returns `false` without any change if the day has no exercises or was already
    /// committed in the current week.
    pub fn commit_selected_day_at(&mut self, completed_at: DateTime<Utc>) -> bool {
        let day = self.selected_day;

        if self.current_exercises().is_empty() {
            debug!("nothing to commit on {day}");
            return false;
        }

        if self.is_committed(day) {
            debug!("{day} already committed");
            return false;
        }

        let exercises = self.current_exercises().to_vec();
        self.completions.push(CompletionRecord {
            day,
            completed_at,
            exercises,
        });
        self.current_exercises_mut()
            .iter_mut()
            .for_each(Exercise::reset_load);

        debug!("committed {day} at {}", completed_at.to_rfc3339());
        true
    }

    /// Starts a new week.
    ///
    /// The completions of the current week are moved to the archive and all loads are reset,
    /// so that every day can be committed again. The exercises themselves are kept.
    pub fn start_new_week(&mut self) -> usize {
        let archived = self.completions.len();
        self.archive.append(&mut self.completions);
        self.schedule.reset_loads();
        debug!("started new week, archived {archived} completions");
        archived
    }
}

impl Default for WeeklyWorkoutTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for WeeklyWorkoutTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeeklyWorkoutTracker")
            .field("selected_day", &self.selected_day)
            .field("schedule", &self.schedule)
            .field("completions", &self.completions)
            .field("archive", &self.archive)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
