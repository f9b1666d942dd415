use crate::{
    ClientID, CompletionRecord, ReadError, UpdateError, WeeklySchedule, WeeklyWorkoutTracker,
    Weekday,
};

#[allow(async_fn_in_trait)]
pub trait WorkoutLogService {
    async fn get_workout_log(&self, client_id: &ClientID)
    -> Result<Option<WorkoutLog>, ReadError>;
    async fn save_workout_log(&self, workout_log: WorkoutLog) -> Result<WorkoutLog, UpdateError>;

    /// Restores the tracker of a client, or creates a tracker with the default schedule if
    /// nothing has been stored yet.
    async fn load_tracker(&self, client_id: &ClientID) -> Result<WeeklyWorkoutTracker, ReadError> {
        Ok(self
            .get_workout_log(client_id)
            .await?
            .map_or_else(WeeklyWorkoutTracker::new, WeeklyWorkoutTracker::from_log))
    }

    async fn save_tracker(
        &self,
        client_id: &ClientID,
        tracker: &WeeklyWorkoutTracker,
    ) -> Result<WorkoutLog, UpdateError> {
        self.save_workout_log(tracker.to_log(client_id.clone()))
            .await
    }
}

#[allow(async_fn_in_trait)]
pub trait WorkoutLogRepository {
    async fn read_workout_log(&self, client_id: &ClientID)
    -> Result<Option<WorkoutLog>, ReadError>;
    async fn write_workout_log(&self, workout_log: WorkoutLog)
    -> Result<WorkoutLog, UpdateError>;
}

/// Persisted state of a tracker, stored per client.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutLog {
    pub client_id: ClientID,
    pub selected_day: Weekday,
    pub schedule: WeeklySchedule,
    pub completions: Vec<CompletionRecord>,
    pub archive: Vec<CompletionRecord>,
}
