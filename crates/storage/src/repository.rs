use std::error::Error;

use chrono::{DateTime, NaiveDate, Utc};
use fitterone_domain as domain;
use serde::{Deserialize, Serialize};

use crate::{
    flat_storage::FlatStorage,
    keyed_record_store::{Collection, KeyedRecordStore, Record, StoreError},
};

impl From<StoreError> for domain::StorageError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::Unavailable(reason) => domain::StorageError::Unavailable(reason),
            err => domain::StorageError::Other(err.into()),
        }
    }
}

impl From<StoreError> for domain::ReadError {
    fn from(value: StoreError) -> Self {
        domain::ReadError::Storage(value.into())
    }
}

impl From<StoreError> for domain::UpdateError {
    fn from(value: StoreError) -> Self {
        domain::UpdateError::Storage(value.into())
    }
}

impl From<StoreError> for domain::DeleteError {
    fn from(value: StoreError) -> Self {
        domain::DeleteError::Storage(value.into())
    }
}

fn try_into_all<T, R>(records: Vec<R>) -> Result<Vec<T>, Box<dyn Error>>
where
    T: TryFrom<R, Error = Box<dyn Error>>,
{
    records.into_iter().map(T::try_from).collect()
}

impl<S: FlatStorage> domain::UserRepository for KeyedRecordStore<S> {
    async fn read_user_by_email(
        &self,
        email: &domain::Email,
    ) -> Result<Option<domain::User>, domain::ReadError> {
        let email = email.to_string();
        let user = self.find_one(Collection::Users, |u: &User| u.email == email)?;
        Ok(user.map(domain::User::try_from).transpose()?)
    }

    async fn write_user(&self, user: domain::User) -> Result<domain::User, domain::UpdateError> {
        self.put(Collection::Users, &User::from(&user))?;
        Ok(user)
    }
}

impl<S: FlatStorage> domain::ClientRepository for KeyedRecordStore<S> {
    async fn read_clients_by_trainer(
        &self,
        trainer_id: &domain::TrainerID,
    ) -> Result<Vec<domain::Client>, domain::ReadError> {
        let clients = self.find_all(Collection::Clients, |c: &Client| {
            c.trainer.id.as_deref() == Some(trainer_id.as_str())
        })?;
        Ok(try_into_all(clients)?)
    }

    async fn read_client_by_email(
        &self,
        email: &domain::Email,
    ) -> Result<Option<domain::Client>, domain::ReadError> {
        let email = email.to_string();
        let client = self.find_one(Collection::Clients, |c: &Client| {
            c.profile.email == email
        })?;
        Ok(client.map(domain::Client::try_from).transpose()?)
    }

    async fn write_client(
        &self,
        client: domain::Client,
    ) -> Result<domain::Client, domain::UpdateError> {
        self.put(Collection::Clients, &Client::from(&client))?;
        Ok(client)
    }

    async fn merge_client(
        &self,
        client: domain::Client,
    ) -> Result<domain::Client, domain::UpdateError> {
        let merged = self.update(Collection::Clients, &Client::from(&client), |c: &Client| {
            c.profile.email.clone()
        })?;
        Ok(domain::Client::try_from(merged)?)
    }
}

impl<S: FlatStorage> domain::TrainerRepository for KeyedRecordStore<S> {
    async fn read_trainers(&self) -> Result<Vec<domain::Trainer>, domain::ReadError> {
        Ok(try_into_all(
            self.get_all::<Trainer>(Collection::Trainers)?,
        )?)
    }

    async fn read_trainer_by_email(
        &self,
        email: &domain::Email,
    ) -> Result<Option<domain::Trainer>, domain::ReadError> {
        let email = email.to_string();
        let trainer = self.find_one(Collection::Trainers, |t: &Trainer| t.email == email)?;
        Ok(trainer.map(domain::Trainer::try_from).transpose()?)
    }

    async fn write_trainer(
        &self,
        trainer: domain::Trainer,
    ) -> Result<domain::Trainer, domain::UpdateError> {
        self.put(Collection::Trainers, &Trainer::from(&trainer))?;
        Ok(trainer)
    }
}

impl<S: FlatStorage> domain::PlanRepository for KeyedRecordStore<S> {
    async fn read_plans(&self) -> Result<Vec<domain::Plan>, domain::ReadError> {
        Ok(try_into_all(self.get_all::<Plan>(Collection::Plans)?)?)
    }

    async fn read_plans_by_trainer(
        &self,
        trainer_id: &domain::TrainerID,
    ) -> Result<Vec<domain::Plan>, domain::ReadError> {
        let plans = self.find_all(Collection::Plans, |p: &Plan| {
            p.trainer_id == trainer_id.as_str()
        })?;
        Ok(try_into_all(plans)?)
    }

    async fn write_plan(&self, plan: domain::Plan) -> Result<domain::Plan, domain::UpdateError> {
        self.put(Collection::Plans, &Plan::from(&plan))?;
        Ok(plan)
    }
}

impl<S: FlatStorage> domain::WorkoutLogRepository for KeyedRecordStore<S> {
    async fn read_workout_log(
        &self,
        client_id: &domain::ClientID,
    ) -> Result<Option<domain::WorkoutLog>, domain::ReadError> {
        let workout_log = self.get::<WorkoutLog>(Collection::Workouts, client_id)?;
        Ok(workout_log.map(domain::WorkoutLog::try_from).transpose()?)
    }

    async fn write_workout_log(
        &self,
        workout_log: domain::WorkoutLog,
    ) -> Result<domain::WorkoutLog, domain::UpdateError> {
        self.put(Collection::Workouts, &WorkoutLog::from(&workout_log))?;
        Ok(workout_log)
    }
}

impl<S: FlatStorage> domain::DatabaseRepository for KeyedRecordStore<S> {
    async fn clear_all(&self) -> Result<(), domain::DeleteError> {
        Ok(KeyedRecordStore::clear_all(self)?)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub created_at: DateTime<Utc>,
}

impl Record for User {
    fn id(&self) -> &str {
        &self.id
    }
}

impl From<&domain::User> for User {
    fn from(value: &domain::User) -> Self {
        Self {
            id: value.id.to_string(),
            email: value.email.to_string(),
            kind: value.kind.to_string(),
            created_at: value.created_at,
        }
    }
}

impl TryFrom<User> for domain::User {
    type Error = Box<dyn Error>;

    fn try_from(value: User) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            email: domain::Email::new(&value.email)?,
            kind: value.kind.parse::<domain::UserKind>()?,
            created_at: value.created_at,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Trainer {
    pub id: String,
    pub username: String,
    pub name: String,
    pub email: String,
    pub specialty: String,
    pub rating: f32,
    pub clients: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
}

impl Record for Trainer {
    fn id(&self) -> &str {
        &self.id
    }
}

impl From<&domain::Trainer> for Trainer {
    fn from(value: &domain::Trainer) -> Self {
        Self {
            id: value.id.to_string(),
            username: value.username.clone(),
            name: value.name.to_string(),
            email: value.email.to_string(),
            specialty: value.specialty.clone(),
            rating: value.rating,
            clients: value.clients,
            photo_url: value.photo_url.clone(),
            bio: value.bio.clone(),
            certifications: value.certifications.clone(),
        }
    }
}

impl TryFrom<Trainer> for domain::Trainer {
    type Error = Box<dyn Error>;

    fn try_from(value: Trainer) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            username: value.username,
            name: domain::Name::new(&value.name)?,
            email: domain::Email::new(&value.email)?,
            specialty: value.specialty,
            rating: value.rating,
            clients: value.clients,
            photo_url: value.photo_url,
            bio: value.bio,
            certifications: value.certifications,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub email: String,
    pub profile: Profile,
    #[serde(default)]
    pub objectives: Vec<String>,
    pub status: String,
    #[serde(default)]
    pub trainer: TrainerLink,
    #[serde(default)]
    pub progress: Vec<ProgressRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workout_plan: Option<WorkoutPlan>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for Client {
    fn id(&self) -> &str {
        &self.id
    }
}

impl From<&domain::Client> for Client {
    fn from(value: &domain::Client) -> Self {
        Self {
            id: value.id.to_string(),
            email: value.email.to_string(),
            profile: Profile::from(&value.profile),
            objectives: value.objectives.clone(),
            status: value.status.to_string(),
            trainer: TrainerLink::from(&value.trainer),
            progress: value.progress.iter().map(ProgressRecord::from).collect(),
            workout_plan: value.workout_plan.as_ref().map(WorkoutPlan::from),
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl TryFrom<Client> for domain::Client {
    type Error = Box<dyn Error>;

    fn try_from(value: Client) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            email: domain::Email::new(&value.email)?,
            profile: domain::Profile::try_from(value.profile)?,
            objectives: value.objectives,
            status: value.status.parse::<domain::ClientStatus>()?,
            trainer: domain::TrainerLink::try_from(value.trainer)?,
            progress: value
                .progress
                .into_iter()
                .map(domain::ProgressRecord::from)
                .collect(),
            workout_plan: value
                .workout_plan
                .map(domain::WorkoutPlan::try_from)
                .transpose()?,
            created_at: value.created_at,
            updated_at: value.updated_at,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub weight: f32,
    #[serde(default)]
    pub height: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

impl From<&domain::Profile> for Profile {
    fn from(value: &domain::Profile) -> Self {
        Self {
            name: value.name.to_string(),
            email: value.email.to_string(),
            weight: value.weight,
            height: value.height,
            photo_url: value.photo_url.clone(),
        }
    }
}

impl TryFrom<Profile> for domain::Profile {
    type Error = Box<dyn Error>;

    fn try_from(value: Profile) -> Result<Self, Self::Error> {
        Ok(Self {
            name: domain::Name::new(&value.name)?,
            email: domain::Email::new(&value.email)?,
            weight: value.weight,
            height: value.height,
            photo_url: value.photo_url,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TrainerLink {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<String>,
}

impl From<&domain::TrainerLink> for TrainerLink {
    fn from(value: &domain::TrainerLink) -> Self {
        Self {
            id: value.id.as_ref().map(ToString::to_string),
            status: value.status.map(|s| s.to_string()),
            plan_id: value.plan_id.as_ref().map(ToString::to_string),
        }
    }
}

impl TryFrom<TrainerLink> for domain::TrainerLink {
    type Error = Box<dyn Error>;

    fn try_from(value: TrainerLink) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.map(domain::TrainerID::from),
            status: value
                .status
                .map(|s| s.parse::<domain::RequestStatus>())
                .transpose()?,
            plan_id: value.plan_id.map(domain::PlanID::from),
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProgressRecord {
    pub date: NaiveDate,
    pub weight: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measurements: Option<Measurements>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl From<&domain::ProgressRecord> for ProgressRecord {
    fn from(value: &domain::ProgressRecord) -> Self {
        Self {
            date: value.date,
            weight: value.weight,
            measurements: value.measurements.map(Measurements::from),
            notes: value.notes.clone(),
        }
    }
}

impl From<ProgressRecord> for domain::ProgressRecord {
    fn from(value: ProgressRecord) -> Self {
        Self {
            date: value.date,
            weight: value.weight,
            measurements: value.measurements.map(domain::Measurements::from),
            notes: value.notes,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq)]
pub struct Measurements {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chest: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waist: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arms: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legs: Option<f32>,
}

impl From<domain::Measurements> for Measurements {
    fn from(value: domain::Measurements) -> Self {
        Self {
            chest: value.chest,
            waist: value.waist,
            arms: value.arms,
            legs: value.legs,
        }
    }
}

impl From<Measurements> for domain::Measurements {
    fn from(value: Measurements) -> Self {
        Self {
            chest: value.chest,
            waist: value.waist,
            arms: value.arms,
            legs: value.legs,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
    pub id: String,
    pub name: String,
    pub weeks: Vec<Week>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&domain::WorkoutPlan> for WorkoutPlan {
    fn from(value: &domain::WorkoutPlan) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name.clone(),
            weeks: value.weeks.iter().map(Week::from).collect(),
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl TryFrom<WorkoutPlan> for domain::WorkoutPlan {
    type Error = Box<dyn Error>;

    fn try_from(value: WorkoutPlan) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            name: value.name,
            weeks: try_into_all(value.weeks)?,
            created_at: value.created_at,
            updated_at: value.updated_at,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Week {
    pub id: String,
    pub number: u32,
    pub routines: Vec<DailyRoutine>,
}

impl From<&domain::Week> for Week {
    fn from(value: &domain::Week) -> Self {
        Self {
            id: value.id.to_string(),
            number: value.number,
            routines: value.routines.iter().map(DailyRoutine::from).collect(),
        }
    }
}

impl TryFrom<Week> for domain::Week {
    type Error = Box<dyn Error>;

    fn try_from(value: Week) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            number: value.number,
            routines: try_into_all(value.routines)?,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DailyRoutine {
    pub id: String,
    pub day: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub exercises: Vec<Exercise>,
}

impl From<&domain::DailyRoutine> for DailyRoutine {
    fn from(value: &domain::DailyRoutine) -> Self {
        Self {
            id: value.id.to_string(),
            day: value.day.to_string(),
            title: value.title.clone(),
            description: value.description.clone(),
            exercises: value.exercises.iter().map(Exercise::from).collect(),
        }
    }
}

impl TryFrom<DailyRoutine> for domain::DailyRoutine {
    type Error = Box<dyn Error>;

    fn try_from(value: DailyRoutine) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            day: domain::Weekday::parse(&value.day)?,
            title: value.title,
            description: value.description,
            exercises: try_into_all(value.exercises)?,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub name: String,
    pub series: u32,
    pub reps: String,
    pub pause: String,
    pub weight: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl From<&domain::Exercise> for Exercise {
    fn from(value: &domain::Exercise) -> Self {
        Self {
            name: value.name.to_string(),
            series: value.series_count.into(),
            reps: value.rep_range.clone(),
            pause: value.rest_seconds.clone(),
            weight: value.load_kg.into(),
            video_url: value.video_url.clone(),
            notes: value.notes.clone(),
        }
    }
}

impl TryFrom<Exercise> for domain::Exercise {
    type Error = Box<dyn Error>;

    fn try_from(value: Exercise) -> Result<Self, Self::Error> {
        Ok(Self {
            name: domain::Name::new(&value.name)?,
            series_count: domain::Series::new(value.series)?,
            rep_range: value.reps,
            rest_seconds: value.pause,
            load_kg: domain::Load::new(value.weight)?,
            video_url: value.video_url,
            notes: value.notes,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: String,
    pub trainer_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub duration: u32,
    pub price: f32,
    #[serde(default)]
    pub features: Vec<String>,
}

impl Record for Plan {
    fn id(&self) -> &str {
        &self.id
    }
}

impl From<&domain::Plan> for Plan {
    fn from(value: &domain::Plan) -> Self {
        Self {
            id: value.id.to_string(),
            trainer_id: value.trainer_id.to_string(),
            name: value.name.to_string(),
            description: value.description.clone(),
            duration: value.duration_months,
            price: value.price,
            features: value.features.clone(),
        }
    }
}

impl TryFrom<Plan> for domain::Plan {
    type Error = Box<dyn Error>;

    fn try_from(value: Plan) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            trainer_id: value.trainer_id.into(),
            name: domain::Name::new(&value.name)?,
            description: value.description,
            duration_months: value.duration,
            price: value.price,
            features: value.features,
        })
    }
}

/// Tracker state of a client, stored under the id of the client.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutLog {
    pub id: String,
    pub selected_day: String,
    pub schedule: Vec<ScheduleDay>,
    #[serde(default)]
    pub completions: Vec<CompletionRecord>,
    #[serde(default)]
    pub archive: Vec<CompletionRecord>,
}

impl Record for WorkoutLog {
    fn id(&self) -> &str {
        &self.id
    }
}

impl From<&domain::WorkoutLog> for WorkoutLog {
    fn from(value: &domain::WorkoutLog) -> Self {
        Self {
            id: value.client_id.to_string(),
            selected_day: value.selected_day.to_string(),
            schedule: value
                .schedule
                .iter()
                .map(|(day, exercises)| ScheduleDay {
                    day: day.to_string(),
                    exercises: exercises.iter().map(Exercise::from).collect(),
                })
                .collect(),
            completions: value.completions.iter().map(CompletionRecord::from).collect(),
            archive: value.archive.iter().map(CompletionRecord::from).collect(),
        }
    }
}

impl TryFrom<WorkoutLog> for domain::WorkoutLog {
    type Error = Box<dyn Error>;

    fn try_from(value: WorkoutLog) -> Result<Self, Self::Error> {
        let mut schedule = domain::WeeklySchedule::default();
        for day in value.schedule {
            *schedule.day_mut(domain::Weekday::parse(&day.day)?) = try_into_all(day.exercises)?;
        }

        Ok(Self {
            client_id: value.id.into(),
            selected_day: domain::Weekday::parse(&value.selected_day)?,
            schedule,
            completions: try_into_all(value.completions)?,
            archive: try_into_all(value.archive)?,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ScheduleDay {
    pub day: String,
    pub exercises: Vec<Exercise>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CompletionRecord {
    pub day: String,
    pub datetime: DateTime<Utc>,
    pub exercises: Vec<Exercise>,
}

impl From<&domain::CompletionRecord> for CompletionRecord {
    fn from(value: &domain::CompletionRecord) -> Self {
        Self {
            day: value.day.to_string(),
            datetime: value.completed_at,
            exercises: value.exercises.iter().map(Exercise::from).collect(),
        }
    }
}

impl TryFrom<CompletionRecord> for domain::CompletionRecord {
    type Error = Box<dyn Error>;

    fn try_from(value: CompletionRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            day: domain::Weekday::parse(&value.day)?,
            completed_at: value.datetime,
            exercises: try_into_all(value.exercises)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use fitterone_domain::{
        ClientService, DatabaseService, PlanService, TrainerService, UserService,
        WorkoutLogService,
    };
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::{flat_storage::MemoryStorage, tests::data};

    use super::*;

    fn service() -> domain::Service<KeyedRecordStore<MemoryStorage>> {
        domain::Service::new(KeyedRecordStore::new(MemoryStorage::new()))
    }

    #[test]
    fn test_user_format() {
        assert_eq!(
            serde_json::to_value(User::from(&*data::TRAINER_USER)).unwrap(),
            json!({
                "id": "trainer-1",
                "email": "ana@fitterone.com",
                "type": "trainer",
                "createdAt": "2024-03-04T18:30:00Z"
            })
        );
    }

    #[test]
    fn test_exercise_format() {
        assert_eq!(
            serde_json::to_value(Exercise::from(&*data::EXERCISE)).unwrap(),
            json!({
                "name": "Goblet Squat",
                "series": 3,
                "reps": "8-10",
                "pause": "90",
                "weight": 24.0
            })
        );
    }

    #[test]
    fn test_exercise_invalid_series() {
        let exercise = Exercise {
            series: 0,
            ..Exercise::from(&*data::EXERCISE)
        };
        assert!(domain::Exercise::try_from(exercise).is_err());
    }

    #[test]
    fn test_workout_log_format() {
        let value = serde_json::to_value(WorkoutLog::from(&*data::WORKOUT_LOG)).unwrap();

        assert_eq!(value["id"], json!("client-1"));
        assert_eq!(value["selectedDay"], json!("Thursday"));
        assert_eq!(value["schedule"][0]["day"], json!("Monday"));
        assert_eq!(value["schedule"][0]["exercises"][2]["weight"], json!(0.0));
        assert_eq!(value["completions"][0]["day"], json!("Monday"));
        assert_eq!(
            value["completions"][0]["datetime"],
            json!("2024-03-04T18:30:00Z")
        );
        assert_eq!(
            value["completions"][0]["exercises"][2]["weight"],
            json!(24.0)
        );
    }

    #[test]
    fn test_workout_log_with_spanish_days() {
        let mut workout_log = WorkoutLog::from(&*data::WORKOUT_LOG);
        workout_log.selected_day = "Jueves".to_string();
        workout_log.schedule[0].day = "Lunes".to_string();

        assert_eq!(
            domain::WorkoutLog::try_from(workout_log).unwrap(),
            *data::WORKOUT_LOG
        );
    }

    #[test]
    fn test_workout_log_invalid_day() {
        let mut workout_log = WorkoutLog::from(&*data::WORKOUT_LOG);
        workout_log.selected_day = "Someday".to_string();
        assert_eq!(
            domain::WorkoutLog::try_from(workout_log)
                .unwrap_err()
                .to_string(),
            "invalid day: Someday"
        );
    }

    #[test]
    fn test_client_conversion() {
        assert_eq!(
            domain::Client::try_from(Client::from(&*data::CLIENT)).unwrap(),
            *data::CLIENT
        );
        assert_eq!(
            domain::Client::try_from(Client::from(&*data::CLIENT_2)).unwrap(),
            *data::CLIENT_2
        );
    }

    #[test]
    fn test_client_with_unknown_status() {
        let client = Client {
            status: "paused".to_string(),
            ..Client::from(&*data::CLIENT)
        };
        assert!(domain::Client::try_from(client).is_err());
    }

    #[test]
    fn test_store_error_conversion() {
        assert!(matches!(
            domain::ReadError::from(StoreError::Unavailable("quota".to_string())),
            domain::ReadError::Storage(domain::StorageError::Unavailable(reason)) if reason == "quota"
        ));
        assert!(matches!(
            domain::UpdateError::from(StoreError::MalformedRecord("a".to_string())),
            domain::UpdateError::Storage(domain::StorageError::Other(_))
        ));
    }

    #[tokio::test]
    async fn test_users() {
        let service = service();
        let email = data::TRAINER_USER.email.clone();

        assert_eq!(service.get_user_by_email(&email).await.unwrap(), None);
        service.save_user(data::TRAINER_USER.clone()).await.unwrap();
        assert_eq!(
            service.get_user_by_email(&email).await.unwrap(),
            Some(data::TRAINER_USER.clone())
        );
    }

    #[tokio::test]
    async fn test_trainers() {
        let service = service();
        service.save_trainer(data::TRAINER.clone()).await.unwrap();
        service.save_trainer(data::TRAINER_2.clone()).await.unwrap();

        assert_eq!(
            service.get_trainers().await.unwrap(),
            vec![data::TRAINER.clone(), data::TRAINER_2.clone()]
        );
        assert_eq!(
            service
                .get_trainer_by_email(&data::TRAINER_2.email)
                .await
                .unwrap(),
            Some(data::TRAINER_2.clone())
        );
        assert_eq!(
            service.search_trainers("POWER").await.unwrap(),
            vec![data::TRAINER_2.clone()]
        );
        assert_eq!(
            service.search_trainers("torres").await.unwrap(),
            vec![data::TRAINER.clone()]
        );
        assert_eq!(service.search_trainers("").await.unwrap().len(), 2);
        assert!(service.search_trainers("pilates").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_plans() {
        let service = service();
        service.save_plan(data::PLAN.clone()).await.unwrap();
        service.save_plan(data::PLAN_2.clone()).await.unwrap();

        assert_eq!(
            service.get_plans().await.unwrap(),
            vec![data::PLAN.clone(), data::PLAN_2.clone()]
        );
        assert_eq!(
            service
                .get_plans_by_trainer(&data::TRAINER_2.id)
                .await
                .unwrap(),
            vec![data::PLAN_2.clone()]
        );
        assert!(
            service
                .get_plans_by_trainer(&"unknown".into())
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_clients_by_trainer() {
        let service = service();
        service.save_client(data::CLIENT.clone()).await.unwrap();
        service.save_client(data::CLIENT_2.clone()).await.unwrap();

        assert_eq!(
            service
                .get_clients_by_trainer(&data::TRAINER.id)
                .await
                .unwrap(),
            vec![data::CLIENT.clone()]
        );
        assert!(
            service
                .get_clients_by_trainer(&data::TRAINER_2.id)
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_update_client_keeps_stored_id() {
        let service = service();
        service.save_client(data::CLIENT.clone()).await.unwrap();

        let mut client = data::CLIENT.clone();
        client.id = "fresh-id".into();
        client.objectives = vec!["Fuerza".to_string()];
        client.workout_plan = None;

        let updated = service.update_client(client).await.unwrap();

        assert_eq!(updated.id, data::CLIENT.id);
        assert_eq!(updated.objectives, vec!["Fuerza"]);
        assert_eq!(updated.workout_plan, data::CLIENT.workout_plan);
        assert_eq!(
            service
                .get_client_by_email(&data::CLIENT.email)
                .await
                .unwrap(),
            Some(updated)
        );
        assert_eq!(
            service.repository().index(Collection::Clients).unwrap(),
            vec!["client-1"]
        );
    }

    #[tokio::test]
    async fn test_client_lookup_by_profile_email() {
        let service = service();
        let mut client = data::CLIENT.clone();
        client.profile.email = domain::Email::new("profile@demo.com").unwrap();
        service.save_client(client.clone()).await.unwrap();

        assert_eq!(
            service
                .get_client_by_email(&client.profile.email)
                .await
                .unwrap(),
            Some(client.clone())
        );
        assert_eq!(
            service.get_client_by_email(&client.email).await.unwrap(),
            None
        );

        let updated = service
            .add_progress_record(
                &client.profile.email,
                domain::ProgressRecord {
                    date: NaiveDate::from_ymd_opt(2024, 3, 8).unwrap(),
                    weight: 63.5,
                    measurements: None,
                    notes: None,
                },
                *data::NOW + Duration::days(4),
            )
            .await
            .unwrap();
        assert_eq!(updated.id, client.id);
        assert_eq!(updated.progress.len(), 2);
        assert_eq!(
            service.repository().index(Collection::Clients).unwrap(),
            vec!["client-1"]
        );
    }

    #[tokio::test]
    async fn test_update_unknown_client_inserts() {
        let service = service();
        let updated = service.update_client(data::CLIENT_2.clone()).await.unwrap();
        assert_eq!(updated, *data::CLIENT_2);
        assert_eq!(
            service
                .get_client_by_email(&data::CLIENT_2.email)
                .await
                .unwrap(),
            Some(data::CLIENT_2.clone())
        );
    }

    #[tokio::test]
    async fn test_trainer_request() {
        let service = service();
        service.save_client(data::CLIENT_2.clone()).await.unwrap();
        let later = *data::NOW + Duration::hours(1);

        let client = service
            .request_trainer(
                &data::CLIENT_2.email,
                data::TRAINER_2.id.clone(),
                data::PLAN_2.id.clone(),
                later,
            )
            .await
            .unwrap();

        assert_eq!(
            client.trainer,
            domain::TrainerLink {
                id: Some(data::TRAINER_2.id.clone()),
                status: Some(domain::RequestStatus::Pending),
                plan_id: Some(data::PLAN_2.id.clone()),
            }
        );
        assert_eq!(client.status, domain::ClientStatus::New);
        assert_eq!(client.updated_at, later);
        assert_eq!(
            service
                .get_clients_by_trainer(&data::TRAINER_2.id)
                .await
                .unwrap(),
            vec![client]
        );

        let accepted = service
            .respond_to_request(&data::CLIENT_2.email, true, later)
            .await
            .unwrap();
        assert_eq!(
            accepted.trainer.status,
            Some(domain::RequestStatus::Accepted)
        );
        assert_eq!(accepted.status, domain::ClientStatus::Active);

        let rejected = service
            .respond_to_request(&data::CLIENT_2.email, false, later)
            .await
            .unwrap();
        assert_eq!(
            rejected.trainer.status,
            Some(domain::RequestStatus::Rejected)
        );
        assert_eq!(rejected.trainer.plan_id, None);
    }

    #[tokio::test]
    async fn test_request_trainer_for_unknown_client() {
        let service = service();
        assert!(matches!(
            service
                .request_trainer(
                    &data::CLIENT.email,
                    data::TRAINER.id.clone(),
                    data::PLAN.id.clone(),
                    *data::NOW,
                )
                .await,
            Err(domain::UpdateError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_client_status_and_progress() {
        let service = service();
        service.save_client(data::CLIENT.clone()).await.unwrap();

        let client = service
            .update_client_status(&data::CLIENT.email, domain::ClientStatus::Inactive, *data::NOW)
            .await
            .unwrap();
        assert_eq!(client.status, domain::ClientStatus::Inactive);

        let client = service
            .add_progress_record(
                &data::CLIENT.email,
                domain::ProgressRecord {
                    date: NaiveDate::from_ymd_opt(2024, 3, 8).unwrap(),
                    weight: 63.2,
                    measurements: None,
                    notes: None,
                },
                *data::NOW,
            )
            .await
            .unwrap();
        assert_eq!(client.progress.len(), 2);
        assert_eq!(client.profile.weight, 63.2);
        assert_eq!(
            service
                .get_client_by_email(&data::CLIENT.email)
                .await
                .unwrap()
                .map(|c| c.profile.weight),
            Some(63.2)
        );
    }

    #[tokio::test]
    async fn test_set_workout_plan() {
        let service = service();
        service.save_client(data::CLIENT_2.clone()).await.unwrap();
        let workout_plan = domain::WorkoutPlan::new("Plan de Diego", *data::NOW);

        let client = service
            .set_workout_plan(&data::CLIENT_2.email, workout_plan.clone(), *data::NOW)
            .await
            .unwrap();

        assert_eq!(client.workout_plan, Some(workout_plan.clone()));
        assert_eq!(
            service
                .get_client_by_email(&data::CLIENT_2.email)
                .await
                .unwrap()
                .and_then(|c| c.workout_plan),
            Some(workout_plan)
        );
    }

    #[tokio::test]
    async fn test_tracker_persistence() {
        let service = service();
        let client_id = domain::ClientID::from("client-1");

        let mut tracker = service.load_tracker(&client_id).await.unwrap();
        assert_eq!(tracker.current_exercises().len(), 2);
        assert!(tracker.completions().is_empty());

        tracker.add_exercise(data::EXERCISE.clone());
        assert!(tracker.commit_selected_day_at(*data::NOW));
        tracker.set_selected_day(domain::Weekday::Thursday);
        service.save_tracker(&client_id, &tracker).await.unwrap();

        let restored = service.load_tracker(&client_id).await.unwrap();
        assert_eq!(restored.to_log(client_id.clone()), *data::WORKOUT_LOG);
        assert!(restored.is_committed(domain::Weekday::Monday));
        assert_eq!(restored.selected_day(), domain::Weekday::Thursday);
    }

    #[tokio::test]
    async fn test_initialize_demo_data() {
        let service = service();
        service.save_plan(data::PLAN.clone()).await.unwrap();
        service.save_client(data::CLIENT.clone()).await.unwrap();

        service.initialize_demo_data(*data::NOW).await.unwrap();

        let demo = domain::DemoData::new(*data::NOW).unwrap();
        assert!(service.get_plans().await.unwrap().is_empty());
        assert_eq!(service.get_trainers().await.unwrap(), vec![demo.trainer.clone()]);
        assert_eq!(
            service
                .get_client_by_email(&demo.client.email)
                .await
                .unwrap(),
            Some(demo.client.clone())
        );
        assert_eq!(
            service
                .get_clients_by_trainer(&demo.trainer.id)
                .await
                .unwrap(),
            vec![demo.client]
        );
        for user in demo.users {
            assert_eq!(
                service.get_user_by_email(&user.email).await.unwrap(),
                Some(user)
            );
        }
        assert_eq!(
            service.get_client_by_email(&data::CLIENT.email).await.unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn test_clear_database() {
        let service = service();
        service.save_trainer(data::TRAINER.clone()).await.unwrap();
        service
            .save_workout_log(data::WORKOUT_LOG.clone())
            .await
            .unwrap();

        service.clear_database().await.unwrap();

        assert!(service.get_trainers().await.unwrap().is_empty());
        assert_eq!(
            service
                .get_workout_log(&data::WORKOUT_LOG.client_id)
                .await
                .unwrap(),
            None
        );
        assert!(service.repository().storage().keys().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unavailable_storage() {
        let service = domain::Service::new(KeyedRecordStore::new(MemoryStorage::disabled()));

        assert!(matches!(
            service.get_trainers().await,
            Err(domain::ReadError::Storage(
                domain::StorageError::Unavailable(_)
            ))
        ));
        assert!(matches!(
            service.save_plan(data::PLAN.clone()).await,
            Err(domain::UpdateError::Storage(
                domain::StorageError::Unavailable(_)
            ))
        ));
        assert!(matches!(
            service.clear_database().await,
            Err(domain::DeleteError::Storage(
                domain::StorageError::Unavailable(_)
            ))
        ));
    }

    #[tokio::test]
    async fn test_quota_exceeded() {
        let service = domain::Service::new(KeyedRecordStore::new(MemoryStorage::with_quota(256)));
        assert!(matches!(
            service.save_client(data::CLIENT.clone()).await,
            Err(domain::UpdateError::Storage(
                domain::StorageError::Unavailable(_)
            ))
        ));
    }
}
