use chrono::{DateTime, NaiveDate, Utc};
use log::debug;
use strum::{AsRefStr, Display, EnumString};

use crate::{
    ClientID, Email, Name, PlanID, ReadError, TrainerID, UpdateError, WorkoutPlan,
};

#[allow(async_fn_in_trait)]
pub trait ClientService {
    async fn get_clients_by_trainer(&self, trainer_id: &TrainerID)
    -> Result<Vec<Client>, ReadError>;
    /// Finds the client by its profile email.
    async fn get_client_by_email(&self, email: &Email) -> Result<Option<Client>, ReadError>;
    async fn save_client(&self, client: Client) -> Result<Client, UpdateError>;
    /// Stores the client under the id of an existing client with the same profile email,
    /// or under its own id if there is none.
    async fn update_client(&self, client: Client) -> Result<Client, UpdateError>;

    async fn modify_client(
        &self,
        email: &Email,
        now: DateTime<Utc>,
        modify: impl FnOnce(&mut Client),
    ) -> Result<Client, UpdateError> {
        let mut client = self
            .get_client_by_email(email)
            .await?
            .ok_or(UpdateError::NotFound)?;
        modify(&mut client);
        client.updated_at = now;
        self.update_client(client).await
    }

    /// Sends a request to a trainer for the given plan.
    async fn request_trainer(
        &self,
        email: &Email,
        trainer_id: TrainerID,
        plan_id: PlanID,
        now: DateTime<Utc>,
    ) -> Result<Client, UpdateError> {
        debug!("client {email} requests trainer {trainer_id}");
        self.modify_client(email, now, |client| {
            client.trainer = TrainerLink {
                id: Some(trainer_id),
                status: Some(RequestStatus::Pending),
                plan_id: Some(plan_id),
            };
            client.status = ClientStatus::New;
        })
        .await
    }

    async fn respond_to_request(
        &self,
        email: &Email,
        accept: bool,
        now: DateTime<Utc>,
    ) -> Result<Client, UpdateError> {
        self.modify_client(email, now, |client| {
            if accept {
                client.trainer.status = Some(RequestStatus::Accepted);
                client.status = ClientStatus::Active;
            } else {
                client.trainer.status = Some(RequestStatus::Rejected);
                client.trainer.plan_id = None;
            }
        })
        .await
    }

    async fn update_client_status(
        &self,
        email: &Email,
        status: ClientStatus,
        now: DateTime<Utc>,
    ) -> Result<Client, UpdateError> {
        self.modify_client(email, now, |client| client.status = status)
            .await
    }

    async fn add_progress_record(
        &self,
        email: &Email,
        record: ProgressRecord,
        now: DateTime<Utc>,
    ) -> Result<Client, UpdateError> {
        self.modify_client(email, now, |client| client.add_progress_record(record))
            .await
    }

    async fn set_workout_plan(
        &self,
        email: &Email,
        workout_plan: WorkoutPlan,
        now: DateTime<Utc>,
    ) -> Result<Client, UpdateError> {
        self.modify_client(email, now, |client| {
            client.workout_plan = Some(workout_plan);
        })
        .await
    }
}

#[allow(async_fn_in_trait)]
pub trait ClientRepository {
    async fn read_clients_by_trainer(
        &self,
        trainer_id: &TrainerID,
    ) -> Result<Vec<Client>, ReadError>;
    async fn read_client_by_email(&self, email: &Email) -> Result<Option<Client>, ReadError>;
    async fn write_client(&self, client: Client) -> Result<Client, UpdateError>;
    async fn merge_client(&self, client: Client) -> Result<Client, UpdateError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    pub id: ClientID,
    pub email: Email,
    pub profile: Profile,
    pub objectives: Vec<String>,
    pub status: ClientStatus,
    pub trainer: TrainerLink,
    pub progress: Vec<ProgressRecord>,
    pub workout_plan: Option<WorkoutPlan>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Client {
    #[must_use]
    pub fn new(name: Name, email: Email, now: DateTime<Utc>) -> Self {
        Self {
            id: ClientID::random(),
            profile: Profile {
                name,
                email: email.clone(),
                weight: 0.0,
                height: 0.0,
                photo_url: None,
            },
            email,
            objectives: vec![],
            status: ClientStatus::New,
            trainer: TrainerLink::default(),
            progress: vec![],
            workout_plan: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Inserts the record in date order. The latest weight is copied to the profile.
    pub fn add_progress_record(&mut self, record: ProgressRecord) {
        let position = self.progress.partition_point(|r| r.date <= record.date);
        self.progress.insert(position, record);
        if let Some(latest) = self.progress.last() {
            self.profile.weight = latest.weight;
        }
    }

    #[must_use]
    pub fn is_trained_by(&self, trainer_id: &TrainerID) -> bool {
        self.trainer.id.as_ref() == Some(trainer_id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub name: Name,
    pub email: Email,
    pub weight: f32,
    pub height: f32,
    pub photo_url: Option<String>,
}

#[derive(AsRefStr, Display, EnumString, Debug, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum ClientStatus {
    New,
    Active,
    Inactive,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct TrainerLink {
    pub id: Option<TrainerID>,
    pub status: Option<RequestStatus>,
    pub plan_id: Option<PlanID>,
}

#[derive(AsRefStr, Display, EnumString, Debug, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Accepted,
    Rejected,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressRecord {
    pub date: NaiveDate,
    pub weight: f32,
    pub measurements: Option<Measurements>,
    pub notes: Option<String>,
}

/// Body circumferences in centimeters.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Measurements {
    pub chest: Option<f32>,
    pub waist: Option<f32>,
    pub arms: Option<f32>,
    pub legs: Option<f32>,
}
