use chrono::{DateTime, Utc};
use log::{debug, error, warn};

use crate::{
    Client, ClientID, ClientRepository, ClientService, DatabaseRepository, DatabaseService,
    DeleteError, DemoData, Email, Plan, PlanRepository, PlanService, ReadError, Trainer,
    TrainerID, TrainerRepository, TrainerService, UpdateError, User, UserRepository,
    UserService, WorkoutLog, WorkoutLogRepository, WorkoutLogService,
};

/// Application services on top of a repository.
///
/// The repository is handed in by the caller, typically a record store created once at
/// startup.
pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::Unavailable(_)) => {
                    warn!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: UserRepository> UserService for Service<R> {
    async fn get_user_by_email(&self, email: &Email) -> Result<Option<User>, ReadError> {
        log_on_error!(
            self.repository.read_user_by_email(email),
            ReadError,
            "get",
            "user"
        )
    }

    async fn save_user(&self, user: User) -> Result<User, UpdateError> {
        log_on_error!(
            self.repository.write_user(user),
            UpdateError,
            "save",
            "user"
        )
    }
}

impl<R: ClientRepository> ClientService for Service<R> {
    async fn get_clients_by_trainer(
        &self,
        trainer_id: &TrainerID,
    ) -> Result<Vec<Client>, ReadError> {
        log_on_error!(
            self.repository.read_clients_by_trainer(trainer_id),
            ReadError,
            "get",
            "clients"
        )
    }

    async fn get_client_by_email(&self, email: &Email) -> Result<Option<Client>, ReadError> {
        log_on_error!(
            self.repository.read_client_by_email(email),
            ReadError,
            "get",
            "client"
        )
    }

    async fn save_client(&self, client: Client) -> Result<Client, UpdateError> {
        log_on_error!(
            self.repository.write_client(client),
            UpdateError,
            "save",
            "client"
        )
    }

    async fn update_client(&self, client: Client) -> Result<Client, UpdateError> {
        log_on_error!(
            self.repository.merge_client(client),
            UpdateError,
            "update",
            "client"
        )
    }
}

impl<R: TrainerRepository> TrainerService for Service<R> {
    async fn get_trainers(&self) -> Result<Vec<Trainer>, ReadError> {
        log_on_error!(
            self.repository.read_trainers(),
            ReadError,
            "get",
            "trainers"
        )
    }

    async fn get_trainer_by_email(&self, email: &Email) -> Result<Option<Trainer>, ReadError> {
        log_on_error!(
            self.repository.read_trainer_by_email(email),
            ReadError,
            "get",
            "trainer"
        )
    }

    async fn save_trainer(&self, trainer: Trainer) -> Result<Trainer, UpdateError> {
        log_on_error!(
            self.repository.write_trainer(trainer),
            UpdateError,
            "save",
            "trainer"
        )
    }
}

impl<R: PlanRepository> PlanService for Service<R> {
    async fn get_plans(&self) -> Result<Vec<Plan>, ReadError> {
        log_on_error!(self.repository.read_plans(), ReadError, "get", "plans")
    }

    async fn get_plans_by_trainer(&self, trainer_id: &TrainerID) -> Result<Vec<Plan>, ReadError> {
        log_on_error!(
            self.repository.read_plans_by_trainer(trainer_id),
            ReadError,
            "get",
            "trainer plans"
        )
    }

    async fn save_plan(&self, plan: Plan) -> Result<Plan, UpdateError> {
        log_on_error!(
            self.repository.write_plan(plan),
            UpdateError,
            "save",
            "plan"
        )
    }
}

impl<R: WorkoutLogRepository> WorkoutLogService for Service<R> {
    async fn get_workout_log(&self, client_id: &ClientID) -> Result<Option<WorkoutLog>, ReadError> {
        log_on_error!(
            self.repository.read_workout_log(client_id),
            ReadError,
            "get",
            "workout log"
        )
    }

    async fn save_workout_log(&self, workout_log: WorkoutLog) -> Result<WorkoutLog, UpdateError> {
        log_on_error!(
            self.repository.write_workout_log(workout_log),
            UpdateError,
            "save",
            "workout log"
        )
    }
}

impl<R> DatabaseService for Service<R>
where
    R: DatabaseRepository + UserRepository + TrainerRepository + ClientRepository,
{
    async fn clear_database(&self) -> Result<(), DeleteError> {
        log_on_error!(
            self.repository.clear_all(),
            DeleteError,
            "clear",
            "database"
        )
    }

    async fn initialize_demo_data(&self, now: DateTime<Utc>) -> Result<(), UpdateError> {
        let demo = DemoData::new(now)?;

        self.clear_database().await?;
        for user in demo.users {
            self.save_user(user).await?;
        }
        self.save_trainer(demo.trainer).await?;
        self.save_client(demo.client).await?;

        debug!("initialized demo data");
        Ok(())
    }
}
