use chrono::{DateTime, Utc};

use crate::{
    Client, ClientID, ClientStatus, DeleteError, Email, Name, Profile, Trainer, TrainerID,
    TrainerLink, UpdateError, User, UserID, UserKind,
};

#[allow(async_fn_in_trait)]
pub trait DatabaseService {
    async fn clear_database(&self) -> Result<(), DeleteError>;
    /// Replaces all stored data by a demo trainer and a demo client.
    async fn initialize_demo_data(&self, now: DateTime<Utc>) -> Result<(), UpdateError>;
}

#[allow(async_fn_in_trait)]
pub trait DatabaseRepository {
    async fn clear_all(&self) -> Result<(), DeleteError>;
}

pub const DEMO_TRAINER_EMAIL: &str = "trainer@demo.com";
pub const DEMO_CLIENT_EMAIL: &str = "client@demo.com";

#[derive(Debug, Clone, PartialEq)]
pub struct DemoData {
    pub users: Vec<User>,
    pub trainer: Trainer,
    pub client: Client,
}

impl DemoData {
    pub fn new(now: DateTime<Utc>) -> Result<Self, Box<dyn std::error::Error>> {
        let trainer_email = Email::new(DEMO_TRAINER_EMAIL)?;
        let client_email = Email::new(DEMO_CLIENT_EMAIL)?;
        let trainer_id = TrainerID::from("trainer-demo");

        Ok(Self {
            users: vec![
                User {
                    id: UserID::from("trainer-demo"),
                    email: trainer_email.clone(),
                    kind: UserKind::Trainer,
                    created_at: now,
                },
                User {
                    id: UserID::from("client-demo"),
                    email: client_email.clone(),
                    kind: UserKind::Client,
                    created_at: now,
                },
            ],
            trainer: Trainer {
                id: trainer_id.clone(),
                username: DEMO_TRAINER_EMAIL.to_string(),
                name: Name::new("Trainer Demo")?,
                email: trainer_email,
                specialty: "Entrenamiento Funcional".to_string(),
                rating: 4.8,
                clients: 5,
                photo_url: None,
                bio: Some("Entrenador profesional con más de 5 años de experiencia".to_string()),
                certifications: vec![
                    "Certificación en Entrenamiento Funcional".to_string(),
                    "Nutrición Deportiva".to_string(),
                ],
            },
            client: Client {
                id: ClientID::from("client-demo"),
                email: client_email.clone(),
                profile: Profile {
                    name: Name::new("Cliente Demo")?,
                    email: client_email,
                    weight: 75.0,
                    height: 175.0,
                    photo_url: None,
                },
                objectives: vec!["Pérdida de peso".to_string(), "Tonificación".to_string()],
                status: ClientStatus::Active,
                trainer: TrainerLink {
                    id: Some(trainer_id),
                    status: None,
                    plan_id: None,
                },
                progress: vec![],
                workout_plan: None,
                created_at: now,
                updated_at: now,
            },
        })
    }
}
