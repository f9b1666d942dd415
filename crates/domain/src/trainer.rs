use crate::{Email, Name, ReadError, TrainerID, UpdateError};

#[allow(async_fn_in_trait)]
pub trait TrainerService {
    async fn get_trainers(&self) -> Result<Vec<Trainer>, ReadError>;
    async fn get_trainer_by_email(&self, email: &Email) -> Result<Option<Trainer>, ReadError>;
    async fn save_trainer(&self, trainer: Trainer) -> Result<Trainer, UpdateError>;

    /// Trainers whose name or specialty contains the query, ignoring case. An empty query
    /// matches every trainer.
    async fn search_trainers(&self, query: &str) -> Result<Vec<Trainer>, ReadError> {
        Ok(self
            .get_trainers()
            .await?
            .into_iter()
            .filter(|t| t.matches(query))
            .collect())
    }
}

#[allow(async_fn_in_trait)]
pub trait TrainerRepository {
    async fn read_trainers(&self) -> Result<Vec<Trainer>, ReadError>;
    async fn read_trainer_by_email(&self, email: &Email) -> Result<Option<Trainer>, ReadError>;
    async fn write_trainer(&self, trainer: Trainer) -> Result<Trainer, UpdateError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Trainer {
    pub id: TrainerID,
    pub username: String,
    pub name: Name,
    pub email: Email,
    pub specialty: String,
    pub rating: f32,
    pub clients: u32,
    pub photo_url: Option<String>,
    pub bio: Option<String>,
    pub certifications: Vec<String>,
}

impl Trainer {
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty()
            || self.name.to_string().to_lowercase().contains(&query)
            || self.specialty.to_lowercase().contains(&query)
    }
}
