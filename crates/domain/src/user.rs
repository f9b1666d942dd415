use chrono::{DateTime, Utc};
use strum::{AsRefStr, Display, EnumString};

use crate::{Email, ReadError, UpdateError, UserID};

#[allow(async_fn_in_trait)]
pub trait UserService {
    async fn get_user_by_email(&self, email: &Email) -> Result<Option<User>, ReadError>;
    async fn save_user(&self, user: User) -> Result<User, UpdateError>;
}

#[allow(async_fn_in_trait)]
pub trait UserRepository {
    async fn read_user_by_email(&self, email: &Email) -> Result<Option<User>, ReadError>;
    async fn write_user(&self, user: User) -> Result<User, UpdateError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserID,
    pub email: Email,
    pub kind: UserKind,
    pub created_at: DateTime<Utc>,
}

#[derive(AsRefStr, Display, EnumString, Debug, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum UserKind {
    Client,
    Trainer,
}
