#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod client;
mod database;
mod email;
mod error;
mod exercise;
mod id;
mod name;
mod plan;
mod service;
mod tracker;
mod trainer;
mod user;
mod weekday;
mod workout_log;
mod workout_plan;

pub use client::*;
pub use database::*;
pub use email::*;
pub use error::*;
pub use exercise::*;
pub use id::*;
pub use name::*;
pub use plan::*;
pub use service::*;
pub use tracker::*;
pub use trainer::*;
pub use user::*;
pub use weekday::*;
pub use workout_log::*;
pub use workout_plan::*;
