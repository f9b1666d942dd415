use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use fitterone_domain as domain;

pub static NOW: LazyLock<DateTime<Utc>> =
    LazyLock::new(|| Utc.with_ymd_and_hms(2024, 3, 4, 18, 30, 0).unwrap());

pub static TRAINER_USER: LazyLock<domain::User> = LazyLock::new(|| domain::User {
    id: "trainer-1".into(),
    email: domain::Email::new("ana@fitterone.com").unwrap(),
    kind: domain::UserKind::Trainer,
    created_at: *NOW,
});

pub static TRAINER: LazyLock<domain::Trainer> = LazyLock::new(|| domain::Trainer {
    id: "trainer-1".into(),
    username: "ana".to_string(),
    name: domain::Name::new("Ana Torres").unwrap(),
    email: domain::Email::new("ana@fitterone.com").unwrap(),
    specialty: "Yoga".to_string(),
    rating: 4.5,
    clients: 2,
    photo_url: Some("https://fitterone.com/ana.png".to_string()),
    bio: None,
    certifications: vec!["RYT 200".to_string()],
});

pub static TRAINER_2: LazyLock<domain::Trainer> = LazyLock::new(|| domain::Trainer {
    id: "trainer-2".into(),
    username: "bruno".to_string(),
    name: domain::Name::new("Bruno Díaz").unwrap(),
    email: domain::Email::new("bruno@fitterone.com").unwrap(),
    specialty: "Powerlifting".to_string(),
    rating: 4.9,
    clients: 12,
    photo_url: None,
    bio: Some("Competitive lifter".to_string()),
    certifications: vec![],
});

pub static PLAN: LazyLock<domain::Plan> = LazyLock::new(|| domain::Plan {
    id: "plan-1".into(),
    trainer_id: "trainer-1".into(),
    name: domain::Name::new("Flexibility").unwrap(),
    description: "Two sessions per week".to_string(),
    duration_months: 3,
    price: 49.5,
    features: vec!["Video calls".to_string(), "Weekly check-in".to_string()],
});

pub static PLAN_2: LazyLock<domain::Plan> = LazyLock::new(|| domain::Plan {
    id: "plan-2".into(),
    trainer_id: "trainer-2".into(),
    name: domain::Name::new("Strength").unwrap(),
    description: String::new(),
    duration_months: 6,
    price: 80.0,
    features: vec![],
});

pub static EXERCISE: LazyLock<domain::Exercise> = LazyLock::new(|| {
    domain::Exercise::new(
        domain::Name::new("Goblet Squat").unwrap(),
        domain::Series::new(3).unwrap(),
        "8-10",
        "90",
    )
    .with_load(domain::Load::new(24.0).unwrap())
});

pub static CLIENT: LazyLock<domain::Client> = LazyLock::new(|| {
    let email = domain::Email::new("carla@mail.com").unwrap();
    let mut workout_plan = domain::WorkoutPlan::new("Plan de Carla", *NOW);
    workout_plan.weeks[0].routines[0]
        .exercises
        .push(EXERCISE.clone());
    domain::Client {
        id: "client-1".into(),
        email: email.clone(),
        profile: domain::Profile {
            name: domain::Name::new("Carla Ruiz").unwrap(),
            email,
            weight: 64.0,
            height: 168.0,
            photo_url: None,
        },
        objectives: vec!["Flexibilidad".to_string()],
        status: domain::ClientStatus::Active,
        trainer: domain::TrainerLink {
            id: Some("trainer-1".into()),
            status: Some(domain::RequestStatus::Accepted),
            plan_id: Some("plan-1".into()),
        },
        progress: vec![domain::ProgressRecord {
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            weight: 64.0,
            measurements: Some(domain::Measurements {
                chest: Some(90.0),
                waist: Some(70.0),
                arms: None,
                legs: None,
            }),
            notes: Some("Good week".to_string()),
        }],
        workout_plan: Some(workout_plan),
        created_at: *NOW,
        updated_at: *NOW,
    }
});

pub static CLIENT_2: LazyLock<domain::Client> = LazyLock::new(|| {
    domain::Client::new(
        domain::Name::new("Diego Paz").unwrap(),
        domain::Email::new("diego@mail.com").unwrap(),
        *NOW,
    )
});

pub static WORKOUT_LOG: LazyLock<domain::WorkoutLog> = LazyLock::new(|| {
    let mut tracker = domain::WeeklyWorkoutTracker::new();
    tracker.add_exercise(EXERCISE.clone());
    tracker.commit_selected_day_at(*NOW);
    tracker.set_selected_day(domain::Weekday::Thursday);
    tracker.to_log("client-1".into())
});
