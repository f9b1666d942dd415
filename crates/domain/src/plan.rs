use crate::{Name, PlanID, ReadError, TrainerID, UpdateError, ValidationError};

#[allow(async_fn_in_trait)]
pub trait PlanService {
    async fn get_plans(&self) -> Result<Vec<Plan>, ReadError>;
    async fn get_plans_by_trainer(&self, trainer_id: &TrainerID) -> Result<Vec<Plan>, ReadError>;
    async fn save_plan(&self, plan: Plan) -> Result<Plan, UpdateError>;

    fn validate_plan_name(&self, name: &str) -> Result<Name, ValidationError> {
        Name::new(name).map_err(|err| ValidationError::Other(err.into()))
    }

    fn validate_plan_duration(&self, duration: &str) -> Result<u32, ValidationError> {
        match duration.trim().parse::<u32>() {
            Ok(parsed_duration) if parsed_duration > 0 => Ok(parsed_duration),
            _ => Err(ValidationError::Other(
                "Duration must be a positive number of months".into(),
            )),
        }
    }

    fn validate_plan_price(&self, price: &str) -> Result<f32, ValidationError> {
        match price.replace(',', ".").trim().parse::<f32>() {
            Ok(parsed_price) => {
                if parsed_price >= 0.0 && parsed_price.is_finite() {
                    Ok(parsed_price)
                } else {
                    Err(ValidationError::Other(
                        "Price must not be negative".into(),
                    ))
                }
            }
            Err(_) => Err(ValidationError::Other("Price must be a decimal number".into())),
        }
    }
}

#[allow(async_fn_in_trait)]
pub trait PlanRepository {
    async fn read_plans(&self) -> Result<Vec<Plan>, ReadError>;
    async fn read_plans_by_trainer(&self, trainer_id: &TrainerID)
    -> Result<Vec<Plan>, ReadError>;
    async fn write_plan(&self, plan: Plan) -> Result<Plan, UpdateError>;
}

/// Subscription plan offered by a trainer.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub id: PlanID,
    pub trainer_id: TrainerID,
    pub name: Name,
    pub description: String,
    pub duration_months: u32,
    pub price: f32,
    pub features: Vec<String>,
}

impl Plan {
    #[must_use]
    pub fn new(trainer_id: TrainerID, name: Name) -> Self {
        Self {
            id: PlanID::random(),
            trainer_id,
            name,
            description: String::new(),
            duration_months: 1,
            price: 0.0,
            features: vec![],
        }
    }

    /// Adds a feature unless it is blank. Returns whether the feature was added.
    pub fn add_feature(&mut self, feature: &str) -> bool {
        let feature = feature.trim();
        if feature.is_empty() {
            return false;
        }
        self.features.push(feature.to_string());
        true
    }

    pub fn remove_feature(&mut self, index: usize) -> Option<String> {
        (index < self.features.len()).then(|| self.features.remove(index))
    }
}
