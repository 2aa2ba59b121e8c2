use crate::{
    power::model::{PowerDetails, PowerHead, PowerSummary},
    Error,
};
use herodex_entity::power;
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, Set};

const MIN_DESCRIPTION_LEN: usize = 20;

/// A description must be present and at least 20 characters long. Returns the
/// validated text.
pub fn validate_description(description: Option<&str>) -> Result<&str, Error> {
    match description {
        Some(description) if description.chars().count() >= MIN_DESCRIPTION_LEN => Ok(description),
        _ => Err(Error::Validation(vec!["validation errors".to_string()])),
    }
}

#[derive(Default)]
pub struct PowerService {}

impl PowerService {
    pub fn new() -> Self {
        Self {}
    }

    pub async fn fetch_powers<C: ConnectionTrait>(
        &self,
        connection: &C,
    ) -> Result<Vec<PowerSummary>, Error> {
        let powers = power::Entity::find().all(connection).await?;

        Ok(PowerSummary::from_entities(&powers))
    }

    pub async fn fetch_power<C: ConnectionTrait>(
        &self,
        id: i32,
        connection: &C,
    ) -> Result<Option<PowerSummary>, Error> {
        Ok(power::Entity::find_by_id(id)
            .one(connection)
            .await?
            .as_ref()
            .map(PowerSummary::from_entity))
    }

    pub async fn create_power<C: ConnectionTrait>(
        &self,
        name: &str,
        description: &str,
        connection: &C,
    ) -> Result<PowerHead, Error> {
        let description = validate_description(Some(description))?;

        let power = power::ActiveModel {
            name: Set(name.to_string()),
            description: Set(description.to_string()),
            ..Default::default()
        }
        .insert(connection)
        .await?;

        Ok(PowerHead::from_entity(&power))
    }

    /// Update a power's description. Returns `None` when the power does not
    /// exist; the existence check comes before validation.
    pub async fn update_description<C: ConnectionTrait>(
        &self,
        id: i32,
        description: Option<&str>,
        connection: &C,
    ) -> Result<Option<PowerDetails>, Error> {
        let Some(power) = power::Entity::find_by_id(id).one(connection).await? else {
            return Ok(None);
        };

        let description = validate_description(description)?;

        let mut power: power::ActiveModel = power.into();
        power.description = Set(description.to_string());
        let power = power.update(connection).await?;

        Ok(Some(PowerDetails::from_entity(&power, connection).await?))
    }

    /// Delete a power; its grants go with it.
    pub async fn delete_power<C: ConnectionTrait>(
        &self,
        id: i32,
        connection: &C,
    ) -> Result<bool, Error> {
        let result = power::Entity::delete_by_id(id).exec(connection).await?;

        Ok(result.rows_affected > 0)
    }
}
