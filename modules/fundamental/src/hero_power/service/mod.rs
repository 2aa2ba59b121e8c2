use crate::{
    hero_power::model::{CreateHeroPower, HeroPowerDetails},
    Error,
};
use herodex_entity::{hero_power, strength::Strength};
use sea_orm::{ActiveModelTrait, ConnectionTrait, Set};
use std::str::FromStr;

/// Strength must be exactly one of `Strong`, `Weak`, or `Average`.
pub fn validate_strength(strength: &str) -> Result<Strength, Error> {
    Strength::from_str(strength).map_err(Error::Strength)
}

#[derive(Default)]
pub struct HeroPowerService {}

impl HeroPowerService {
    pub fn new() -> Self {
        Self {}
    }

    /// Create a grant. Referential integrity of `hero_id` and `power_id` is
    /// left to the store's foreign keys.
    pub async fn create_hero_power<C: ConnectionTrait>(
        &self,
        create: CreateHeroPower,
        connection: &C,
    ) -> Result<HeroPowerDetails, Error> {
        let strength = validate_strength(&create.strength)?;

        let hero_power = hero_power::ActiveModel {
            strength: Set(strength),
            hero_id: Set(create.hero_id),
            power_id: Set(create.power_id),
            ..Default::default()
        }
        .insert(connection)
        .await?;

        HeroPowerDetails::from_entity(&hero_power, connection).await
    }
}

#[cfg(test)]
mod test;
