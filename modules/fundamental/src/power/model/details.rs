use crate::{hero_power::model::HeroPowerHead, power::model::PowerHead, Error};
use herodex_entity::{hero_power, power};
use sea_orm::{ConnectionTrait, ModelTrait};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The full form of a power: scalar fields plus the grants referencing it.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct PowerDetails {
    #[serde(flatten)]
    pub head: PowerHead,

    /// Grants of this power, one row per hero wielding it.
    pub hero_powers: Vec<HeroPowerHead>,
}

impl PowerDetails {
    pub async fn from_entity<C: ConnectionTrait>(
        power: &power::Model,
        connection: &C,
    ) -> Result<Self, Error> {
        let hero_powers = power
            .find_related(hero_power::Entity)
            .all(connection)
            .await?;

        Ok(Self {
            head: PowerHead::from_entity(power),
            hero_powers: HeroPowerHead::from_entities(&hero_powers),
        })
    }
}
