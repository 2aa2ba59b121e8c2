use crate::{
    hero::model::HeroHead, hero_power::model::HeroPowerHead, power::model::PowerHead, Error,
};
use anyhow::anyhow;
use herodex_entity::{hero, hero_power, power};
use sea_orm::{ConnectionTrait, ModelTrait};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The full form of a grant: scalar fields plus both related rows in their
/// reduced forms.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct HeroPowerDetails {
    #[serde(flatten)]
    pub head: HeroPowerHead,

    /// The hero holding the power.
    pub hero: HeroHead,

    /// The power being held.
    pub power: PowerHead,
}

impl HeroPowerDetails {
    pub async fn from_entity<C: ConnectionTrait>(
        hero_power: &hero_power::Model,
        connection: &C,
    ) -> Result<Self, Error> {
        let hero = hero_power
            .find_related(hero::Entity)
            .one(connection)
            .await?
            .ok_or_else(|| anyhow!("hero {} missing for grant {}", hero_power.hero_id, hero_power.id))?;

        let power = hero_power
            .find_related(power::Entity)
            .one(connection)
            .await?
            .ok_or_else(|| {
                anyhow!(
                    "power {} missing for grant {}",
                    hero_power.power_id,
                    hero_power.id
                )
            })?;

        Ok(Self {
            head: HeroPowerHead::from_entity(hero_power),
            hero: HeroHead::from_entity(&hero),
            power: PowerHead::from_entity(&power),
        })
    }
}
