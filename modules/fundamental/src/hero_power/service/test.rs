use crate::hero_power::model::CreateHeroPower;
use crate::hero_power::service::{validate_strength, HeroPowerService};
use crate::Error;
use herodex_entity::strength::Strength;
use herodex_test_context::HerodexContext;
use test_context::test_context;
use test_log::test;

#[test]
fn strength_values() {
    assert_eq!(validate_strength("Strong").unwrap(), Strength::Strong);
    assert_eq!(validate_strength("Weak").unwrap(), Strength::Weak);
    assert_eq!(validate_strength("Average").unwrap(), Strength::Average);

    // case-sensitive, closed set
    assert!(matches!(validate_strength("strong"), Err(Error::Strength(_))));
    assert!(matches!(validate_strength("Mighty"), Err(Error::Strength(_))));
    assert!(matches!(validate_strength(""), Err(Error::Strength(_))));
}

#[test_context(HerodexContext)]
#[test(tokio::test)]
async fn create_grant(ctx: &HerodexContext) -> Result<(), anyhow::Error> {
    let hero = ctx.seed_hero("Ororo Munroe", "Storm").await?;
    let power = ctx
        .seed_power("weather control", "command wind, rain, and lightning at will")
        .await?;

    let service = HeroPowerService::new();
    let created = service
        .create_hero_power(
            CreateHeroPower {
                strength: "Strong".to_string(),
                hero_id: hero.id,
                power_id: power.id,
            },
            &ctx.db,
        )
        .await?;

    assert_eq!(created.head.strength, Strength::Strong);
    assert_eq!(created.head.hero_id, hero.id);
    assert_eq!(created.head.power_id, power.id);
    assert_eq!(created.hero.super_name, "Storm");
    assert_eq!(created.power.name, "weather control");

    Ok(())
}

#[test_context(HerodexContext)]
#[test(tokio::test)]
async fn invalid_strength_is_rejected(ctx: &HerodexContext) -> Result<(), anyhow::Error> {
    let hero = ctx.seed_hero("Ororo Munroe", "Storm").await?;
    let power = ctx
        .seed_power("weather control", "command wind, rain, and lightning at will")
        .await?;

    let service = HeroPowerService::new();
    let result = service
        .create_hero_power(
            CreateHeroPower {
                strength: "Mighty".to_string(),
                hero_id: hero.id,
                power_id: power.id,
            },
            &ctx.db,
        )
        .await;

    assert!(matches!(result, Err(Error::Strength(_))));

    Ok(())
}

#[test_context(HerodexContext)]
#[test(tokio::test)]
async fn broken_reference_is_rejected(ctx: &HerodexContext) -> Result<(), anyhow::Error> {
    let service = HeroPowerService::new();

    // the store enforces the foreign keys
    let result = service
        .create_hero_power(
            CreateHeroPower {
                strength: "Weak".to_string(),
                hero_id: 999999,
                power_id: 999999,
            },
            &ctx.db,
        )
        .await;

    assert!(matches!(result, Err(Error::Database(_))));

    Ok(())
}
