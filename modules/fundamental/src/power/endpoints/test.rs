use crate::test::caller;
use actix_web::http::StatusCode;
use actix_web::test::TestRequest;
use herodex_entity::strength::Strength;
use herodex_test_context::{call::CallService, HerodexContext};
use serde_json::{json, Value};
use test_context::test_context;
use test_log::test;

#[test_context(HerodexContext)]
#[test(actix_web::test)]
async fn list_powers(ctx: &HerodexContext) -> Result<(), anyhow::Error> {
    let app = caller(ctx).await?;

    ctx.seed_power("flight", "soar above the clouds at supersonic speed")
        .await?;
    ctx.seed_power("telepathy", "read minds across great distances")
        .await?;

    let request = TestRequest::get().uri("/powers").to_request();
    let response: Value = app.call_and_read_body_json(request).await;

    let powers = response.as_array().expect("an array of powers");
    assert_eq!(powers.len(), 2);

    for power in powers {
        let mut keys: Vec<_> = power
            .as_object()
            .expect("an object per power")
            .keys()
            .cloned()
            .collect();
        keys.sort();
        assert_eq!(keys, ["description", "id", "name"]);
    }

    Ok(())
}

#[test_context(HerodexContext)]
#[test(actix_web::test)]
async fn get_power_reduced_form(ctx: &HerodexContext) -> Result<(), anyhow::Error> {
    let app = caller(ctx).await?;

    let hero = ctx.seed_hero("Clark Kent", "Superman").await?;
    let power = ctx
        .seed_power("flight", "soar above the clouds at supersonic speed")
        .await?;
    ctx.seed_hero_power(&hero, &power, Strength::Strong).await?;

    let uri = format!("/powers/{}", power.id);
    let request = TestRequest::get().uri(&uri).to_request();
    let response: Value = app.call_and_read_body_json(request).await;

    // reduced form even when grants exist
    assert_eq!(
        response,
        json!({
            "id": power.id,
            "name": "flight",
            "description": "soar above the clouds at supersonic speed",
        })
    );

    Ok(())
}

#[test_context(HerodexContext)]
#[test(actix_web::test)]
async fn power_not_found(ctx: &HerodexContext) -> Result<(), anyhow::Error> {
    let app = caller(ctx).await?;

    let request = TestRequest::get().uri("/powers/999999").to_request();
    let response = app.call_service(request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = actix_web::test::read_body_json(response).await;
    assert_eq!(body, json!({"error": "Power not found"}));

    Ok(())
}

#[test_context(HerodexContext)]
#[test(actix_web::test)]
async fn patch_power(ctx: &HerodexContext) -> Result<(), anyhow::Error> {
    let app = caller(ctx).await?;

    let power = ctx
        .seed_power("flight", "soar above the clouds at supersonic speed")
        .await?;

    let uri = format!("/powers/{}", power.id);
    let request = TestRequest::patch()
        .uri(&uri)
        .set_json(json!({"description": "glide on thermal currents for hours at a time"}))
        .to_request();
    let response = app.call_service(request).await;

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = actix_web::test::read_body_json(response).await;
    assert_eq!(
        body["description"],
        json!("glide on thermal currents for hours at a time")
    );
    // full form carries the grants
    assert!(body["hero_powers"].is_array());

    Ok(())
}

#[test_context(HerodexContext)]
#[test(actix_web::test)]
async fn patch_power_short_description(ctx: &HerodexContext) -> Result<(), anyhow::Error> {
    let app = caller(ctx).await?;

    let power = ctx
        .seed_power("flight", "soar above the clouds at supersonic speed")
        .await?;

    let uri = format!("/powers/{}", power.id);
    let request = TestRequest::patch()
        .uri(&uri)
        .set_json(json!({"description": "short"}))
        .to_request();
    let response = app.call_service(request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = actix_web::test::read_body_json(response).await;
    assert_eq!(body, json!({"errors": ["validation errors"]}));

    // stored value unchanged
    let request = TestRequest::get().uri(&uri).to_request();
    let stored: Value = app.call_and_read_body_json(request).await;
    assert_eq!(
        stored["description"],
        json!("soar above the clouds at supersonic speed")
    );

    Ok(())
}

#[test_context(HerodexContext)]
#[test(actix_web::test)]
async fn patch_power_missing_description(ctx: &HerodexContext) -> Result<(), anyhow::Error> {
    let app = caller(ctx).await?;

    let power = ctx
        .seed_power("flight", "soar above the clouds at supersonic speed")
        .await?;

    let uri = format!("/powers/{}", power.id);
    let request = TestRequest::patch()
        .uri(&uri)
        .set_json(json!({}))
        .to_request();
    let response = app.call_service(request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = actix_web::test::read_body_json(response).await;
    assert_eq!(body, json!({"errors": ["validation errors"]}));

    Ok(())
}

#[test_context(HerodexContext)]
#[test(actix_web::test)]
async fn patch_missing_power(ctx: &HerodexContext) -> Result<(), anyhow::Error> {
    let app = caller(ctx).await?;

    let request = TestRequest::patch()
        .uri("/powers/999999")
        .set_json(json!({"description": "a perfectly valid description"}))
        .to_request();
    let response = app.call_service(request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = actix_web::test::read_body_json(response).await;
    assert_eq!(body, json!({"error": "Power not found"}));

    Ok(())
}
