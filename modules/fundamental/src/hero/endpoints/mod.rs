
use crate::{
    hero::{
        model::{HeroDetails, HeroSummary},
        service::HeroService,
    },
    Error,
};
use actix_web::{get, web, HttpResponse, Responder};
use herodex_common::db::Database;

pub fn configure(config: &mut web::ServiceConfig) {
    config
        .app_data(web::Data::new(HeroService::new()))
        .service(all)
        .service(get);
}

#[utoipa::path(
    tag = "hero",
    operation_id = "listHeroes",
    responses(
        (status = 200, description = "All heroes, reduced form", body = [HeroSummary]),
    ),
)]
#[get("/heroes")]
/// List heroes
pub async fn all(
    service: web::Data<HeroService>,
    db: web::Data<Database>,
) -> actix_web::Result<impl Responder> {
    Ok(HttpResponse::Ok().json(service.fetch_heroes(db.get_ref()).await?))
}

#[utoipa::path(
    tag = "hero",
    operation_id = "getHero",
    params(
        ("id", Path, description = "ID of the hero")
    ),
    responses(
        (status = 200, description = "Matching hero, full form", body = HeroDetails),
        (status = 404, description = "Matching hero not found"),
    ),
)]
#[get("/heroes/{id}")]
/// Retrieve hero details
pub async fn get(
    service: web::Data<HeroService>,
    db: web::Data<Database>,
    id: web::Path<i32>,
) -> actix_web::Result<impl Responder> {
    let hero = service
        .fetch_hero(*id, db.get_ref())
        .await?
        .ok_or_else(|| Error::NotFound("Hero".to_string()))?;

    Ok(HttpResponse::Ok().json(hero))
}
