
use crate::hero_power::{
    model::{CreateHeroPower, HeroPowerDetails},
    service::HeroPowerService,
};
use actix_web::{post, web, HttpResponse, Responder};
use herodex_common::db::Database;

pub fn configure(config: &mut web::ServiceConfig) {
    config
        .app_data(web::Data::new(HeroPowerService::new()))
        .service(create);
}

#[utoipa::path(
    tag = "hero_power",
    operation_id = "createHeroPower",
    request_body = CreateHeroPower,
    responses(
        (status = 200, description = "Created grant, full form", body = HeroPowerDetails),
        (status = 500, description = "Strength outside the allowed set, or a broken reference"),
    ),
)]
#[post("/hero_powers")]
/// Grant a power to a hero
pub async fn create(
    service: web::Data<HeroPowerService>,
    db: web::Data<Database>,
    web::Json(create): web::Json<CreateHeroPower>,
) -> actix_web::Result<impl Responder> {
    Ok(HttpResponse::Ok().json(service.create_hero_power(create, db.get_ref()).await?))
}
