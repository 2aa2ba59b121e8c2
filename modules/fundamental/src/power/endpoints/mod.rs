#[cfg(test)]
mod test;

use crate::{
    power::{
        model::{PowerDetails, PowerSummary, UpdatePower},
        service::PowerService,
    },
    Error,
};
use actix_web::{get, patch, web, HttpResponse, Responder};
use herodex_common::db::Database;

pub fn configure(config: &mut web::ServiceConfig) {
    config
        .app_data(web::Data::new(PowerService::new()))
        .service(all)
        .service(get)
        .service(update);
}

#[utoipa::path(
    tag = "power",
    operation_id = "listPowers",
    responses(
        (status = 200, description = "All powers, reduced form", body = [PowerSummary]),
    ),
)]
#[get("/powers")]
/// List powers
pub async fn all(
    service: web::Data<PowerService>,
    db: web::Data<Database>,
) -> actix_web::Result<impl Responder> {
    Ok(HttpResponse::Ok().json(service.fetch_powers(db.get_ref()).await?))
}

#[utoipa::path(
    tag = "power",
    operation_id = "getPower",
    params(
        ("id", Path, description = "ID of the power")
    ),
    responses(
        (status = 200, description = "Matching power, reduced form", body = PowerSummary),
        (status = 404, description = "Matching power not found"),
    ),
)]
#[get("/powers/{id}")]
/// Retrieve a power
pub async fn get(
    service: web::Data<PowerService>,
    db: web::Data<Database>,
    id: web::Path<i32>,
) -> actix_web::Result<impl Responder> {
    let power = service
        .fetch_power(*id, db.get_ref())
        .await?
        .ok_or_else(|| Error::NotFound("Power".to_string()))?;

    Ok(HttpResponse::Ok().json(power))
}

#[utoipa::path(
    tag = "power",
    operation_id = "updatePower",
    request_body = UpdatePower,
    params(
        ("id", Path, description = "ID of the power")
    ),
    responses(
        (status = 200, description = "Updated power, full form", body = PowerDetails),
        (status = 400, description = "Description missing or shorter than 20 characters"),
        (status = 404, description = "Matching power not found"),
    ),
)]
#[patch("/powers/{id}")]
/// Update a power's description
pub async fn update(
    service: web::Data<PowerService>,
    db: web::Data<Database>,
    id: web::Path<i32>,
    web::Json(update): web::Json<UpdatePower>,
) -> actix_web::Result<impl Responder> {
    let power = service
        .update_description(*id, update.description.as_deref(), db.get_ref())
        .await?
        .ok_or_else(|| Error::NotFound("Power".to_string()))?;

    Ok(HttpResponse::Ok().json(power))
}
