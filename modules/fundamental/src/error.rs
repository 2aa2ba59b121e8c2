use actix_web::body::BoxBody;
use actix_web::{HttpResponse, ResponseError};
use herodex_common::error::{ErrorInformation, ValidationErrors};
use sea_orm::DbErr;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0} not found")]
    NotFound(String),
    #[error("validation errors")]
    Validation(Vec<String>),
    // A bad strength value surfaces as a server fault, not a structured 400.
    #[error("strength should be Strong, Weak, or Average")]
    Strength(#[source] strum::ParseError),
    #[error(transparent)]
    Database(anyhow::Error),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

impl From<DbErr> for Error {
    fn from(value: DbErr) -> Self {
        Self::Database(value.into())
    }
}

impl ResponseError for Error {
    fn error_response(&self) -> HttpResponse<BoxBody> {
        match self {
            Self::NotFound(_) => HttpResponse::NotFound().json(ErrorInformation::new(self)),
            Self::Validation(errors) => {
                HttpResponse::BadRequest().json(ValidationErrors::new(errors))
            }
            Self::Strength(err) => {
                HttpResponse::InternalServerError().json(ErrorInformation::new(err))
            }
            Self::Database(err) => {
                HttpResponse::InternalServerError().json(ErrorInformation::new(err))
            }
            Self::Any(err) => {
                HttpResponse::InternalServerError().json(ErrorInformation::new(err))
            }
        }
    }
}
