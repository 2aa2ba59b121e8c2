use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Herodex",
        description = "A small registry of heroes, powers, and who wields what"
    ),
    paths(
        crate::endpoints::index,
        crate::hero::endpoints::all,
        crate::hero::endpoints::get,
        crate::power::endpoints::all,
        crate::power::endpoints::get,
        crate::power::endpoints::update,
        crate::hero_power::endpoints::create,
    ),
    tags()
)]
pub struct ApiDoc;

pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
