use actix_web::{get, web, HttpResponse, Responder};
use herodex_common::db::Database;

pub fn configure(svc: &mut web::ServiceConfig, db: Database) {
    svc.app_data(web::Data::new(db));

    svc.service(index);

    crate::hero::endpoints::configure(svc);
    crate::power::endpoints::configure(svc);
    crate::hero_power::endpoints::configure(svc);
}

#[utoipa::path(
    tag = "index",
    operation_id = "index",
    responses(
        (status = 200, description = "Greeting page"),
    ),
)]
#[get("/")]
/// Greeting page
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html")
        .body("<h1>the super heroes</h1>")
}

#[cfg(test)]
mod test {
    use crate::test::caller;
    use actix_web::test::TestRequest;
    use herodex_test_context::{call::CallService, HerodexContext};
    use test_context::test_context;
    use test_log::test;

    #[test_context(HerodexContext)]
    #[test(actix_web::test)]
    async fn greeting(ctx: &HerodexContext) -> Result<(), anyhow::Error> {
        let app = caller(ctx).await?;

        let request = TestRequest::get().uri("/").to_request();
        let body = app.call_and_read_body(request).await;

        assert_eq!(body, "<h1>the super heroes</h1>");

        Ok(())
    }
}
