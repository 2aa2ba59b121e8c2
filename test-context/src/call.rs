use actix_http::Request;
use actix_web::{
    dev::{Service, ServiceResponse},
    web, App, Error,
};
use bytes::Bytes;
use serde::de::DeserializeOwned;
use std::future::Future;

/// Drive an in-process application from a test, without naming its opaque
/// service type.
pub trait CallService {
    fn call_service(&self, r: Request) -> impl Future<Output = ServiceResponse>;

    fn call_and_read_body(&self, r: Request) -> impl Future<Output = Bytes> {
        async move {
            let response = self.call_service(r).await;
            actix_web::test::read_body(response).await
        }
    }

    fn call_and_read_body_json<T: DeserializeOwned>(&self, r: Request) -> impl Future<Output = T> {
        async move {
            let response = self.call_service(r).await;
            actix_web::test::read_body_json(response).await
        }
    }
}

impl<S> CallService for S
where
    S: Service<Request, Response = ServiceResponse, Error = Error>,
{
    async fn call_service(&self, r: Request) -> ServiceResponse {
        actix_web::test::call_service(self, r).await
    }
}

/// Build an in-process application from an endpoint configuration.
pub async fn caller<F>(configure: F) -> anyhow::Result<impl CallService>
where
    F: FnOnce(&mut web::ServiceConfig),
{
    Ok(actix_web::test::init_service(App::new().configure(configure)).await)
}
