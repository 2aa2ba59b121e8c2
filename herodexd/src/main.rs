use actix_web::{get, middleware::Logger, App, HttpResponse, HttpServer, Responder};
use clap::Parser;
use herodex_common::{config, db::Database};
use std::process::ExitCode;

#[derive(clap::Parser, Debug)]
#[command(
    author,
    version = env!("CARGO_PKG_VERSION"),
    about = "herodexd",
    long_about = None
)]
pub struct Herodexd {
    #[command(flatten)]
    pub database: config::Database,

    /// Address to bind the HTTP server to
    #[arg(long, env = "BIND_ADDR", default_value = "localhost")]
    pub bind_addr: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 5555)]
    pub port: u16,
}

impl Herodexd {
    async fn run(self) -> ExitCode {
        match self.run_command().await {
            Ok(code) => code,
            Err(err) => {
                log::error!("Error: {err}");
                for (n, err) in err.chain().skip(1).enumerate() {
                    if n == 0 {
                        log::error!("Caused by:");
                    }
                    log::error!("\t{err}");
                }

                ExitCode::FAILURE
            }
        }
    }

    async fn run_command(self) -> anyhow::Result<ExitCode> {
        let db = Database::bootstrap(&self.database).await?;

        log::info!("listening on {}:{}", self.bind_addr, self.port);

        HttpServer::new(move || {
            App::new()
                .wrap(Logger::default())
                .service(openapi)
                .configure(|svc| herodex_module_fundamental::configure(svc, db.clone()))
        })
        .bind((self.bind_addr.as_str(), self.port))?
        .run()
        .await?;

        Ok(ExitCode::SUCCESS)
    }
}

#[get("/openapi.json")]
async fn openapi() -> impl Responder {
    HttpResponse::Ok().json(herodex_module_fundamental::openapi())
}

#[actix_web::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    Herodexd::parse().run().await
}
