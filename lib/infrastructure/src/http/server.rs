use actix_web::*;
use anyhow::Context as _;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct HttpServerConfig {
    pub port: u16,
}

impl HttpServerConfig {
    pub async fn run_server<F>(&self, configure: F) -> anyhow::Result<()>
    where
        F: Fn(&mut web::ServiceConfig) + Send + Clone + 'static,
    {
        let http_server = HttpServer::new(move || {
            let configure = configure.clone();

            App::new()
                .wrap(tracing_actix_web::TracingLogger::default())
                .configure(move |cfg| configure(cfg))
        })
        .workers(1)
        .bind(("0.0.0.0", self.port))?;

        http_server
            .run()
            .await
            .with_context(|| format!("Error starting HTTP server on port {}", self.port))
    }
}
