use std::{
    net::{IpAddr, SocketAddr},
    sync::Arc,
};

use axum::Router;
use folio_core_contact_contracts::ContactFeatureService;
use folio_core_health_contracts::HealthFeatureService;
use folio_di::Build;
use tokio::net::TcpListener;
use tracing::info;

mod errors;
mod macros;
mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone, Build)]
pub struct RestServer<Health, Contact> {
    health: Health,
    contact: Contact,
    config: RestServerConfig,
}

#[derive(Debug, Clone)]
pub struct RestServerConfig {
    pub addr: SocketAddr,
    /// Origins allowed to call the api from a browser. Empty allows any origin.
    pub allowed_origins: Arc<[String]>,
    pub real_ip_config: Option<Arc<RestServerRealIpConfig>>,
}

/// Trust the client ip in `header` for requests coming from `set_from`.
#[derive(Debug)]
pub struct RestServerRealIpConfig {
    pub header: String,
    pub set_from: IpAddr,
}

impl<Health, Contact> RestServer<Health, Contact>
where
    Health: HealthFeatureService,
    Contact: ContactFeatureService,
{
    pub async fn serve(self) -> anyhow::Result<()> {
        let addr = self.config.addr;
        let router = self.router();

        let listener = TcpListener::bind(addr).await?;
        info!("Starting REST API server on {}", listener.local_addr()?);

        axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .map_err(Into::into)
    }

    fn router(self) -> Router<()> {
        let router = Router::new()
            .merge(routes::health::router(self.health.into()))
            .merge(routes::contact::router(self.contact.into()));

        let router = middlewares::panic_handler::add(router);
        let router = middlewares::cors::add(router, &self.config.allowed_origins);
        let router = middlewares::trace::add(router);
        let router = middlewares::client_ip::add(router, self.config.real_ip_config);
        middlewares::request_id::add(router)
    }
}
