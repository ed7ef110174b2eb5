mod metrics;
mod subscription;

use crate::{middleware::request_log, state::AppState};
use anyhow::Result;
use axum::{Router, extract::DefaultBodyLimit, middleware};
use shared::utils::shutdown_signal;
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, timeout::TimeoutLayer};
use tracing::info;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::metrics::metrics_routes;
pub use self::subscription::subscription_routes;

const MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(OpenApi)]
#[openapi(
    paths(
        subscription::create_subscription,
        subscription::get_subscription,
        subscription::update_subscription,
        subscription::delete_subscription,
        subscription::list_subscriptions,

        metrics::metrics_handler,
    ),
    tags(
        (name = "Subscription", description = "Subscription records and cost aggregation"),
        (name = "Metrics", description = "Prometheus metrics"),
    )
)]
struct ApiDoc;

pub struct AppRouter;

impl AppRouter {
    /// The full application: API routes, docs, and the request layers.
    pub fn router(app_state: AppState, request_timeout: Duration) -> Router {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .merge(subscription_routes(shared_state.clone()))
            .merge(metrics_routes(shared_state.clone()));

        let (app_router, api) = api_router.split_for_parts();

        app_router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
            .layer(middleware::from_fn(request_log))
            .layer(TimeoutLayer::new(request_timeout))
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
    }

    pub async fn serve(port: u16, app_state: AppState, request_timeout: Duration) -> Result<()> {
        let app = Self::router(app_state, request_timeout);

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!("📖 Swagger UI: http://localhost:{port}/swagger-ui");

        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown_signal())
        .await?;

        Ok(())
    }
}
