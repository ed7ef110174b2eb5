use crate::{middleware::JsonBody, state::AppState};
use axum::{
    Json,
    extract::{Extension, Path},
    response::IntoResponse,
    routing::{get, post},
};
use shared::{
    abstract_trait::subscription::service::{
        DynSubscriptionCommandService, DynSubscriptionQueryService,
    },
    domain::{
        requests::{SubscriptionRequest, SubscriptionSummaryRequest},
        responses::{ApiResponse, SubscriptionResponse, TotalCostResponse},
    },
    errors::{AppErrorHttp, ConversionError, ErrorResponse},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;

fn parse_id(raw: &str) -> Result<Uuid, ConversionError> {
    Uuid::parse_str(raw).map_err(|_| ConversionError::InvalidId(raw.to_string()))
}

#[utoipa::path(
    post,
    path = "/subscriptions",
    tag = "Subscription",
    request_body = SubscriptionRequest,
    responses(
        (status = 200, description = "Subscription created", body = ApiResponse<String>),
        (status = 400, description = "Invalid request or business rule violation", body = ErrorResponse),
        (status = 409, description = "Subscription already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_subscription(
    Extension(service): Extension<DynSubscriptionCommandService>,
    JsonBody(body): JsonBody<Option<SubscriptionRequest>>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let subscription = SubscriptionRequest::from_body(body)?;
    service.create(&subscription).await?;
    Ok(Json(ApiResponse::new("Subscription created")))
}

#[utoipa::path(
    get,
    path = "/subscriptions/{id}",
    tag = "Subscription",
    params(("id" = String, Path, description = "Subscription ID")),
    responses(
        (status = 200, description = "Subscription details", body = ApiResponse<SubscriptionResponse>),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Subscription not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_subscription(
    Extension(service): Extension<DynSubscriptionQueryService>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let id = parse_id(&id)?;
    let subscription = service.find_by_id(id).await?;
    Ok(Json(ApiResponse::new(subscription)))
}

/// The stored update is keyed on the body's `user_id`, so every
/// subscription of that user is overwritten.
#[utoipa::path(
    put,
    path = "/subscriptions/{id}",
    tag = "Subscription",
    params(("id" = String, Path, description = "Subscription ID")),
    request_body = SubscriptionRequest,
    responses(
        (status = 200, description = "Subscription updated", body = ApiResponse<String>),
        (status = 400, description = "Invalid request or business rule violation", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn update_subscription(
    Extension(service): Extension<DynSubscriptionCommandService>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<Option<SubscriptionRequest>>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let id = parse_id(&id)?;
    let mut subscription = SubscriptionRequest::from_body(body)?;
    subscription.id = id;

    service.update(&subscription).await?;
    Ok(Json(ApiResponse::new("Subscription was successfully updated")))
}

#[utoipa::path(
    delete,
    path = "/subscriptions/{id}",
    tag = "Subscription",
    params(("id" = String, Path, description = "Subscription ID")),
    responses(
        (status = 200, description = "Subscription deleted", body = ApiResponse<String>),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Subscription not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn delete_subscription(
    Extension(service): Extension<DynSubscriptionCommandService>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let id = parse_id(&id)?;
    service.delete(id).await?;
    Ok(Json(ApiResponse::new("Subscription deleted")))
}

#[utoipa::path(
    post,
    path = "/subscriptions/list",
    tag = "Subscription",
    request_body = SubscriptionSummaryRequest,
    responses(
        (status = 200, description = "Total cost over the period", body = TotalCostResponse),
        (status = 400, description = "Invalid request or period", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_subscriptions(
    Extension(service): Extension<DynSubscriptionQueryService>,
    JsonBody(body): JsonBody<SubscriptionSummaryRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let summary = body.into_summary()?;
    let total_cost = service.total_cost(&summary).await?;
    Ok(Json(TotalCostResponse { total_cost }))
}

pub fn subscription_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/subscriptions", post(create_subscription))
        .route("/subscriptions/list", post(list_subscriptions))
        .route(
            "/subscriptions/{id}",
            get(get_subscription)
                .put(update_subscription)
                .delete(delete_subscription),
        )
        .layer(Extension(app_state.di_container.subscription_command.clone()))
        .layer(Extension(app_state.di_container.subscription_query.clone()))
}
