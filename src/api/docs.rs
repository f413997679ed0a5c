use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::health::health_handler,
        crate::api::handlers::restaurants::fetch_all_restaurants_handler,
        crate::api::handlers::restaurants::fetch_restaurant_by_id_handler,
        crate::api::handlers::restaurants::add_restaurant_handler
    ),
    components(
        schemas(crate::api::handlers::health::HealthResponse, crate::api::dto::RestaurantDto)
    ),
    tags(
        (name = "restaurants", description = "Restaurant listing operations"),
        (name = "health", description = "Liveness and readiness")
    ),
    info(title = "Restaurant Listing API")
)]
pub struct ApiDoc;

/// Swagger UI at `/swagger-ui`, raw document at `/api-docs/openapi.json`
pub fn docs_router() -> Router {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()).into()
}
