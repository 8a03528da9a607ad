use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auth, comment, statistics, ticket},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Helpdesk API", description = "Ticket lifecycle and access control"),
    tags(
        (name = "auth", description = "Login, logout and account registration"),
        (name = "ticket", description = "Ticket lifecycle"),
        (name = "comment", description = "Ticket comments"),
        (name = "statistics", description = "Ticket statistics")
    )
)]
pub struct ApiDoc;

/// Builds the API router and serves its OpenAPI document.
///
/// The document is available at `/api/openapi.json` and browsable at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_user))
        .routes(routes!(auth::register))
        .routes(routes!(ticket::list_tickets, ticket::create_ticket))
        .routes(routes!(
            ticket::get_ticket,
            ticket::update_ticket,
            ticket::delete_ticket
        ))
        .routes(routes!(ticket::assign_ticket))
        .routes(routes!(comment::list_comments, comment::add_comment))
        .routes(routes!(statistics::get_summary))
        .routes(routes!(statistics::get_by_type))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", api))
}
