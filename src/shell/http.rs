// Request pipeline, assembled in one place so the stage order is explicit:
// trace -> error-view rendering -> routers -> static files -> 404.

use axum::Router;
use axum::extract::{Request, State};
use axum::handler::HandlerWithoutStateExt;
use axum::http::{Method, Uri};
use axum::middleware::{self, Next};
use axum::response::{Html, IntoResponse, Response};
use tera::Context;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::modules::comments::inbound::http as comments_http;
use crate::modules::pages::inbound::http as pages_http;
use crate::modules::users::inbound::http as users_http;
use crate::shared::error::AppError;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    // Paths no router claims are tried against the public directory; what
    // the directory cannot serve becomes the synthesized 404.
    let static_files = ServeDir::new(&state.config.public_dir)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(route_not_found.into_service());

    Router::new()
        .merge(pages_http::router())
        .nest("/users", users_http::router())
        .nest("/comments", comments_http::router())
        .fallback_service(static_files)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            render_error_views,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn route_not_found(method: Method, uri: Uri) -> AppError {
    AppError::route_not_found(&method, &uri)
}

/// Terminal error stage: any `AppError` left in the response extensions is
/// rendered into the error view. Detail is only exposed outside production.
async fn render_error_views(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;
    let Some(err) = response.extensions_mut().remove::<AppError>() else {
        return response;
    };

    if err.status.is_server_error() {
        tracing::error!(
            status = err.status.as_u16(),
            message = %err.message,
            detail = err.detail.as_deref().unwrap_or(""),
            "request failed"
        );
    }

    let exposed_detail = if state.config.env.is_production() {
        String::new()
    } else {
        err.detail.clone().unwrap_or_default()
    };

    let mut context = Context::new();
    context.insert("status", &err.status.as_u16());
    context.insert("message", &err.message);
    context.insert("error", &exposed_detail);

    match state.views.render("error.html", &context) {
        Ok(html) => (err.status, Html(html)).into_response(),
        Err(render_err) => {
            tracing::error!(error = %render_err, "error view failed to render");
            (err.status, err.message).into_response()
        }
    }
}
