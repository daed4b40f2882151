use axum::{
    Extension, Router,
    routing::{get, post, put},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::modules::maintenance_records::use_cases::edit_record::inbound::http as edit_record_http;
use crate::modules::maintenance_records::use_cases::end_call::inbound::http as end_call_http;
use crate::modules::maintenance_records::use_cases::start_call::inbound::http as start_call_http;
use crate::modules::maintenance_records::use_cases::view_dashboard::inbound::http as dashboard_http;
use crate::modules::maintenance_records::use_cases::view_timeline::inbound::http as timeline_http;
use crate::shell::graphql::{GRAPHQL_PATH, build_schema, graphiql, graphql};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());

    Router::new()
        .route("/calls", post(start_call_http::handle))
        .route("/calls/end", post(end_call_http::handle))
        .route("/records/{id}", put(edit_record_http::handle))
        .route("/records/active", get(dashboard_http::active_records))
        .route("/records/completed", get(dashboard_http::completed_records))
        .route("/dashboard", get(dashboard_http::dashboard))
        .route("/timeline", get(timeline_http::handle))
        .with_state(state)
        .route(GRAPHQL_PATH, get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
