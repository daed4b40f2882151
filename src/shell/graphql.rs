use async_graphql::{EmptySubscription, MergedObject, Schema, http::GraphiQLSource};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, response::Html};

use crate::modules::maintenance_records::use_cases::edit_record::inbound::graphql::EditRecordMutation;
use crate::modules::maintenance_records::use_cases::end_call::inbound::graphql::EndCallMutation;
use crate::modules::maintenance_records::use_cases::start_call::inbound::graphql::StartCallMutation;
use crate::modules::maintenance_records::use_cases::view_dashboard::inbound::graphql::DashboardQuery;
use crate::modules::maintenance_records::use_cases::view_timeline::inbound::graphql::TimelineQuery;
pub use crate::shell::state::AppState;

pub const GRAPHQL_PATH: &str = "/gql";

#[derive(MergedObject, Default)]
pub struct QueryRoot(DashboardQuery, TimelineQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(StartCallMutation, EndCallMutation, EditRecordMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(state)
    .finish()
}

pub async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
