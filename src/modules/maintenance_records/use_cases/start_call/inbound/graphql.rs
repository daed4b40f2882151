use async_graphql::{Context, ID, Object, Result as GqlResult};
use uuid::Uuid;

use crate::modules::maintenance_records::use_cases::start_call::command::StartCall;
use crate::modules::maintenance_records::use_cases::view_dashboard::inbound::graphql::GqlMaintenanceType;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct StartCallMutation;

#[Object]
impl StartCallMutation {
    async fn start_call(
        &self,
        context: &Context<'_>,
        #[graphql(name = "type")] record_type: Option<GqlMaintenanceType>,
        description: String,
        location: String,
        technician: String,
    ) -> GqlResult<ID> {
        let state = context.data_unchecked::<AppState>();

        let command = StartCall {
            record_id: Uuid::now_v7().to_string(),
            record_type: record_type.map(Into::into).unwrap_or_default(),
            description,
            location,
            technician,
            started_at: state.clock.now(),
        };

        let record = state
            .start_call_handler
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(ID(record.id))
    }
}
