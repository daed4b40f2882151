use async_graphql::{Context, Enum, ID, Object, Result as GqlResult, SimpleObject};

use crate::modules::maintenance_records::core::record::MaintenanceType;
use crate::modules::maintenance_records::use_cases::view_dashboard::projection::{
    DashboardView, RecordView,
};
use crate::modules::maintenance_records::use_cases::view_timeline::inbound::graphql::GqlShift;
use crate::shell::state::AppState;

#[derive(Enum, Clone, Copy, PartialEq, Eq)]
#[graphql(name = "MaintenanceType")]
pub enum GqlMaintenanceType {
    MaintenanceCall,
    Preventative,
    Proactive,
    Project,
    #[graphql(name = "FOUR_S_D")]
    FourSD,
}

impl From<MaintenanceType> for GqlMaintenanceType {
    fn from(value: MaintenanceType) -> Self {
        match value {
            MaintenanceType::MaintenanceCall => GqlMaintenanceType::MaintenanceCall,
            MaintenanceType::Preventative => GqlMaintenanceType::Preventative,
            MaintenanceType::Proactive => GqlMaintenanceType::Proactive,
            MaintenanceType::Project => GqlMaintenanceType::Project,
            MaintenanceType::FourSD => GqlMaintenanceType::FourSD,
        }
    }
}

impl From<GqlMaintenanceType> for MaintenanceType {
    fn from(value: GqlMaintenanceType) -> Self {
        match value {
            GqlMaintenanceType::MaintenanceCall => MaintenanceType::MaintenanceCall,
            GqlMaintenanceType::Preventative => MaintenanceType::Preventative,
            GqlMaintenanceType::Proactive => MaintenanceType::Proactive,
            GqlMaintenanceType::Project => MaintenanceType::Project,
            GqlMaintenanceType::FourSD => MaintenanceType::FourSD,
        }
    }
}

#[derive(SimpleObject)]
#[graphql(name = "MaintenanceRecord")]
pub struct GqlRecord {
    pub id: ID,
    #[graphql(name = "type")]
    pub record_type: GqlMaintenanceType,
    pub type_label: String,
    pub description: String,
    pub location: String,
    pub technician: String,
    /// RFC 3339.
    pub start_time: String,
    pub end_time: Option<String>,
    pub start_label: String,
    pub end_label: Option<String>,
    pub duration: String,
    pub resolution: Option<String>,
    pub actual_issue: Option<String>,
    pub caused_downtime: bool,
    pub active: bool,
}

impl From<RecordView> for GqlRecord {
    fn from(view: RecordView) -> Self {
        Self {
            id: ID(view.id),
            record_type: view.record_type.into(),
            type_label: view.type_label.to_string(),
            description: view.description,
            location: view.location,
            technician: view.technician,
            start_time: view.start_time.to_rfc3339(),
            end_time: view.end_time.map(|end| end.to_rfc3339()),
            start_label: view.start_label,
            end_label: view.end_label,
            duration: view.duration,
            resolution: view.resolution,
            actual_issue: view.actual_issue,
            caused_downtime: view.caused_downtime,
            active: view.active,
        }
    }
}

#[derive(SimpleObject)]
#[graphql(name = "Dashboard")]
pub struct GqlDashboard {
    pub active_calls: u64,
    pub total_records: u64,
    pub downtime_incidents: u64,
    pub mean_time_to_repair_minutes: i64,
    pub mean_time_to_repair: String,
    pub shift: GqlShift,
    pub active_records: Vec<GqlRecord>,
    pub recent_completed: Vec<GqlRecord>,
}

impl From<DashboardView> for GqlDashboard {
    fn from(view: DashboardView) -> Self {
        Self {
            active_calls: view.active_calls as u64,
            total_records: view.total_records as u64,
            downtime_incidents: view.downtime_incidents as u64,
            mean_time_to_repair_minutes: view.mean_time_to_repair_minutes,
            mean_time_to_repair: view.mean_time_to_repair,
            shift: view.shift.into(),
            active_records: view.active_records.into_iter().map(Into::into).collect(),
            recent_completed: view.recent_completed.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Default)]
pub struct DashboardQuery;

#[Object]
impl DashboardQuery {
    async fn dashboard(&self, context: &Context<'_>) -> GqlResult<GqlDashboard> {
        let state = context.data_unchecked::<AppState>();
        let view = state
            .dashboard
            .dashboard()
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(view.into())
    }

    async fn active_records(&self, context: &Context<'_>) -> GqlResult<Vec<GqlRecord>> {
        let state = context.data_unchecked::<AppState>();
        let records = state
            .dashboard
            .active_records()
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    async fn completed_records(
        &self,
        context: &Context<'_>,
        limit: Option<u32>,
    ) -> GqlResult<Vec<GqlRecord>> {
        let state = context.data_unchecked::<AppState>();
        let records = state
            .dashboard
            .completed_records(limit.map(|limit| limit as usize))
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
