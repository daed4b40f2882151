use async_graphql::{Context, Enum, ID, Object, Result as GqlResult, SimpleObject};

use crate::modules::maintenance_records::core::shift::{HourMarker, Shift};
use crate::modules::maintenance_records::use_cases::view_timeline::projection::{
    SegmentView, TimelineView,
};
use crate::shell::state::AppState;

#[derive(Enum, Clone, Copy, PartialEq, Eq)]
#[graphql(name = "Shift")]
pub enum GqlShift {
    Day,
    Night,
}

impl From<GqlShift> for Shift {
    fn from(value: GqlShift) -> Self {
        match value {
            GqlShift::Day => Shift::Day,
            GqlShift::Night => Shift::Night,
        }
    }
}

impl From<Shift> for GqlShift {
    fn from(value: Shift) -> Self {
        match value {
            Shift::Day => GqlShift::Day,
            Shift::Night => GqlShift::Night,
        }
    }
}

#[derive(SimpleObject)]
#[graphql(name = "HourMarker")]
pub struct GqlHourMarker {
    pub label: String,
    pub left_percent: f64,
}

impl From<HourMarker> for GqlHourMarker {
    fn from(marker: HourMarker) -> Self {
        Self {
            label: marker.label,
            left_percent: marker.left_percent,
        }
    }
}

#[derive(SimpleObject)]
#[graphql(name = "TimelineSegment")]
pub struct GqlSegment {
    pub record_id: ID,
    pub description: String,
    pub location: String,
    pub technician: String,
    pub left_percent: f64,
    pub width_percent: f64,
    pub active: bool,
    pub caused_downtime: bool,
    pub time_label: String,
}

impl From<SegmentView> for GqlSegment {
    fn from(segment: SegmentView) -> Self {
        Self {
            record_id: ID(segment.record_id),
            description: segment.description,
            location: segment.location,
            technician: segment.technician,
            left_percent: segment.left_percent,
            width_percent: segment.width_percent,
            active: segment.active,
            caused_downtime: segment.caused_downtime,
            time_label: segment.time_label,
        }
    }
}

#[derive(SimpleObject)]
#[graphql(name = "Timeline")]
pub struct GqlTimeline {
    pub shift: GqlShift,
    pub markers: Vec<GqlHourMarker>,
    pub half_hour_ticks: Vec<f64>,
    pub segments: Vec<GqlSegment>,
}

impl From<TimelineView> for GqlTimeline {
    fn from(view: TimelineView) -> Self {
        Self {
            shift: view.shift.into(),
            markers: view.markers.into_iter().map(Into::into).collect(),
            half_hour_ticks: view.half_hour_ticks,
            segments: view.segments.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Default)]
pub struct TimelineQuery;

#[Object]
impl TimelineQuery {
    async fn timeline(
        &self,
        context: &Context<'_>,
        shift: Option<GqlShift>,
    ) -> GqlResult<GqlTimeline> {
        let state = context.data_unchecked::<AppState>();
        let view = state
            .timeline
            .timeline(shift.map(Into::into))
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(view.into())
    }
}
