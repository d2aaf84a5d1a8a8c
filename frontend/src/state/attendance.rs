use crate::api::{ApiClient, AttendanceQuery, AttendanceRecord, AttendanceStatus, RequestError};
use crate::state::sync::{FetchSequencer, FetchToken};
use chrono::NaiveDate;
use leptos::*;

/// Counts over one fetched record set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttendanceStats {
    pub present: usize,
    pub absent: usize,
    pub records: usize,
}

impl AttendanceStats {
    /// Statuses other than the exact strings "Present" and "Absent" are not
    /// counted.
    pub fn from_records(records: &[AttendanceRecord]) -> Self {
        records.iter().fold(
            Self {
                records: records.len(),
                ..Self::default()
            },
            |mut stats, record| {
                if record.has_status(AttendanceStatus::Present) {
                    stats.present += 1;
                } else if record.has_status(AttendanceStatus::Absent) {
                    stats.absent += 1;
                }
                stats
            },
        )
    }

    pub fn counted(&self) -> usize {
        self.present + self.absent
    }
}

/// Records currently shown by a page plus their counts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttendanceState {
    pub records: Vec<AttendanceRecord>,
    pub stats: AttendanceStats,
}

impl AttendanceState {
    pub fn replace(&mut self, records: Vec<AttendanceRecord>) {
        self.stats = AttendanceStats::from_records(&records);
        self.records = records;
    }
}

/// Which records a page asks for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttendanceFilter {
    pub employee_id: Option<i64>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl AttendanceFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn for_employee(employee_id: Option<i64>) -> Self {
        Self {
            employee_id,
            ..Self::default()
        }
    }

    pub fn has_range(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }

    pub fn to_query(&self) -> AttendanceQuery {
        AttendanceQuery {
            employee_id: self.employee_id,
            from_date: self.from,
            to_date: self.to,
        }
    }
}

/// Page-owned record list fed by sequenced fetches.
#[derive(Clone)]
pub struct AttendanceBoard {
    pub state: RwSignal<AttendanceState>,
    pub loading: RwSignal<bool>,
    sequencer: FetchSequencer,
}

impl AttendanceBoard {
    pub fn new() -> Self {
        Self {
            state: create_rw_signal(AttendanceState::default()),
            loading: create_rw_signal(false),
            sequencer: FetchSequencer::new(),
        }
    }

    pub fn begin_fetch(&self) -> FetchToken {
        self.loading.set(true);
        self.sequencer.next()
    }

    /// Replaces the records if `token` is still current; on failure the
    /// previous records stay and the error is returned.
    pub fn finish_fetch(
        &self,
        token: FetchToken,
        result: Result<Vec<AttendanceRecord>, RequestError>,
    ) -> Result<(), RequestError> {
        if !self.sequencer.is_current(token) {
            log::warn!("Discarding stale attendance response");
            return Ok(());
        }
        self.loading.set(false);
        let records = result?;
        self.state.update(|state| state.replace(records));
        Ok(())
    }

    pub async fn refresh(
        &self,
        api: &ApiClient,
        filter: &AttendanceFilter,
    ) -> Result<(), RequestError> {
        let token = self.begin_fetch();
        let result = load_records(api, filter).await;
        self.finish_fetch(token, result)
    }

    pub fn stats(&self) -> Signal<AttendanceStats> {
        let state = self.state;
        Signal::derive(move || state.with(|state| state.stats))
    }
}

impl Default for AttendanceBoard {
    fn default() -> Self {
        Self::new()
    }
}

/// Without a date range an employee filter uses the path-scoped endpoint;
/// any range goes through the query-parameter listing.
pub async fn load_records(
    api: &ApiClient,
    filter: &AttendanceFilter,
) -> Result<Vec<AttendanceRecord>, RequestError> {
    match filter.employee_id {
        Some(employee_id) if !filter.has_range() => {
            api.list_attendance_by_employee(employee_id).await
        }
        _ => api.list_attendance(&filter.to_query()).await,
    }
}
