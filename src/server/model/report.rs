//! Report filtering.
//!
//! Dashboards, request lists and exports all accept the same filter. It is
//! normalized by [`prepare_query`] into a [`ReportQuery`], which is then turned
//! into a SeaORM condition over the `service_request` table.

use chrono::{DateTime, NaiveTime, TimeDelta, TimeZone, Utc};
use sea_orm::{ColumnTrait, Condition, Value};

use entity::service_request::Column;

/// Raw filter as received from the client, list values already split.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportFilter {
    pub started_at: Option<DateTime<Utc>>,
    pub ended_at: Option<DateTime<Utc>>,
    pub jurisdictions: Vec<i32>,
    pub groups: Vec<i32>,
    pub services: Vec<i32>,
    pub statuses: Vec<i32>,
    pub priorities: Vec<i32>,
    pub workspaces: Vec<String>,
}

/// Match against a single value or a set of values.
#[derive(Debug, Clone, PartialEq)]
pub enum Criterion<T> {
    Eq(T),
    In(Vec<T>),
}

impl<T: Ord> Criterion<T> {
    /// `None` for no values, `Eq` for one and `In` with sorted unique values otherwise.
    pub fn from_values(mut values: Vec<T>) -> Option<Self> {
        values.sort();
        values.dedup();

        match values.len() {
            0 => None,
            1 => values.pop().map(Criterion::Eq),
            _ => Some(Criterion::In(values)),
        }
    }
}

/// Normalized report filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportQuery {
    /// Inclusive lower bound on `created_at`.
    pub created_from: Option<DateTime<Utc>>,
    /// Inclusive upper bound on `created_at`.
    pub created_to: Option<DateTime<Utc>>,
    pub jurisdiction: Option<Criterion<i32>>,
    pub group: Option<Criterion<i32>>,
    pub service: Option<Criterion<i32>>,
    pub status: Option<Criterion<i32>>,
    pub priority: Option<Criterion<i32>>,
    pub workspace: Option<Criterion<String>>,
}

/// Normalizes a report filter against the current time.
///
/// Bounds in the future are pulled back to `now` before inverted bounds are
/// swapped. The lower bound is then moved to the start of its day and the upper
/// bound to the last millisecond of its day, never beyond `now`.
pub fn prepare_query(filter: ReportFilter, now: DateTime<Utc>) -> ReportQuery {
    let started_at = filter.started_at.map(|start| start.min(now));
    let ended_at = filter.ended_at.map(|end| end.min(now));

    let (started_at, ended_at) = match (started_at, ended_at) {
        (Some(start), Some(end)) if start > end => (Some(end), Some(start)),
        bounds => bounds,
    };

    ReportQuery {
        created_from: started_at.map(start_of_day),
        created_to: ended_at.map(|end| end_of_day(end).min(now)),
        jurisdiction: Criterion::from_values(filter.jurisdictions),
        group: Criterion::from_values(filter.groups),
        service: Criterion::from_values(filter.services),
        status: Criterion::from_values(filter.statuses),
        priority: Criterion::from_values(filter.priorities),
        workspace: Criterion::from_values(filter.workspaces),
    }
}

fn start_of_day(at: DateTime<Utc>) -> DateTime<Utc> {
    Utc.from_utc_datetime(&at.date_naive().and_time(NaiveTime::MIN))
}

fn end_of_day(at: DateTime<Utc>) -> DateTime<Utc> {
    start_of_day(at) + TimeDelta::days(1) - TimeDelta::milliseconds(1)
}

impl ReportQuery {
    pub fn into_condition(self) -> Condition {
        let mut condition = Condition::all();

        if let Some(from) = self.created_from {
            condition = condition.add(Column::CreatedAt.gte(from));
        }
        if let Some(to) = self.created_to {
            condition = condition.add(Column::CreatedAt.lte(to));
        }

        condition = add_criterion(condition, Column::JurisdictionId, self.jurisdiction);
        condition = add_criterion(condition, Column::GroupId, self.group);
        condition = add_criterion(condition, Column::ServiceId, self.service);
        condition = add_criterion(condition, Column::StatusId, self.status);
        condition = add_criterion(condition, Column::PriorityId, self.priority);
        add_criterion(condition, Column::Workspace, self.workspace)
    }
}

fn add_criterion<T>(condition: Condition, column: Column, criterion: Option<Criterion<T>>) -> Condition
where
    T: Into<Value>,
{
    match criterion {
        None => condition,
        Some(Criterion::Eq(value)) => condition.add(column.eq(value)),
        Some(Criterion::In(values)) => condition.add(column.is_in(values)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbBackend, EntityTrait, QueryFilter, QueryTrait};

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn swaps_inverted_dates() {
        let now = at(2026, 10, 18, 12, 0);
        let filter = ReportFilter {
            started_at: Some(at(2026, 10, 10, 15, 30)),
            ended_at: Some(at(2026, 10, 1, 9, 0)),
            ..Default::default()
        };

        let query = prepare_query(filter, now);

        assert_eq!(query.created_from, Some(at(2026, 10, 1, 0, 0)));
        assert_eq!(
            query.created_to,
            Some(at(2026, 10, 11, 0, 0) - TimeDelta::milliseconds(1))
        );
    }

    #[test]
    fn clamps_end_to_now() {
        let now = at(2026, 10, 18, 12, 0);
        let filter = ReportFilter {
            ended_at: Some(at(2026, 10, 18, 8, 0)),
            ..Default::default()
        };

        let query = prepare_query(filter, now);

        assert_eq!(query.created_from, None);
        assert_eq!(query.created_to, Some(now));
    }

    #[test]
    fn future_start_never_passes_end() {
        let now = at(2026, 10, 18, 12, 0);
        let filter = ReportFilter {
            started_at: Some(at(2026, 11, 2, 0, 0)),
            ended_at: Some(at(2026, 12, 1, 0, 0)),
            ..Default::default()
        };

        let query = prepare_query(filter, now);

        assert_eq!(query.created_from, Some(at(2026, 10, 18, 0, 0)));
        assert_eq!(query.created_to, Some(now));
    }

    #[test]
    fn future_start_with_past_end_is_swapped() {
        let now = at(2026, 10, 18, 12, 0);
        let filter = ReportFilter {
            started_at: Some(at(2027, 1, 1, 0, 0)),
            ended_at: Some(at(2026, 10, 5, 9, 0)),
            ..Default::default()
        };

        let query = prepare_query(filter, now);

        assert_eq!(query.created_from, Some(at(2026, 10, 5, 0, 0)));
        assert_eq!(query.created_to, Some(now));
        assert!(query.created_from <= query.created_to);
    }

    #[test]
    fn single_value_is_eq_and_several_are_in() {
        let filter = ReportFilter {
            jurisdictions: vec![4],
            services: vec![9, 2, 9],
            workspaces: vec!["Call Center".to_string()],
            ..Default::default()
        };

        let query = prepare_query(filter, Utc::now());

        assert_eq!(query.jurisdiction, Some(Criterion::Eq(4)));
        assert_eq!(query.service, Some(Criterion::In(vec![2, 9])));
        assert_eq!(query.workspace, Some(Criterion::Eq("Call Center".to_string())));
        assert_eq!(query.group, None);
    }

    #[test]
    fn builds_condition_over_service_request_columns() {
        let query = prepare_query(
            ReportFilter {
                jurisdictions: vec![1, 2],
                services: vec![3],
                ..Default::default()
            },
            Utc::now(),
        );

        let sql = entity::prelude::ServiceRequest::find()
            .filter(query.into_condition())
            .build(DbBackend::Sqlite)
            .to_string();

        assert!(sql.contains("\"jurisdiction_id\" IN (1, 2)"));
        assert!(sql.contains("\"service_id\" = 3"));
    }
}
