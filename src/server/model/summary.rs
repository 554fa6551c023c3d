//! Aggregates shown on the dashboard.

use crate::{
    model::report::{
        BreakdownDto, ChartDto, OverviewDto, OverviewItemDto, StandingDto, SummaryDto,
    },
    server::model::service_request::{Reference, ServiceRequest},
};

/// Counts and averages over a set of requests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub total: u64,
    pub pending: u64,
    pub resolved: u64,
    /// Pending requests with no assignee.
    pub unattended: u64,
    pub average_ttr_seconds: Option<i64>,
    pub average_call_duration_seconds: Option<i64>,
}

impl Summary {
    pub fn from_requests<'r>(requests: impl IntoIterator<Item = &'r ServiceRequest>) -> Self {
        let mut summary = Summary::default();
        let mut ttr = Average::default();
        let mut call = Average::default();

        for request in requests {
            summary.total += 1;
            if request.is_resolved() {
                summary.resolved += 1;
            } else {
                summary.pending += 1;
                if request.assignee_id.is_none() {
                    summary.unattended += 1;
                }
            }
            ttr.push(request.ttr_seconds());
            call.push(request.call_duration_seconds());
        }

        summary.average_ttr_seconds = ttr.value();
        summary.average_call_duration_seconds = call.value();
        summary
    }

    pub fn into_dto(self) -> SummaryDto {
        SummaryDto {
            total: self.total,
            pending: self.pending,
            resolved: self.resolved,
            unattended: self.unattended,
            average_ttr_seconds: self.average_ttr_seconds,
            average_call_duration_seconds: self.average_call_duration_seconds,
        }
    }
}

#[derive(Default)]
struct Average {
    sum: i64,
    count: i64,
}

impl Average {
    fn push(&mut self, value: Option<i64>) {
        if let Some(value) = value {
            self.sum += value;
            self.count += 1;
        }
    }

    fn value(&self) -> Option<i64> {
        (self.count > 0).then(|| self.sum / self.count)
    }
}

/// One bucket of a breakdown, e.g. all requests of one service.
#[derive(Debug, Clone, PartialEq)]
pub struct OverviewItem {
    pub id: Option<i32>,
    pub name: String,
    pub color: Option<String>,
    pub count: u64,
    pub pending: u64,
    pub resolved: u64,
    pub average_ttr_seconds: Option<i64>,
}

impl OverviewItem {
    pub fn into_dto(self) -> OverviewItemDto {
        OverviewItemDto {
            id: self.id,
            name: self.name,
            color: self.color,
            count: self.count,
            pending: self.pending,
            resolved: self.resolved,
            average_ttr_seconds: self.average_ttr_seconds,
        }
    }
}

/// Requests split along one dimension, largest bucket first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Breakdown {
    pub items: Vec<OverviewItem>,
}

impl Breakdown {
    /// Converts to a DTO carrying the items and a chart series over them.
    ///
    /// Buckets without a color are drawn in grey.
    pub fn into_dto(self) -> BreakdownDto {
        let chart = ChartDto {
            labels: self.items.iter().map(|i| i.name.clone()).collect(),
            values: self.items.iter().map(|i| i.count).collect(),
            colors: self
                .items
                .iter()
                .map(|i| i.color.clone().unwrap_or_else(|| "#9E9E9E".to_string()))
                .collect(),
        };

        BreakdownDto {
            items: self.items.into_iter().map(OverviewItem::into_dto).collect(),
            chart,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overview {
    pub summary: Summary,
    pub jurisdictions: Breakdown,
    pub groups: Breakdown,
    pub services: Breakdown,
    pub statuses: Breakdown,
    pub priorities: Breakdown,
    pub methods: Breakdown,
    pub workspaces: Breakdown,
}

impl Overview {
    pub fn into_dto(self) -> OverviewDto {
        OverviewDto {
            summary: self.summary.into_dto(),
            jurisdictions: self.jurisdictions.into_dto(),
            groups: self.groups.into_dto(),
            services: self.services.into_dto(),
            statuses: self.statuses.into_dto(),
            priorities: self.priorities.into_dto(),
            methods: self.methods.into_dto(),
            workspaces: self.workspaces.into_dto(),
        }
    }
}

/// Request count for one combination of jurisdiction, group, service, status and priority.
#[derive(Debug, Clone, PartialEq)]
pub struct Standing {
    pub jurisdiction: Option<Reference>,
    pub group: Option<Reference>,
    pub service: Option<Reference>,
    pub status: Option<Reference>,
    pub priority: Option<Reference>,
    pub count: u64,
}

impl Standing {
    /// The row takes the status color.
    pub fn into_dto(self) -> StandingDto {
        let color = self.status.as_ref().and_then(|s| s.color.clone());

        StandingDto {
            jurisdiction: self.jurisdiction.map(|r| r.name),
            group: self.group.map(|r| r.name),
            service: self.service.map(|r| r.name),
            status: self.status.map(|r| r.name),
            priority: self.priority.map(|r| r.name),
            color,
            count: self.count,
        }
    }
}
