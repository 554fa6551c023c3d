//! Grouping of service requests for dashboards.

use std::collections::{BTreeMap, HashMap};

use crate::server::model::{
    service_request::{Reference, References, ServiceRequest},
    summary::{Breakdown, Overview, OverviewItem, Standing, Summary},
};

/// Name of buckets for requests that leave a dimension empty.
pub const UNSPECIFIED: &str = "Unspecified";

/// Summary plus a breakdown along every dimension.
pub fn overview(requests: &[ServiceRequest], refs: &References) -> Overview {
    Overview {
        summary: Summary::from_requests(requests),
        jurisdictions: breakdown(requests, |r| label(&refs.jurisdictions, r.jurisdiction_id)),
        groups: breakdown(requests, |r| label(&refs.groups, r.group_id)),
        services: breakdown(requests, |r| label(&refs.services, Some(r.service_id))),
        statuses: breakdown(requests, |r| label(&refs.statuses, Some(r.status_id))),
        priorities: breakdown(requests, |r| label(&refs.priorities, Some(r.priority_id))),
        methods: breakdown(requests, |r| Label {
            id: None,
            name: r.method.as_str().to_string(),
            color: None,
        }),
        workspaces: breakdown(requests, |r| Label {
            id: None,
            name: r
                .workspace
                .clone()
                .unwrap_or_else(|| UNSPECIFIED.to_string()),
            color: None,
        }),
    }
}

/// Bucket a request falls into.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Label {
    pub id: Option<i32>,
    pub name: String,
    pub color: Option<String>,
}

fn label(map: &HashMap<i32, Reference>, id: Option<i32>) -> Label {
    match id {
        Some(id) => match map.get(&id) {
            Some(reference) => Label {
                id: Some(id),
                name: reference.name.clone(),
                color: reference.color.clone(),
            },
            None => Label {
                id: Some(id),
                name: format!("#{}", id),
                color: None,
            },
        },
        None => Label {
            id: None,
            name: UNSPECIFIED.to_string(),
            color: None,
        },
    }
}

/// Splits requests by `key`, largest bucket first and then by name.
pub fn breakdown<F>(requests: &[ServiceRequest], key: F) -> Breakdown
where
    F: Fn(&ServiceRequest) -> Label,
{
    let mut buckets: BTreeMap<Label, Vec<&ServiceRequest>> = BTreeMap::new();
    for request in requests {
        buckets.entry(key(request)).or_default().push(request);
    }

    let mut items: Vec<OverviewItem> = buckets
        .into_iter()
        .map(|(label, requests)| {
            let summary = Summary::from_requests(requests);
            OverviewItem {
                id: label.id,
                name: label.name,
                color: label.color,
                count: summary.total,
                pending: summary.pending,
                resolved: summary.resolved,
                average_ttr_seconds: summary.average_ttr_seconds,
            }
        })
        .collect();

    items.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));

    Breakdown { items }
}

type StandingKey = (Option<i32>, Option<i32>, i32, i32, i32);

/// Counts per jurisdiction, group, service, status and priority combination,
/// largest first.
pub fn standings(requests: &[ServiceRequest], refs: &References) -> Vec<Standing> {
    let mut counts: BTreeMap<StandingKey, u64> = BTreeMap::new();
    for r in requests {
        *counts
            .entry((r.jurisdiction_id, r.group_id, r.service_id, r.status_id, r.priority_id))
            .or_default() += 1;
    }

    let lookup = |map: &HashMap<i32, Reference>, id: Option<i32>| {
        id.and_then(|id| map.get(&id)).cloned()
    };

    let mut standings: Vec<Standing> = counts
        .into_iter()
        .map(|((jurisdiction, group, service, status, priority), count)| Standing {
            jurisdiction: lookup(&refs.jurisdictions, jurisdiction),
            group: lookup(&refs.groups, group),
            service: lookup(&refs.services, Some(service)),
            status: lookup(&refs.statuses, Some(status)),
            priority: lookup(&refs.priorities, Some(priority)),
            count,
        })
        .collect();

    // Stable sort keeps the key order among equal counts
    standings.sort_by(|a, b| b.count.cmp(&a.count));

    standings
}

#[cfg(test)]
mod tests {
    use test_utils::fixture;

    use super::*;

    fn request(builder: fixture::service_request::ServiceRequestEntityBuilder) -> ServiceRequest {
        ServiceRequest::from_entity(builder.build()).unwrap()
    }

    fn refs() -> References {
        let mut refs = References::default();
        refs.services
            .insert(1, Reference::new(1, "Water Leakage", Some("#0000FF".to_string())));
        refs.services
            .insert(2, Reference::new(2, "Billing", Some("#00FF00".to_string())));
        refs.statuses
            .insert(1, Reference::new(1, "Open", Some("#FF0000".to_string())));
        refs
    }

    #[test]
    fn summarizes_pending_resolved_and_unattended() {
        let requests = vec![
            request(fixture::service_request::entity_builder().id(1)),
            request(fixture::service_request::entity_builder().id(2).assignee_id(9)),
            request(
                fixture::service_request::entity_builder()
                    .id(3)
                    .resolved_after_hours(2)
                    .call_seconds(60),
            ),
            request(
                fixture::service_request::entity_builder()
                    .id(4)
                    .resolved_after_hours(4)
                    .call_seconds(120),
            ),
        ];

        let summary = Summary::from_requests(&requests);

        assert_eq!(summary.total, 4);
        assert_eq!(summary.pending, 2);
        assert_eq!(summary.resolved, 2);
        assert_eq!(summary.unattended, 1);
        assert_eq!(summary.average_ttr_seconds, Some(3 * 3600));
        assert_eq!(summary.average_call_duration_seconds, Some(90));
    }

    #[test]
    fn empty_summary_has_no_averages() {
        let summary = Summary::from_requests(&Vec::<ServiceRequest>::new());

        assert_eq!(summary.total, 0);
        assert_eq!(summary.average_ttr_seconds, None);
    }

    #[test]
    fn breaks_down_by_service_largest_first() {
        let requests = vec![
            request(fixture::service_request::entity_builder().id(1).service_id(2)),
            request(fixture::service_request::entity_builder().id(2).service_id(1)),
            request(
                fixture::service_request::entity_builder()
                    .id(3)
                    .service_id(1)
                    .resolved_after_hours(1),
            ),
        ];

        let overview = overview(&requests, &refs());
        let services = &overview.services.items;

        assert_eq!(services.len(), 2);
        assert_eq!(services[0].name, "Water Leakage");
        assert_eq!(services[0].count, 2);
        assert_eq!(services[0].resolved, 1);
        assert_eq!(services[0].color.as_deref(), Some("#0000FF"));
        assert_eq!(services[1].name, "Billing");
    }

    #[test]
    fn missing_values_fall_into_unspecified() {
        let requests = vec![
            request(fixture::service_request::entity_builder().id(1)),
            request(fixture::service_request::entity_builder().id(2).workspace("Front Desk")),
        ];

        let overview = overview(&requests, &refs());

        let names: Vec<&str> = overview
            .workspaces
            .items
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(names, vec!["Front Desk", UNSPECIFIED]);
        assert_eq!(overview.jurisdictions.items[0].name, UNSPECIFIED);
        assert_eq!(overview.methods.items[0].name, "call");
    }

    #[test]
    fn counts_standings_per_combination() {
        let requests = vec![
            request(fixture::service_request::entity_builder().id(1).service_id(2)),
            request(fixture::service_request::entity_builder().id(2)),
            request(fixture::service_request::entity_builder().id(3)),
        ];

        let standings = standings(&requests, &refs());

        assert_eq!(standings.len(), 2);
        assert_eq!(standings[0].count, 2);
        assert_eq!(
            standings[0].service.as_ref().map(|s| s.name.as_str()),
            Some("Water Leakage")
        );
        assert_eq!(standings[0].clone().into_dto().color.as_deref(), Some("#FF0000"));
    }
}
