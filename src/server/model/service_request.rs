//! Service request domain model.
//!
//! A service request is a citizen-reported issue logged by an operator. Related
//! records are kept as ids on [`ServiceRequest`] and resolved through a
//! [`References`] lookup when converting to a DTO, so a page of requests costs one
//! query per related table instead of one per row.

use std::{collections::HashMap, fmt, str::FromStr};

use chrono::{DateTime, Datelike, Utc};

use crate::{
    model::{
        api::ReferenceDto,
        service_request::{
            CreateServiceRequestDto, PaginatedServiceRequestsDto, ReporterDto, ServiceRequestDto,
            UpdateServiceRequestDto,
        },
    },
    server::{
        error::{internal::InternalError, AppError},
        model::page::Paginated,
    },
};

/// Compact view of a related record.
#[derive(Debug, Clone, PartialEq)]
pub struct Reference {
    pub id: i32,
    pub name: String,
    pub color: Option<String>,
}

impl Reference {
    pub fn new(id: i32, name: impl Into<String>, color: Option<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color,
        }
    }

    pub fn into_dto(self) -> ReferenceDto {
        ReferenceDto {
            id: self.id,
            name: self.name,
            color: self.color,
        }
    }
}

/// How the request reached the service desk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum ContactMethod {
    #[default]
    Call,
    Sms,
    Email,
    Website,
    Mobile,
    WalkIn,
}

impl ContactMethod {
    pub const ALL: [ContactMethod; 6] = [
        ContactMethod::Call,
        ContactMethod::Sms,
        ContactMethod::Email,
        ContactMethod::Website,
        ContactMethod::Mobile,
        ContactMethod::WalkIn,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactMethod::Call => "call",
            ContactMethod::Sms => "sms",
            ContactMethod::Email => "email",
            ContactMethod::Website => "website",
            ContactMethod::Mobile => "mobile",
            ContactMethod::WalkIn => "walk_in",
        }
    }

    /// Parses a method supplied by a client.
    pub fn parse_input(value: &str) -> Result<Self, AppError> {
        value.parse::<Self>().map_err(|_| {
            AppError::BadRequest(format!(
                "Unknown contact method '{}', expected one of: {}",
                value,
                Self::ALL
                    .iter()
                    .map(ContactMethod::as_str)
                    .collect::<Vec<_>>()
                    .join(", ")
            ))
        })
    }
}

impl fmt::Display for ContactMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactMethod {
    type Err = InternalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == normalized)
            .ok_or_else(|| InternalError::UnknownContactMethod(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reporter {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub account: Option<String>,
}

impl Reporter {
    pub fn from_dto(dto: ReporterDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            phone: dto.phone.trim().to_string(),
            email: dto.email.map(|e| e.trim().to_string()).filter(|e| !e.is_empty()),
            account: dto.account.map(|a| a.trim().to_string()).filter(|a| !a.is_empty()),
        }
    }

    pub fn into_dto(self) -> ReporterDto {
        ReporterDto {
            name: self.name,
            phone: self.phone,
            email: self.email,
            account: self.account,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceRequest {
    pub id: i32,
    pub code: String,
    pub jurisdiction_id: Option<i32>,
    pub group_id: Option<i32>,
    pub service_id: i32,
    pub priority_id: i32,
    pub status_id: i32,
    pub reporter: Reporter,
    pub description: String,
    pub address: Option<String>,
    pub method: ContactMethod,
    pub workspace: Option<String>,
    pub operator_id: Option<i32>,
    pub assignee_id: Option<i32>,
    pub call_started_at: Option<DateTime<Utc>>,
    pub call_ended_at: Option<DateTime<Utc>>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ServiceRequest {
    pub fn from_entity(entity: entity::service_request::Model) -> Result<Self, AppError> {
        let method = entity.method.parse::<ContactMethod>()?;

        Ok(Self {
            id: entity.id,
            code: entity.code,
            jurisdiction_id: entity.jurisdiction_id,
            group_id: entity.group_id,
            service_id: entity.service_id,
            priority_id: entity.priority_id,
            status_id: entity.status_id,
            reporter: Reporter {
                name: entity.reporter_name,
                phone: entity.reporter_phone,
                email: entity.reporter_email,
                account: entity.reporter_account,
            },
            description: entity.description,
            address: entity.address,
            method,
            workspace: entity.workspace,
            operator_id: entity.operator_id,
            assignee_id: entity.assignee_id,
            call_started_at: entity.call_started_at,
            call_ended_at: entity.call_ended_at,
            resolved_at: entity.resolved_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved_at.is_some()
    }

    /// Time to resolve in seconds.
    pub fn ttr_seconds(&self) -> Option<i64> {
        non_negative_seconds(Some(self.created_at), self.resolved_at)
    }

    pub fn call_duration_seconds(&self) -> Option<i64> {
        non_negative_seconds(self.call_started_at, self.call_ended_at)
    }

    pub fn into_dto(self, refs: &References) -> ServiceRequestDto {
        let ttr_seconds = self.ttr_seconds();
        let call_duration_seconds = self.call_duration_seconds();

        ServiceRequestDto {
            id: self.id,
            code: self.code,
            jurisdiction: References::lookup(&refs.jurisdictions, self.jurisdiction_id),
            group: References::lookup(&refs.groups, self.group_id),
            service: References::lookup(&refs.services, Some(self.service_id)),
            priority: References::lookup(&refs.priorities, Some(self.priority_id)),
            status: References::lookup(&refs.statuses, Some(self.status_id)),
            reporter: self.reporter.into_dto(),
            description: self.description,
            address: self.address,
            method: self.method.as_str().to_string(),
            workspace: self.workspace,
            operator: References::lookup(&refs.parties, self.operator_id),
            assignee: References::lookup(&refs.parties, self.assignee_id),
            call_started_at: self.call_started_at,
            call_ended_at: self.call_ended_at,
            resolved_at: self.resolved_at,
            ttr_seconds,
            call_duration_seconds,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

fn non_negative_seconds(from: Option<DateTime<Utc>>, to: Option<DateTime<Utc>>) -> Option<i64> {
    match (from, to) {
        (Some(from), Some(to)) if to >= from => Some((to - from).num_seconds()),
        _ => None,
    }
}

/// Related records of a batch of service requests, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct References {
    pub jurisdictions: HashMap<i32, Reference>,
    pub groups: HashMap<i32, Reference>,
    pub services: HashMap<i32, Reference>,
    pub priorities: HashMap<i32, Reference>,
    pub statuses: HashMap<i32, Reference>,
    pub parties: HashMap<i32, Reference>,
}

impl References {
    fn lookup(map: &HashMap<i32, Reference>, id: Option<i32>) -> Option<ReferenceDto> {
        id.and_then(|id| map.get(&id))
            .cloned()
            .map(Reference::into_dto)
    }
}

impl Paginated<ServiceRequest> {
    pub fn into_dto(self, refs: &References) -> PaginatedServiceRequestsDto {
        let pages = self.pages();
        PaginatedServiceRequestsDto {
            servicerequests: self.items.into_iter().map(|r| r.into_dto(refs)).collect(),
            count: self.total,
            pages,
            page: self.page,
            limit: self.limit,
        }
    }
}

/// Builds a request code: service code, two digit year, five digit sequence.
///
/// `generate_code("WTR", 2026, 7)` yields `WTR2600007`.
pub fn generate_code(service_code: &str, year: i32, sequence: u64) -> String {
    format!(
        "{}{:02}{:05}",
        service_code.trim().to_uppercase(),
        year.rem_euclid(100),
        sequence
    )
}

/// Prefix shared by every code of a service within the year of `at`.
pub fn code_prefix(service_code: &str, at: DateTime<Utc>) -> String {
    format!(
        "{}{:02}",
        service_code.trim().to_uppercase(),
        at.year().rem_euclid(100)
    )
}

/// Fully resolved row for a new service request.
#[derive(Debug, Clone)]
pub struct CreateServiceRequestParam {
    pub code: String,
    pub jurisdiction_id: Option<i32>,
    pub group_id: Option<i32>,
    pub service_id: i32,
    pub priority_id: i32,
    pub status_id: i32,
    pub reporter: Reporter,
    pub description: String,
    pub address: Option<String>,
    pub method: ContactMethod,
    pub workspace: Option<String>,
    pub operator_id: Option<i32>,
    pub assignee_id: Option<i32>,
    pub call_started_at: Option<DateTime<Utc>>,
    pub call_ended_at: Option<DateTime<Utc>>,
}

/// Client input for a new request before defaults are resolved.
#[derive(Debug, Clone)]
pub struct NewServiceRequest {
    pub service_id: i32,
    pub jurisdiction_id: Option<i32>,
    pub priority_id: Option<i32>,
    pub status_id: Option<i32>,
    pub reporter: Reporter,
    pub description: String,
    pub address: Option<String>,
    pub method: ContactMethod,
    pub workspace: Option<String>,
    pub assignee_id: Option<i32>,
    pub call_started_at: Option<DateTime<Utc>>,
    pub call_ended_at: Option<DateTime<Utc>>,
}

impl NewServiceRequest {
    pub fn from_dto(dto: CreateServiceRequestDto) -> Result<Self, AppError> {
        let method = match dto.method.as_deref() {
            Some(m) => ContactMethod::parse_input(m)?,
            None => ContactMethod::default(),
        };

        Ok(Self {
            service_id: dto.service_id,
            jurisdiction_id: dto.jurisdiction_id,
            priority_id: dto.priority_id,
            status_id: dto.status_id,
            reporter: Reporter::from_dto(dto.reporter),
            description: dto.description.trim().to_string(),
            address: dto.address,
            method,
            workspace: dto.workspace,
            assignee_id: dto.assignee_id,
            call_started_at: dto.call_started_at,
            call_ended_at: dto.call_ended_at,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateServiceRequestParam {
    pub id: i32,
    pub service_id: Option<i32>,
    /// Follows the service when it changes.
    pub group_id: Option<i32>,
    pub jurisdiction_id: Option<i32>,
    pub priority_id: Option<i32>,
    pub status_id: Option<i32>,
    pub reporter: Option<Reporter>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub method: Option<ContactMethod>,
    pub workspace: Option<String>,
    pub assignee_id: Option<i32>,
    pub call_started_at: Option<DateTime<Utc>>,
    pub call_ended_at: Option<DateTime<Utc>>,
    pub resolved: Option<bool>,
}

impl UpdateServiceRequestParam {
    pub fn from_dto(id: i32, dto: UpdateServiceRequestDto) -> Result<Self, AppError> {
        let method = dto
            .method
            .as_deref()
            .map(ContactMethod::parse_input)
            .transpose()?;

        Ok(Self {
            id,
            service_id: dto.service_id,
            group_id: None,
            jurisdiction_id: dto.jurisdiction_id,
            priority_id: dto.priority_id,
            status_id: dto.status_id,
            reporter: dto.reporter.map(Reporter::from_dto),
            description: dto.description.map(|d| d.trim().to_string()),
            address: dto.address,
            method,
            workspace: dto.workspace,
            assignee_id: dto.assignee_id,
            call_started_at: dto.call_started_at,
            call_ended_at: dto.call_ended_at,
            resolved: dto.resolved,
        })
    }
}
