use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "service_request")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub code: String,
    pub jurisdiction_id: Option<i32>,
    pub group_id: Option<i32>,
    pub service_id: i32,
    pub priority_id: i32,
    pub status_id: i32,
    pub reporter_name: String,
    pub reporter_phone: String,
    pub reporter_email: Option<String>,
    pub reporter_account: Option<String>,
    pub description: String,
    pub address: Option<String>,
    /// Intake channel, one of `call`, `sms`, `email`, `website`, `mobile`, `walk_in`.
    pub method: String,
    pub workspace: Option<String>,
    pub operator_id: Option<i32>,
    pub assignee_id: Option<i32>,
    pub call_started_at: Option<DateTimeUtc>,
    pub call_ended_at: Option<DateTimeUtc>,
    pub resolved_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::jurisdiction::Entity",
        from = "Column::JurisdictionId",
        to = "super::jurisdiction::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Jurisdiction,
    #[sea_orm(
        belongs_to = "super::service_group::Entity",
        from = "Column::GroupId",
        to = "super::service_group::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    ServiceGroup,
    #[sea_orm(
        belongs_to = "super::service::Entity",
        from = "Column::ServiceId",
        to = "super::service::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Service,
    #[sea_orm(
        belongs_to = "super::priority::Entity",
        from = "Column::PriorityId",
        to = "super::priority::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Priority,
    #[sea_orm(
        belongs_to = "super::status::Entity",
        from = "Column::StatusId",
        to = "super::status::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Status,
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
}

impl Related<super::service::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Service.def()
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
