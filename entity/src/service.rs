use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "service")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub jurisdiction_id: Option<i32>,
    pub group_id: i32,
    /// Priority assigned to new requests of this service.
    pub priority_id: Option<i32>,
    #[sea_orm(unique)]
    pub code: String,
    #[sea_orm(unique)]
    pub name: String,
    pub description: Option<String>,
    pub color: String,
    pub is_external: bool,
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
        on_delete = "Restrict"
    )]
    ServiceGroup,
    #[sea_orm(
        belongs_to = "super::priority::Entity",
        from = "Column::PriorityId",
        to = "super::priority::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Priority,
}

impl Related<super::jurisdiction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Jurisdiction.def()
    }
}

impl Related<super::service_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ServiceGroup.def()
    }
}

impl Related<super::priority::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Priority.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
