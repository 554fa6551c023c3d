use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::reference::{unique_ids, ReferenceRepository},
    model::{
        comment::{Comment, CreateCommentParam},
        page::{PageParam, Paginated},
    },
};

pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateCommentParam) -> Result<Comment, DbErr> {
        let entity = entity::comment::ActiveModel {
            service_request_id: ActiveValue::Set(params.service_request_id),
            commentator_id: ActiveValue::Set(params.commentator_id),
            content: ActiveValue::Set(params.content),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let mut comments = self.with_commentators(vec![entity]).await?;

        comments.pop().ok_or(DbErr::RecordNotFound(
            "Comment not found after creation".to_string(),
        ))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Comment>, DbErr> {
        let Some(entity) = entity::prelude::Comment::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(self.with_commentators(vec![entity]).await?.pop())
    }

    /// Gets paginated comments of a service request, oldest first
    pub async fn get_paginated_by_request(
        &self,
        service_request_id: i32,
        param: &PageParam,
    ) -> Result<Paginated<Comment>, DbErr> {
        let mut query = entity::prelude::Comment::find()
            .filter(entity::comment::Column::ServiceRequestId.eq(service_request_id));
        if let Some(q) = &param.q {
            query = query.filter(entity::comment::Column::Content.contains(q));
        }

        let paginator = query
            .order_by_asc(entity::comment::Column::CreatedAt)
            .order_by_asc(entity::comment::Column::Id)
            .paginate(self.db, param.limit);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(param.index()).await?;
        let comments = self.with_commentators(entities).await?;

        Ok(Paginated::new(comments, total, param))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Comment::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    async fn with_commentators(
        &self,
        entities: Vec<entity::comment::Model>,
    ) -> Result<Vec<Comment>, DbErr> {
        let parties = ReferenceRepository::new(self.db)
            .parties(unique_ids(entities.iter().map(|c| c.commentator_id)))
            .await?;

        Ok(entities
            .into_iter()
            .map(|entity| {
                let commentator = entity
                    .commentator_id
                    .and_then(|id| parties.get(&id).cloned());
                Comment::from_entity(entity, commentator)
            })
            .collect())
    }
}
