//! Todo item model

use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, Set};
use serde::Serialize;
use web::FrameworkError;

/// Priority given to items created without one
pub const DEFAULT_PRIORITY: &str = "very-high";

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "todo_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub activity_group_id: i32,
    pub title: String,
    pub is_active: bool,
    pub priority: String,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
    pub deleted_at: Option<chrono::NaiveDateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::activity_groups::Entity",
        from = "Column::ActivityGroupId",
        to = "super::activity_groups::Column::Id"
    )]
    ActivityGroup,
}

impl Related<super::activity_groups::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ActivityGroup.def()
    }
}

/// Fields accepted when creating an item; unset flags take their defaults
#[derive(Debug, Clone)]
pub struct NewTodoItem {
    pub activity_group_id: i32,
    pub title: String,
    pub is_active: Option<bool>,
    pub priority: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct TodoItemChanges {
    pub title: Option<String>,
    pub is_active: Option<bool>,
    pub priority: Option<String>,
}

// ============================================================================
// ENTITY CONFIGURATION
// ============================================================================

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let now = Utc::now().naive_utc();
        if insert {
            self.created_at = Set(now);
        }
        self.updated_at = Set(now);
        Ok(self)
    }
}

// ============================================================================
// READ OPERATIONS
// ============================================================================

impl Model {
    /// Live items ordered by id, optionally only those of one group
    pub async fn all_active<C>(
        db: &C,
        activity_group_id: Option<i32>,
    ) -> Result<Vec<Self>, FrameworkError>
    where
        C: ConnectionTrait,
    {
        let mut query = Entity::find().filter(Column::DeletedAt.is_null());
        if let Some(group_id) = activity_group_id {
            query = query.filter(Column::ActivityGroupId.eq(group_id));
        }
        Ok(query.order_by_asc(Column::Id).all(db).await?)
    }

    /// A live item, or `Todo with ID {id} Not Found`
    pub async fn find_active<C>(db: &C, id: i32) -> Result<Self, FrameworkError>
    where
        C: ConnectionTrait,
    {
        Entity::find_by_id(id)
            .filter(Column::DeletedAt.is_null())
            .one(db)
            .await?
            .ok_or_else(|| FrameworkError::not_found("Todo", id))
    }
}

// ============================================================================
// WRITE OPERATIONS
// ============================================================================

impl Model {
    pub async fn create<C>(db: &C, new: NewTodoItem) -> Result<Self, FrameworkError>
    where
        C: ConnectionTrait,
    {
        let item = ActiveModel {
            activity_group_id: Set(new.activity_group_id),
            title: Set(new.title),
            is_active: Set(new.is_active.unwrap_or(true)),
            priority: Set(new
                .priority
                .unwrap_or_else(|| DEFAULT_PRIORITY.to_string())),
            deleted_at: Set(None),
            ..Default::default()
        };
        Ok(item.insert(db).await?)
    }

    pub async fn apply<C>(self, db: &C, changes: TodoItemChanges) -> Result<Self, FrameworkError>
    where
        C: ConnectionTrait,
    {
        let mut item: ActiveModel = self.into();
        if let Some(title) = changes.title {
            item.title = Set(title);
        }
        if let Some(is_active) = changes.is_active {
            item.is_active = Set(is_active);
        }
        if let Some(priority) = changes.priority {
            item.priority = Set(priority);
        }
        Ok(item.update(db).await?)
    }

    pub async fn soft_delete<C>(self, db: &C) -> Result<(), FrameworkError>
    where
        C: ConnectionTrait,
    {
        let mut item: ActiveModel = self.into();
        item.deleted_at = Set(Some(Utc::now().naive_utc()));
        item.update(db).await?;
        Ok(())
    }
}
