//! Activity group model

use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, Set};
use serde::Serialize;
use web::FrameworkError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "activity_groups")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub email: Option<String>,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
    pub deleted_at: Option<chrono::NaiveDateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::todo_items::Entity")]
    TodoItems,
}

impl Related<super::todo_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TodoItems.def()
    }
}

/// Fields accepted when creating a group
#[derive(Debug, Clone)]
pub struct NewActivityGroup {
    pub title: String,
    pub email: Option<String>,
}

/// Partial update; `None` leaves the column untouched
#[derive(Debug, Clone, Default)]
pub struct ActivityGroupChanges {
    pub title: Option<String>,
    pub email: Option<String>,
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
    /// Every live group, ordered by id
    pub async fn all_active<C>(db: &C) -> Result<Vec<Self>, FrameworkError>
    where
        C: ConnectionTrait,
    {
        let groups = Entity::find()
            .filter(Column::DeletedAt.is_null())
            .order_by_asc(Column::Id)
            .all(db)
            .await?;
        Ok(groups)
    }

    /// A live group, or `Activity with ID {id} Not Found`
    pub async fn find_active<C>(db: &C, id: i32) -> Result<Self, FrameworkError>
    where
        C: ConnectionTrait,
    {
        Entity::find_by_id(id)
            .filter(Column::DeletedAt.is_null())
            .one(db)
            .await?
            .ok_or_else(|| FrameworkError::not_found("Activity", id))
    }
}

// ============================================================================
// WRITE OPERATIONS
// ============================================================================

impl Model {
    pub async fn create<C>(db: &C, new: NewActivityGroup) -> Result<Self, FrameworkError>
    where
        C: ConnectionTrait,
    {
        let group = ActiveModel {
            title: Set(new.title),
            email: Set(new.email),
            deleted_at: Set(None),
            ..Default::default()
        };
        Ok(group.insert(db).await?)
    }

    /// Apply the supplied fields and refresh `updated_at`
    pub async fn apply<C>(
        self,
        db: &C,
        changes: ActivityGroupChanges,
    ) -> Result<Self, FrameworkError>
    where
        C: ConnectionTrait,
    {
        let mut group: ActiveModel = self.into();
        if let Some(title) = changes.title {
            group.title = Set(title);
        }
        if let Some(email) = changes.email {
            group.email = Set(Some(email));
        }
        Ok(group.update(db).await?)
    }

    /// Mark the group deleted; its todo items are left as they are
    pub async fn soft_delete<C>(self, db: &C) -> Result<(), FrameworkError>
    where
        C: ConnectionTrait,
    {
        let mut group: ActiveModel = self.into();
        group.deleted_at = Set(Some(Utc::now().naive_utc()));
        group.update(db).await?;
        Ok(())
    }
}
