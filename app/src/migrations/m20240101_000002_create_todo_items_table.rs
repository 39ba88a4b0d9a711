use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TodoItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TodoItems::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TodoItems::ActivityGroupId).integer().not_null())
                    .col(ColumnDef::new(TodoItems::Title).string().not_null())
                    .col(
                        ColumnDef::new(TodoItems::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(TodoItems::Priority)
                            .string()
                            .not_null()
                            .default("very-high"),
                    )
                    .col(
                        ColumnDef::new(TodoItems::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(TodoItems::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(TodoItems::DeletedAt).timestamp().null())
                    .to_owned(),
            )
            .await?;

        // No foreign key: handlers check the group is live before inserting
        manager
            .create_index(
                Index::create()
                    .name("idx_todo_items_activity_group_id")
                    .table(TodoItems::Table)
                    .col(TodoItems::ActivityGroupId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_todo_items_deleted_at")
                    .table(TodoItems::Table)
                    .col(TodoItems::DeletedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TodoItems::Table).to_owned())
            .await
    }
}

/// Table and column identifiers for todo_items
#[derive(DeriveIden)]
enum TodoItems {
    Table,
    Id,
    ActivityGroupId,
    Title,
    IsActive,
    Priority,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
