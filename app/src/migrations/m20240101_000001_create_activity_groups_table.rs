use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ActivityGroups::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ActivityGroups::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ActivityGroups::Title).string().not_null())
                    .col(ColumnDef::new(ActivityGroups::Email).string().null())
                    .col(
                        ColumnDef::new(ActivityGroups::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(ActivityGroups::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(ActivityGroups::DeletedAt).timestamp().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_activity_groups_deleted_at")
                    .table(ActivityGroups::Table)
                    .col(ActivityGroups::DeletedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ActivityGroups::Table).to_owned())
            .await
    }
}

/// Table and column identifiers for activity_groups
#[derive(DeriveIden)]
enum ActivityGroups {
    Table,
    Id,
    Title,
    Email,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
