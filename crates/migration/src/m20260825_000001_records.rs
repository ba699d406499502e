//! Initial schema: the single `records` table.
//!
//! One row per income/expense transaction. The integer primary key is
//! auto-incremented and never reused after deletion, and the `(date, id)`
//! index backs the deterministic listing order.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum Records {
    Table,
    Id,
    Description,
    AmountMinor,
    Category,
    Date,
    Kind,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Records::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Records::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Records::Description).string().not_null())
                    .col(
                        ColumnDef::new(Records::AmountMinor)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Records::Category)
                            .string()
                            .not_null()
                            .default("Other"),
                    )
                    .col(ColumnDef::new(Records::Date).date().not_null())
                    .col(ColumnDef::new(Records::Kind).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-records-date-id")
                    .table(Records::Table)
                    .col(Records::Date)
                    .col(Records::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Records::Table).to_owned())
            .await?;
        Ok(())
    }
}
