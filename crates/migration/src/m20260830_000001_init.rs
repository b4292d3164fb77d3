//! Initial schema migration - creates all tables from scratch.
//!
//! - `account_types`: classification tags driving posting rules
//! - `accounts`: balance-bearing entities (balance is a denormalized running
//!   total in cents, nullable; NULL reads as zero)
//! - `transactions`: recorded financial events

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum AccountTypes {
    Table,
    Id,
    Name,
}

#[derive(Iden)]
enum Accounts {
    Table,
    Id,
    Name,
    Balance,
    AccountTypeId,
    DueDate,
    AvoidInterestDate,
    MonthlyDueDateDay,
}

#[derive(Iden)]
enum Transactions {
    Table,
    Id,
    Description,
    Amount,
    Date,
    AccountTypeId,
    AccountId,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AccountTypes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AccountTypes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AccountTypes::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Accounts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Accounts::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Accounts::Name).string().not_null())
                    .col(ColumnDef::new(Accounts::Balance).big_integer())
                    .col(ColumnDef::new(Accounts::AccountTypeId).integer().not_null())
                    .col(ColumnDef::new(Accounts::DueDate).date())
                    .col(ColumnDef::new(Accounts::AvoidInterestDate).date())
                    .col(ColumnDef::new(Accounts::MonthlyDueDateDay).small_integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-accounts-account_type_id")
                            .from(Accounts::Table, Accounts::AccountTypeId)
                            .to(AccountTypes::Table, AccountTypes::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Backs the lowest-id-of-type lookup used by the income/default rules.
        manager
            .create_index(
                Index::create()
                    .name("idx-accounts-account_type_id")
                    .table(Accounts::Table)
                    .col(Accounts::AccountTypeId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Transactions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Transactions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Transactions::Description).string().not_null())
                    .col(ColumnDef::new(Transactions::Amount).big_integer().not_null())
                    .col(ColumnDef::new(Transactions::Date).date().not_null())
                    .col(
                        ColumnDef::new(Transactions::AccountTypeId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Transactions::AccountId).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-transactions-account_type_id")
                            .from(Transactions::Table, Transactions::AccountTypeId)
                            .to(AccountTypes::Table, AccountTypes::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-transactions-account_id")
                            .from(Transactions::Table, Transactions::AccountId)
                            .to(Accounts::Table, Accounts::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-transactions-account_id")
                    .table(Transactions::Table)
                    .col(Transactions::AccountId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Transactions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Accounts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AccountTypes::Table).to_owned())
            .await?;
        Ok(())
    }
}
