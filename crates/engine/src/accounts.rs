//! `accounts` entity.
//!
//! An account is a named balance-bearing entity classified by an account
//! type. `balance` is the *authoritative* running total in cents, updated in
//! place by the posting engine; it is nullable in storage and a missing value
//! reads as zero. There is no leg ledger behind it, so balances cannot be
//! replayed from transactions alone.

use sea_orm::entity::prelude::*;

use crate::Amount;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// Running balance in cents. `None` is read as zero by the adjust
    /// primitive (`COALESCE(balance, 0)`).
    pub balance: Option<i64>,
    pub account_type_id: i32,
    pub due_date: Option<Date>,
    pub avoid_interest_date: Option<Date>,
    /// Day of month (1-31) a payment is due, for recurring accounts.
    pub monthly_due_date_day: Option<i16>,
}

impl Model {
    /// Current balance, treating an unset column as zero.
    #[must_use]
    pub fn balance(&self) -> Amount {
        Amount::new(self.balance.unwrap_or(0))
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::account_types::Entity",
        from = "Column::AccountTypeId",
        to = "super::account_types::Column::Id"
    )]
    AccountTypes,
    #[sea_orm(has_many = "super::transactions::Entity")]
    Transactions,
}

impl Related<super::account_types::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AccountTypes.def()
    }
}

impl Related<super::transactions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transactions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
