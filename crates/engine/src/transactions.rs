//! `transactions` entity and the new-transaction event.
//!
//! A transaction is immutable as far as the posting engine is concerned:
//! balances are touched exactly once, when the record is created. Ordinary
//! field edits happen in the surrounding CRUD layer and never re-trigger
//! posting.

use chrono::NaiveDate;
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};

use crate::Amount;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub description: String,
    /// Signed amount in cents; negative means a debit from checking.
    pub amount: i64,
    pub date: Date,
    pub account_type_id: i32,
    pub account_id: Option<i32>,
}

impl Model {
    /// Signed amount as a typed value.
    #[must_use]
    pub fn amount(&self) -> Amount {
        Amount::new(self.amount)
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
    #[sea_orm(
        belongs_to = "super::accounts::Entity",
        from = "Column::AccountId",
        to = "super::accounts::Column::Id"
    )]
    Accounts,
}

impl Related<super::account_types::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AccountTypes.def()
    }
}

impl Related<super::accounts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Accounts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// A well-formed new-transaction event, as produced by the surrounding
/// data-entry layer (which owns validation, search, import and the rest).
///
/// Recording one of these is the only operation that moves balances.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub description: String,
    pub amount: Amount,
    pub date: NaiveDate,
    pub account_type_id: i32,
    #[serde(default)]
    pub account_id: Option<i32>,
}

impl From<&NewTransaction> for ActiveModel {
    fn from(new: &NewTransaction) -> Self {
        Self {
            id: ActiveValue::NotSet,
            description: ActiveValue::Set(new.description.clone()),
            amount: ActiveValue::Set(new.amount.cents()),
            date: ActiveValue::Set(new.date),
            account_type_id: ActiveValue::Set(new.account_type_id),
            account_id: ActiveValue::Set(new.account_id),
        }
    }
}
