//! Account reads, seeds, and the balance-adjust primitive.

use sea_orm::{
    ActiveValue, ConnectionTrait, QueryFilter, QueryOrder, Statement, prelude::*,
};

use crate::{Amount, EngineError, ResultEngine, accounts};

use super::Engine;

/// Atomically add a signed delta (in cents) to one account's balance.
///
/// This is the sole mutation path for balances. It is a single UPDATE so the
/// read-modify-write happens inside the storage engine and concurrent
/// adjustments to the same account serialize without lost updates. A missing
/// row affects zero rows and is not an error; a NULL balance counts as zero.
pub(crate) async fn adjust_balance<C: ConnectionTrait>(
    conn: &C,
    account_id: i32,
    delta: Amount,
) -> ResultEngine<()> {
    let result = conn
        .execute(Statement::from_sql_and_values(
            conn.get_database_backend(),
            "UPDATE accounts SET balance = COALESCE(balance, 0) + ? WHERE id = ?",
            [delta.cents().into(), account_id.into()],
        ))
        .await?;
    tracing::debug!(
        account_id,
        delta = delta.cents(),
        rows = result.rows_affected(),
        "adjusted balance"
    );
    Ok(())
}

/// The lowest-id account of a type, if any. Used by the income and default
/// rules to pick the posting target.
pub(crate) async fn first_account_of_type<C: ConnectionTrait>(
    conn: &C,
    account_type_id: Option<i32>,
) -> ResultEngine<Option<accounts::Model>> {
    let Some(account_type_id) = account_type_id else {
        return Ok(None);
    };
    let account = accounts::Entity::find()
        .filter(accounts::Column::AccountTypeId.eq(account_type_id))
        .order_by_asc(accounts::Column::Id)
        .one(conn)
        .await?;
    Ok(account)
}

impl Engine {
    /// Fetch one account by id.
    pub async fn account(&self, account_id: i32) -> ResultEngine<accounts::Model> {
        accounts::Entity::find_by_id(account_id)
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound(account_id.to_string()))
    }

    /// Create an account type and return its id.
    pub async fn create_account_type(&self, name: &str) -> ResultEngine<i32> {
        let model = crate::account_types::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(name.to_string()),
        }
        .insert(&self.database)
        .await?;
        Ok(model.id)
    }

    /// Create an account and return it.
    ///
    /// `opening_balance` of `None` leaves the balance column NULL, which the
    /// adjust primitive reads as zero.
    pub async fn create_account(
        &self,
        name: &str,
        account_type_id: i32,
        opening_balance: Option<Amount>,
    ) -> ResultEngine<accounts::Model> {
        let model = accounts::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(name.to_string()),
            balance: ActiveValue::Set(opening_balance.map(Amount::cents)),
            account_type_id: ActiveValue::Set(account_type_id),
            due_date: ActiveValue::Set(None),
            avoid_interest_date: ActiveValue::Set(None),
            monthly_due_date_day: ActiveValue::Set(None),
        }
        .insert(&self.database)
        .await?;
        Ok(model)
    }
}
