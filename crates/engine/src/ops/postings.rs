//! Recording transactions and posting their balance effects.

use sea_orm::{DatabaseTransaction, TransactionTrait, prelude::*};

use crate::{
    Amount, NewTransaction, PostingRule, ResultEngine, RuleConfig, rules, transactions,
};

use super::{
    Engine,
    accounts::{adjust_balance, first_account_of_type},
    with_tx,
};

/// One signed balance adjustment. A `None` account id means the target could
/// not be resolved (unset designated account, no account of the checking
/// type) and the adjustment is silently skipped.
#[derive(Clone, Copy, Debug)]
struct Adjustment {
    account_id: Option<i32>,
    delta: Amount,
}

impl Engine {
    /// Record a new transaction: insert the row and apply its balance
    /// effects in one unit of work.
    ///
    /// This is the blessed call path. The insert and every adjustment commit
    /// together or not at all; a storage failure anywhere rolls back the
    /// whole operation, including the transaction row itself.
    pub async fn record_transaction(
        &self,
        new: &NewTransaction,
    ) -> ResultEngine<transactions::Model> {
        with_tx!(self, |db_tx| {
            let model = transactions::ActiveModel::from(new).insert(&db_tx).await?;
            self.apply_for_new_transaction(&db_tx, &model).await?;
            Ok(model)
        })
    }

    /// Apply balance effects for an already-persisted transaction, inside a
    /// caller-owned database transaction.
    ///
    /// **Not idempotent**: calling this twice for the same row double-applies
    /// the deltas. The caller contract is exactly once, at creation time,
    /// never on update or replay. Prefer [`Engine::record_transaction`],
    /// which owns the unit of work.
    pub async fn apply_for_new_transaction(
        &self,
        db_tx: &DatabaseTransaction,
        tx: &transactions::Model,
    ) -> ResultEngine<()> {
        self.apply_with_rules(db_tx, &self.rules, tx).await
    }

    /// Same as [`Engine::apply_for_new_transaction`] with an explicit rule
    /// configuration instead of the engine's default.
    pub async fn apply_with_rules(
        &self,
        db_tx: &DatabaseTransaction,
        rules_cfg: &RuleConfig,
        tx: &transactions::Model,
    ) -> ResultEngine<()> {
        let amount = tx.amount();
        let rule = rules::resolve(rules_cfg, tx.account_type_id, tx.account_id, amount);
        tracing::debug!(transaction_id = tx.id, ?rule, "resolved posting rule");

        let mut applied = 0u32;
        for adjustment in materialize(db_tx, rules_cfg, rule, amount).await? {
            let Some(account_id) = adjustment.account_id else {
                continue;
            };
            adjust_balance(db_tx, account_id, adjustment.delta).await?;
            applied += 1;
        }

        tracing::info!(transaction_id = tx.id, ?rule, applied, "posted transaction");
        Ok(())
    }
}

/// Turn a resolved rule into its concrete adjustments, resolving the
/// first-of-checking-type target inside the same database transaction.
async fn materialize(
    db_tx: &DatabaseTransaction,
    rules_cfg: &RuleConfig,
    rule: PostingRule,
    amount: Amount,
) -> ResultEngine<Vec<Adjustment>> {
    let adjustments = match rule {
        PostingRule::ZeroAmount
        | PostingRule::Savings
        | PostingRule::TransferUnrouted
        | PostingRule::CreditCardUnrouted => Vec::new(),
        PostingRule::Override { account_id } => vec![Adjustment {
            account_id: Some(account_id),
            delta: amount,
        }],
        PostingRule::CreditCard { card_account_id } => vec![
            Adjustment {
                account_id: Some(card_account_id),
                delta: -amount.abs(),
            },
            Adjustment {
                account_id: rules_cfg.designated.checking,
                delta: amount,
            },
        ],
        PostingRule::TransferIntoSavings => vec![
            Adjustment {
                account_id: rules_cfg.designated.savings,
                delta: amount.abs(),
            },
            Adjustment {
                account_id: rules_cfg.designated.checking,
                delta: amount,
            },
        ],
        PostingRule::TransferIntoChecking => vec![
            Adjustment {
                account_id: rules_cfg.designated.savings,
                delta: -amount.abs(),
            },
            Adjustment {
                account_id: rules_cfg.designated.checking,
                delta: amount,
            },
        ],
        PostingRule::Income | PostingRule::Default => {
            let target = first_account_of_type(db_tx, rules_cfg.check_type_id).await?;
            vec![Adjustment {
                account_id: target.map(|account| account.id),
                delta: amount,
            }]
        }
    };
    Ok(adjustments)
}
