//! Posting-rule configuration and resolution.
//!
//! [`resolve`] classifies a new transaction's `(type id, account id, amount)`
//! into exactly one [`PostingRule`]. It is a pure function over an explicit
//! [`RuleConfig`] value, so tests (and callers wanting a one-off
//! configuration) build their own config instead of reaching into process
//! state.
//!
//! The rules are evaluated in a fixed priority order, first match wins:
//! override, credit card, transfer, income, savings, default. A zero amount
//! short-circuits before any of them.

use std::collections::{BTreeSet, HashMap};

use crate::Amount;

/// Account-type id of transfers between the designated checking and savings
/// accounts. Unlike the configurable type ids this is a literal of the rule
/// table: the override rule explicitly refuses to match it.
pub const TRANSFER_TYPE_ID: i32 = 7;

/// The two accounts the transfer and credit-card settlement rules route
/// money through.
///
/// These used to be literal row ids inside the rule logic; they are now
/// resolved once from configuration and carried here. The defaults keep the
/// historical numbering (checking 15, savings 16), which only lines up with
/// stores that were seeded that way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DesignatedAccounts {
    pub checking: Option<i32>,
    pub savings: Option<i32>,
}

impl Default for DesignatedAccounts {
    fn default() -> Self {
        Self {
            checking: Some(15),
            savings: Some(16),
        }
    }
}

/// Which account-type ids are special, plus the override table.
///
/// A value of this type is plain data: the engine holds one as its default
/// and every posting call reads it without any global lookup. Unset type ids
/// make the corresponding rule unreachable; that is a supported degraded
/// mode, not an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleConfig {
    pub check_type_id: Option<i32>,
    pub savings_type_id: Option<i32>,
    pub credit_card_type_id: Option<i32>,
    pub income_type_id: Option<i32>,
    /// Per-type allow-list of accounts eligible for direct signed increment.
    pub overrides: HashMap<i32, BTreeSet<i32>>,
    pub designated: DesignatedAccounts,
}

impl Default for RuleConfig {
    /// Defaults matching the reference deployment. Note that income and
    /// check share a type id there, so the income rule and the default rule
    /// coincide; and the `{7: {16, 15}}` override entry is unreachable
    /// because the override rule skips the transfer type.
    fn default() -> Self {
        Self {
            check_type_id: Some(3),
            savings_type_id: Some(13),
            credit_card_type_id: Some(8),
            income_type_id: Some(3),
            overrides: HashMap::from([(TRANSFER_TYPE_ID, BTreeSet::from([16, 15]))]),
            designated: DesignatedAccounts::default(),
        }
    }
}

impl RuleConfig {
    fn override_matches(&self, type_id: i32, account_id: Option<i32>) -> bool {
        if type_id == TRANSFER_TYPE_ID {
            return false;
        }
        match (self.overrides.get(&type_id), account_id) {
            (Some(eligible), Some(account_id)) => eligible.contains(&account_id),
            _ => false,
        }
    }
}

/// The resolved outcome for one transaction.
///
/// Inert outcomes are distinct variants rather than an implicit fallthrough,
/// so callers and tests can assert on *why* nothing was posted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PostingRule {
    /// Zero-amount transaction; nothing is ever posted for it.
    ZeroAmount,
    /// Configured override: add the signed amount to this account directly.
    Override { account_id: i32 },
    /// Credit-card charge: subtract the magnitude from the card account, add
    /// the signed amount to the designated checking account.
    CreditCard { card_account_id: i32 },
    /// Credit-card type without a target account; classified but inert.
    CreditCardUnrouted,
    /// Transfer whose target is the designated savings account: savings gains
    /// the magnitude, checking gets the signed amount.
    TransferIntoSavings,
    /// Transfer whose target is the designated checking account: savings
    /// loses the magnitude, checking gets the signed amount.
    TransferIntoChecking,
    /// Transfer to any other account; classified but inert.
    TransferUnrouted,
    /// Income: add the signed amount to the first checking-type account.
    Income,
    /// Savings-type transaction; inert by design.
    Savings,
    /// Everything else: add the signed amount to the first checking-type
    /// account.
    Default,
}

/// Classify a transaction into its posting rule.
pub fn resolve(
    config: &RuleConfig,
    type_id: i32,
    account_id: Option<i32>,
    amount: Amount,
) -> PostingRule {
    if amount.is_zero() {
        return PostingRule::ZeroAmount;
    }

    if config.override_matches(type_id, account_id) {
        // Checked above: override_matches requires Some(account_id).
        if let Some(account_id) = account_id {
            return PostingRule::Override { account_id };
        }
    }

    if config.credit_card_type_id == Some(type_id) {
        return match account_id {
            Some(card_account_id) => PostingRule::CreditCard { card_account_id },
            None => PostingRule::CreditCardUnrouted,
        };
    }

    if type_id == TRANSFER_TYPE_ID {
        return if account_id.is_some() && account_id == config.designated.savings {
            PostingRule::TransferIntoSavings
        } else if account_id.is_some() && account_id == config.designated.checking {
            PostingRule::TransferIntoChecking
        } else {
            PostingRule::TransferUnrouted
        };
    }

    if config.income_type_id == Some(type_id) {
        return PostingRule::Income;
    }

    if config.savings_type_id == Some(type_id) {
        return PostingRule::Savings;
    }

    PostingRule::Default
}
