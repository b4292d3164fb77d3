use sea_orm::DatabaseConnection;

use crate::{ResultEngine, RuleConfig};

mod accounts;
mod postings;

/// Run a block inside a DB transaction, committing on success and rolling back on error.
macro_rules! with_tx {
    ($self:expr, |$tx:ident| $body:expr) => {{
        let $tx = $self.database.begin().await?;
        let result = $body;
        match result {
            Ok(value) => {
                $tx.commit().await?;
                Ok(value)
            }
            Err(err) => Err(err),
        }
    }};
}

pub(crate) use with_tx;

/// The balance-posting engine.
///
/// Holds the database connection and the rule configuration used when a
/// caller does not supply one. Ops are split across submodules: account
/// reads and the adjust primitive in `accounts`, transaction recording and
/// posting in `postings`.
#[derive(Debug)]
pub struct Engine {
    database: DatabaseConnection,
    rules: RuleConfig,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// The rule configuration this engine posts with.
    pub fn rules(&self) -> &RuleConfig {
        &self.rules
    }
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    database: DatabaseConnection,
    rules: Option<RuleConfig>,
}

impl EngineBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    /// Override the rule configuration (defaults to [`RuleConfig::default`]).
    pub fn rules(mut self, rules: RuleConfig) -> EngineBuilder {
        self.rules = Some(rules);
        self
    }

    /// Construct `Engine`
    pub async fn build(self) -> ResultEngine<Engine> {
        Ok(Engine {
            database: self.database,
            rules: self.rules.unwrap_or_default(),
        })
    }
}
