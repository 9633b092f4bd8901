use crate::core::balance::BalanceConfig;

/// Collaborators a resolver consults for one turn.
///
/// Borrowed from the session for the duration of a single resolver call.
#[derive(Debug)]
pub struct TurnContext<'a, R, L> {
    pub rules: &'a R,
    pub loot: &'a L,
    pub balance: &'a BalanceConfig,
}

impl<'a, R, L> TurnContext<'a, R, L> {
    pub fn new(rules: &'a R, loot: &'a L, balance: &'a BalanceConfig) -> Self {
        Self {
            rules,
            loot,
            balance,
        }
    }
}
