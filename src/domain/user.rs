use serde::{Deserialize, Serialize};

use super::Amount;

/// Users are identified by a caller-assigned numeric id.
pub type UserId = u32;

/// A guest account. The id is the stable identity; the balance is the
/// only mutable attribute and is only ever debited through a successful
/// reservation or overwritten by an upsert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub balance: Amount,
}

impl User {
    pub fn new(id: UserId, balance: Amount) -> Self {
        Self { id, balance }
    }

    pub fn can_afford(&self, total: Amount) -> bool {
        self.balance >= total
    }
}
