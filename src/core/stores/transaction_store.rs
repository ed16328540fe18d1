//! In-memory store for income and expense transactions.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::core::errors::{Result, StoreError};
use crate::core::ids::IdGenerator;
use crate::core::time::Clock;
use crate::domain::transaction::{Transaction, TransactionKind};
use crate::domain::EntityId;

/// Owns the transaction collection and derives running totals from it.
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    clock: Arc<dyn Clock>,
    ids: Box<dyn IdGenerator>,
    revision: u64,
}

impl TransactionStore {
    pub fn new(clock: Arc<dyn Clock>, ids: Box<dyn IdGenerator>) -> Self {
        Self {
            transactions: Vec::new(),
            clock,
            ids,
            revision: 0,
        }
    }

    /// Records a transaction dated at the current instant.
    ///
    /// Rejects non-finite or non-positive amounts and blank categories; the
    /// collection is untouched on error.
    pub fn add(
        &mut self,
        kind: TransactionKind,
        amount: f64,
        category: &str,
        description: Option<String>,
    ) -> Result<EntityId> {
        if !amount.is_finite() || amount <= 0.0 {
            warn!(amount, "rejected transaction with non-positive amount");
            return Err(StoreError::Validation(
                "transaction amount must be a positive number".into(),
            ));
        }
        if category.trim().is_empty() {
            return Err(StoreError::Validation(
                "transaction category must not be empty".into(),
            ));
        }
        let id = self.ids.next_id();
        self.transactions.push(Transaction {
            id: id.clone(),
            kind,
            amount,
            category: category.to_string(),
            description,
            date: self.clock.now(),
        });
        self.revision += 1;
        debug!(%id, %kind, amount, "transaction added");
        Ok(id)
    }

    /// Removes the matching transaction permanently.
    pub fn delete(&mut self, id: &EntityId) -> Result<()> {
        let before = self.transactions.len();
        self.transactions.retain(|txn| txn.id != *id);
        if self.transactions.len() == before {
            return Err(StoreError::NotFound(id.clone()));
        }
        self.revision += 1;
        Ok(())
    }

    /// Sum of all income amounts; 0 when no income is recorded.
    pub fn total_income(&self) -> f64 {
        self.sum_of(TransactionKind::Income)
    }

    /// Sum of all expense amounts; 0 when no expense is recorded.
    pub fn total_expenses(&self) -> f64 {
        self.sum_of(TransactionKind::Expense)
    }

    /// Income minus expenses. May be negative.
    pub fn balance(&self) -> f64 {
        self.total_income() - self.total_expenses()
    }

    /// All transactions ordered most recent first.
    ///
    /// The sort is stable, so same-instant transactions keep insertion order.
    pub fn sorted_by_date_descending(&self) -> Vec<&Transaction> {
        let mut items: Vec<&Transaction> = self.transactions.iter().collect();
        items.sort_by(|a, b| b.date.cmp(&a.date));
        items
    }

    /// Read-only view of the current collection in insertion order.
    pub fn snapshot(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn get(&self, id: &EntityId) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == *id)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Monotonic counter bumped on every successful mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn sum_of(&self, kind: TransactionKind) -> f64 {
        self.transactions
            .iter()
            .filter(|txn| txn.kind == kind)
            .map(|txn| txn.amount)
            .sum()
    }
}
