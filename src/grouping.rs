//! Grouping of transactions by originating submission.

use crate::schema::Transaction;

/// All transactions that entered through one submission, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionGroup {
    /// Submission key; `None` collects every unkeyed transaction.
    pub id: Option<u64>,
    pub transactions: Vec<Transaction>,
}

/// Groups `transactions` by submission key.
///
/// Groups appear in first-seen key order and keep their transactions in
/// input order, so downstream row numbering is stable for a given input
/// sequence. Unkeyed transactions share a single fallback group positioned
/// where the first of them appeared.
pub fn group_by_submission(transactions: &[Transaction]) -> Vec<SubmissionGroup> {
    let mut groups: Vec<SubmissionGroup> = Vec::new();

    for tx in transactions {
        match groups.iter_mut().find(|g| g.id == tx.submission_id) {
            Some(group) => group.transactions.push(*tx),
            None => groups.push(SubmissionGroup {
                id: tx.submission_id,
                transactions: vec![*tx],
            }),
        }
    }

    groups
}
