//! The fixed query suite.
//!
//! Every backend runs the same operations in the same order against the same
//! seeded schema: customers with orders, addresses and products.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// One logical query in the suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// All customers.
    FindMany,
    /// Active customers, newest first, first page of 10.
    FindManyFilterPaginateOrder,
    /// All customers with their orders.
    FindManyNested,
    /// First customer.
    FindFirst,
    /// First customer with their orders.
    FindFirstNested,
    /// Customer by primary key.
    FindUnique,
    /// Customer by primary key with their orders.
    FindUniqueNested,
    /// Insert a customer.
    Create,
    /// Insert a customer with an order connected to existing products.
    NestedCreate,
    /// Rename a customer.
    Update,
    /// Rename a customer and update their address.
    NestedUpdate,
    /// Update-or-insert a customer.
    Upsert,
    /// Update-or-insert a customer together with their address.
    NestedUpsert,
    /// Delete a customer by primary key.
    Delete,
}

impl Operation {
    /// All operations in execution order.
    pub const ALL: [Operation; 14] = [
        Operation::FindMany,
        Operation::FindManyFilterPaginateOrder,
        Operation::FindManyNested,
        Operation::FindFirst,
        Operation::FindFirstNested,
        Operation::FindUnique,
        Operation::FindUniqueNested,
        Operation::Create,
        Operation::NestedCreate,
        Operation::Update,
        Operation::NestedUpdate,
        Operation::Upsert,
        Operation::NestedUpsert,
        Operation::Delete,
    ];

    /// Normalized label used in results and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::FindMany => "findMany",
            Operation::FindManyFilterPaginateOrder => "findMany-filter-paginate-order",
            Operation::FindManyNested => "findMany-1-level-nesting",
            Operation::FindFirst => "findFirst",
            Operation::FindFirstNested => "findFirst-1-level-nesting",
            Operation::FindUnique => "findUnique",
            Operation::FindUniqueNested => "findUnique-1-level-nesting",
            Operation::Create => "create",
            Operation::NestedCreate => "nested-create",
            Operation::Update => "update",
            Operation::NestedUpdate => "nested-update",
            Operation::Upsert => "upsert",
            Operation::NestedUpsert => "nested-upsert",
            Operation::Delete => "delete",
        }
    }

    /// Whether the operation writes to the database.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Operation::Create
                | Operation::NestedCreate
                | Operation::Update
                | Operation::NestedUpdate
                | Operation::Upsert
                | Operation::NestedUpsert
                | Operation::Delete
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown operation label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown operation: {0}")]
pub struct ParseOperationError(pub String);

impl FromStr for Operation {
    type Err = ParseOperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| ParseOperationError(s.to_string()))
    }
}
