use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::error::ValidationError;

/// Largest page size accepted by the API.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Highest page number accepted by the API.
pub const MAX_PAGE: u32 = 21_474_836;

/// A quantity of a single unit (`lovelace` or a native asset id).
///
/// Quantities are kept as decimal strings since they routinely exceed
/// 64-bit integers for native assets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TransactionOutputAmount {
    pub unit: String,
    pub quantity: String,
}

impl TransactionOutputAmount {
    pub fn new(unit: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            unit: unit.into(),
            quantity: quantity.into(),
        }
    }

    pub fn lovelace(quantity: impl Into<String>) -> Self {
        Self::new("lovelace", quantity)
    }
}

/// Ordering of listing endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    #[default]
    Asc,
    Desc,
}

impl Order {
    pub fn as_str(&self) -> &'static str {
        match self {
            Order::Asc => "asc",
            Order::Desc => "desc",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Order {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Order::Asc),
            "desc" => Ok(Order::Desc),
            other => Err(ValidationError::InvalidField {
                field: "order".to_string(),
                message: format!("expected 'asc' or 'desc', got '{other}'"),
            }),
        }
    }
}

/// Pagination parameters for list endpoints.
///
/// Unset parameters are omitted from the query string and the server
/// defaults apply (`count=100`, `page=1`, `order=asc`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Validate)]
pub struct Pagination {
    #[validate(range(min = 1, max = 100))]
    pub count: Option<u32>,
    #[validate(range(min = 1, max = 21474836))]
    pub page: Option<u32>,
    pub order: Option<Order>,
}

impl Pagination {
    #[must_use]
    pub fn new(count: u32, page: u32, order: Order) -> Self {
        Self {
            count: Some(count),
            page: Some(page),
            order: Some(order),
        }
    }

    /// A full page (100 entries) at the given page number.
    #[must_use]
    pub fn page(page: u32) -> Self {
        Self {
            count: Some(MAX_PAGE_SIZE),
            page: Some(page),
            order: None,
        }
    }

    #[must_use]
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    #[must_use]
    pub fn with_order(mut self, order: Order) -> Self {
        self.order = Some(order);
        self
    }

    /// Query pairs for the parameters that are set, in `count`, `page`, `order` order.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(3);
        if let Some(count) = self.count {
            pairs.push(("count", count.to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(order) = self.order {
            pairs.push(("order", order.to_string()));
        }
        pairs
    }
}
