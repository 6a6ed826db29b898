use chrono::{DateTime, Utc};

use super::Cents;

/// Identifier of an expense, derived from the creation time in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExpenseId(i64);

impl ExpenseId {
    /// Next id after `last`, taken from `now` unless the clock has not moved past it.
    pub fn next(now: DateTime<Utc>, last: Option<ExpenseId>) -> Self {
        let millis = now.timestamp_millis();
        match last {
            Some(ExpenseId(prev)) if millis <= prev => ExpenseId(prev + 1),
            _ => ExpenseId(millis),
        }
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<i64> for ExpenseId {
    fn from(value: i64) -> Self {
        ExpenseId(value)
    }
}

impl std::fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Food,
    Entertainment,
    Housing,
    Health,
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Entertainment,
        Category::Housing,
        Category::Health,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Entertainment => "entertainment",
            Category::Housing => "housing",
            Category::Health => "health",
            Category::Other => "other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "food" => Some(Category::Food),
            "entertainment" => Some(Category::Entertainment),
            "housing" => Some(Category::Housing),
            "health" => Some(Category::Health),
            "other" => Some(Category::Other),
            _ => None,
        }
    }

    /// Label shown to the user for this category.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Entertainment => "Entertainment & Leisure",
            Category::Housing => "Housing",
            Category::Health => "Health",
            Category::Other => "Other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A validated expense that has not been given an id yet.
/// Only [`super::validate_expense`] builds one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExpense {
    pub(super) description: String,
    pub(super) amount_cents: Cents,
    pub(super) category: Category,
}

impl NewExpense {
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount_cents(&self) -> Cents {
        self.amount_cents
    }

    pub fn category(&self) -> Category {
        self.category
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseRecord {
    pub id: ExpenseId,
    pub description: String,
    /// Amount in cents (always positive)
    pub amount_cents: Cents,
    pub category: Category,
}
