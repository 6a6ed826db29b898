use chrono::Utc;

use super::{parse_cents, Category, Cents, ExpenseId, ExpenseRecord, NewExpense};

/// Form field checked by [`validate_expense`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Description,
    Amount,
    Category,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Description => "description",
            Field::Amount => "amount",
            Field::Category => "category",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-field "invalid" flags produced by validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub description: bool,
    pub amount: bool,
    pub category: bool,
}

impl ValidationErrors {
    /// Message shown once for any combination of invalid fields.
    pub const MESSAGE: &'static str = "Please fill in all fields correctly.";

    pub fn is_empty(&self) -> bool {
        !(self.description || self.amount || self.category)
    }

    pub fn is_invalid(&self, field: Field) -> bool {
        match field {
            Field::Description => self.description,
            Field::Amount => self.amount,
            Field::Category => self.category,
        }
    }

    pub fn invalid_fields(&self) -> Vec<Field> {
        [Field::Description, Field::Amount, Field::Category]
            .into_iter()
            .filter(|field| self.is_invalid(*field))
            .collect()
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fields: Vec<&str> = self.invalid_fields().iter().map(Field::as_str).collect();
        write!(f, "{} (invalid: {})", Self::MESSAGE, fields.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Description must be non-empty once trimmed and contain only letters and whitespace.
/// Digits are rejected too, so "Rent 2024" is not a valid description.
fn is_valid_description(description: &str) -> bool {
    let trimmed = description.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
}

/// Largest single expense accepted: one billion units.
pub const MAX_EXPENSE_CENTS: Cents = 1_000_000_000 * 100;

fn parse_positive_amount(amount: &str) -> Option<Cents> {
    if amount.trim().is_empty() {
        return None;
    }
    parse_cents(amount)
        .ok()
        .filter(|cents| *cents > 0 && *cents <= MAX_EXPENSE_CENTS)
}

/// Validate the three expense form fields.
/// Every check runs, so all invalid fields are reported together.
pub fn validate_expense(
    description: &str,
    amount: &str,
    category: Option<Category>,
) -> Result<NewExpense, ValidationErrors> {
    let description_ok = is_valid_description(description);
    let amount_cents = parse_positive_amount(amount);

    match (description_ok, amount_cents, category) {
        (true, Some(amount_cents), Some(category)) => Ok(NewExpense {
            description: description.trim().to_string(),
            amount_cents,
            category,
        }),
        _ => Err(ValidationErrors {
            description: !description_ok,
            amount: amount_cents.is_none(),
            category: category.is_none(),
        }),
    }
}

/// Ordered, in-memory sequence of expenses for the current session.
#[derive(Debug, Default)]
pub struct ExpenseLedger {
    records: Vec<ExpenseRecord>,
    last_id: Option<ExpenseId>,
}

impl ExpenseLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a validated expense at the end of the ledger.
    pub fn add(&mut self, expense: NewExpense) -> &ExpenseRecord {
        let id = ExpenseId::next(Utc::now(), self.last_id);
        self.last_id = Some(id);

        tracing::debug!(%id, amount_cents = expense.amount_cents, category = %expense.category, "expense added");

        let index = self.records.len();
        self.records.push(ExpenseRecord {
            id,
            description: expense.description,
            amount_cents: expense.amount_cents,
            category: expense.category,
        });
        &self.records[index]
    }

    /// Remove the expense with the given id. Returns `None` if it does not exist.
    pub fn remove(&mut self, id: ExpenseId) -> Option<ExpenseRecord> {
        let position = self.records.iter().position(|r| r.id == id)?;
        let removed = self.records.remove(position);
        tracing::debug!(%id, "expense removed");
        Some(removed)
    }

    /// Sum of all amounts currently in the ledger, saturating at `Cents::MAX`.
    pub fn total(&self) -> Cents {
        self.records
            .iter()
            .fold(0, |total: Cents, r| total.saturating_add(r.amount_cents))
    }

    pub fn get(&self, id: ExpenseId) -> Option<&ExpenseRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Records in insertion order.
    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
