use crate::domain::{
    format_cents, validate_expense, Category, Cents, ExpenseId, ExpenseLedger, ExpenseRecord,
    Field, ValidationErrors,
};

use super::Dialog;

/// State behind the expense entry screen: the form inputs, the field
/// highlighting, the category dropdown and the ledger itself.
#[derive(Debug, Default)]
pub struct LedgerScreen {
    ledger: ExpenseLedger,
    description: String,
    amount: String,
    category: Option<Category>,
    category_open: bool,
    errors: ValidationErrors,
    dialog: Dialog,
}

impl LedgerScreen {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================
    // Form inputs
    // ========================

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_amount(&mut self, amount: impl Into<String>) {
        self.amount = amount.into();
    }

    pub fn toggle_category_dropdown(&mut self) {
        self.category_open = !self.category_open;
    }

    /// Pick a category; this also closes the dropdown.
    pub fn select_category(&mut self, category: Category) {
        self.category = Some(category);
        self.category_open = false;
    }

    pub fn clear_category(&mut self) {
        self.category = None;
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn is_category_open(&self) -> bool {
        self.category_open
    }

    /// Whether `field` is currently highlighted as invalid.
    pub fn is_highlighted(&self, field: Field) -> bool {
        self.errors.is_invalid(field)
    }

    pub fn errors(&self) -> ValidationErrors {
        self.errors
    }

    pub fn dialog(&self) -> &Dialog {
        &self.dialog
    }

    pub fn dismiss_dialog(&mut self) {
        self.dialog.dismiss();
    }

    // ========================
    // Ledger operations
    // ========================

    /// Validate the form and, if it is valid, record the expense and reset the form.
    /// On failure the inputs are kept, invalid fields are highlighted and the
    /// dialog shows the combined message.
    pub fn submit(&mut self) -> Result<ExpenseId, ValidationErrors> {
        match validate_expense(&self.description, &self.amount, self.category) {
            Ok(expense) => {
                let id = self.ledger.add(expense).id;
                self.description.clear();
                self.amount.clear();
                self.category = None;
                self.errors = ValidationErrors::default();
                Ok(id)
            }
            Err(errors) => {
                self.errors = errors;
                self.dialog.show(ValidationErrors::MESSAGE);
                Err(errors)
            }
        }
    }

    /// Delete an expense. Returns false if no expense has that id.
    pub fn delete(&mut self, id: ExpenseId) -> bool {
        self.ledger.remove(id).is_some()
    }

    pub fn expenses(&self) -> &[ExpenseRecord] {
        self.ledger.records()
    }

    pub fn total(&self) -> Cents {
        self.ledger.total()
    }

    /// Total formatted for display, e.g. "$12.50".
    pub fn total_display(&self) -> String {
        format!("${}", format_cents(self.ledger.total()))
    }
}
