use crate::domain::{CardComparator, CardOffer, SalaryError};
use crate::remote::{CardClient, FetchError};

use super::Dialog;

/// Message shown when a comparison matched no offers.
pub const NO_CARDS_MESSAGE: &str = "No cards available";

/// What the results area of the comparator shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ComparisonView<'a> {
    /// No comparison has been made for the current salary text.
    Hidden,
    NoneFound,
    Offers(&'a [CardOffer]),
}

/// State behind the card comparator screen.
#[derive(Debug, Default)]
pub struct ComparatorScreen {
    comparator: CardComparator,
    salary: String,
    filtered: Vec<CardOffer>,
    has_compared: bool,
    fetch_error: Option<String>,
    dialog: Dialog,
}

impl ComparatorScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch offers once and install them.
    pub async fn load_from(&mut self, client: &CardClient) {
        let result = client.fetch_offers().await;
        self.load(result);
    }

    /// Install the outcome of the offer fetch. Failures leave an empty list
    /// and a persistent inline message.
    pub fn load(&mut self, result: Result<Vec<CardOffer>, FetchError>) {
        match result {
            Ok(offers) => {
                self.comparator.set_offers(offers);
                self.fetch_error = None;
            }
            Err(err) => {
                tracing::error!(error = %err, timeout = err.is_timeout(), "failed to fetch card offers");
                self.comparator.set_offers(Vec::new());
                self.fetch_error = Some(FetchError::MESSAGE.to_string());
            }
        }
    }

    /// Update the salary text. Clearing it hides the previous results.
    pub fn set_salary(&mut self, salary: impl Into<String>) {
        self.salary = salary.into();
        if self.salary.trim().is_empty() {
            self.has_compared = false;
            self.filtered.clear();
        }
    }

    pub fn salary(&self) -> &str {
        &self.salary
    }

    /// Compare the current salary against the offers.
    /// Rejected input keeps the previous results and raises the dialog.
    pub fn compare(&mut self) -> Result<usize, SalaryError> {
        match self.comparator.filter(&self.salary) {
            Ok(filtered) => {
                self.filtered = filtered;
                self.has_compared = true;
                Ok(self.filtered.len())
            }
            Err(err) => {
                self.dialog.show(err.to_string());
                Err(err)
            }
        }
    }

    pub fn results(&self) -> ComparisonView<'_> {
        if !self.has_compared {
            ComparisonView::Hidden
        } else if self.filtered.is_empty() {
            ComparisonView::NoneFound
        } else {
            ComparisonView::Offers(&self.filtered)
        }
    }

    pub fn fetch_error(&self) -> Option<&str> {
        self.fetch_error.as_deref()
    }

    pub fn is_loaded(&self) -> bool {
        self.comparator.is_loaded()
    }

    pub fn offer_count(&self) -> usize {
        self.comparator.offers().map_or(0, |offers| offers.len())
    }

    pub fn dialog(&self) -> &Dialog {
        &self.dialog
    }

    pub fn dismiss_dialog(&mut self) {
        self.dialog.dismiss();
    }
}
