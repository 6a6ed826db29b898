use super::{CardOffer, Cents};

/// Salaries below this many whole units have no offers at all.
pub const MINIMUM_SALARY: i64 = 100;

/// Why a salary could not be compared against the offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SalaryError {
    Empty,
    NotDigits,
    NotInitialized,
    BelowMinimum,
}

impl std::fmt::Display for SalaryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SalaryError::Empty => write!(f, "Please enter your salary."),
            SalaryError::NotDigits => {
                write!(f, "Please enter only numbers in the salary field.")
            }
            SalaryError::NotInitialized => {
                write!(f, "The card list is not initialized correctly.")
            }
            SalaryError::BelowMinimum => write!(
                f,
                "The salary entered is below ${}. No cards are available for salaries that low.",
                MINIMUM_SALARY
            ),
        }
    }
}

impl std::error::Error for SalaryError {}

/// Offer list for one session. `None` until loading has finished.
#[derive(Debug, Default)]
pub struct CardComparator {
    offers: Option<Vec<CardOffer>>,
}

impl CardComparator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_offers(offers: Vec<CardOffer>) -> Self {
        Self {
            offers: Some(offers),
        }
    }

    /// Install the loaded offers. A failed load should install an empty list.
    pub fn set_offers(&mut self, offers: Vec<CardOffer>) {
        self.offers = Some(offers);
    }

    pub fn offers(&self) -> Option<&[CardOffer]> {
        self.offers.as_deref()
    }

    pub fn is_loaded(&self) -> bool {
        self.offers.is_some()
    }

    /// Offers whose minimum income is at most `salary`, in source order.
    pub fn filter(&self, salary: &str) -> Result<Vec<CardOffer>, SalaryError> {
        let salary_cents = check_salary(salary, self.offers.is_some())?;
        let offers = self.offers.as_deref().unwrap_or_default();

        Ok(offers
            .iter()
            .filter(|offer| {
                offer
                    .minimum_income_cents()
                    .is_some_and(|income| income <= salary_cents)
            })
            .cloned()
            .collect())
    }
}

/// Run the salary preconditions in order, stopping at the first failure.
/// Returns the salary in cents.
fn check_salary(salary: &str, loaded: bool) -> Result<Cents, SalaryError> {
    if salary.trim().is_empty() {
        return Err(SalaryError::Empty);
    }
    // Digits only: no decimal point, no separators, no surrounding spaces
    if !salary.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SalaryError::NotDigits);
    }
    if !loaded {
        return Err(SalaryError::NotInitialized);
    }

    // All digits, so parsing only fails on overflow
    let units = salary.parse::<i64>().unwrap_or(i64::MAX);
    if units < MINIMUM_SALARY {
        return Err(SalaryError::BelowMinimum);
    }
    Ok(units.saturating_mul(100))
}
