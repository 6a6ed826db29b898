mod card;
mod comparator;
mod expense;
mod ledger;
mod money;

pub use card::*;
pub use comparator::*;
pub use expense::*;
pub use ledger::*;
pub use money::*;
