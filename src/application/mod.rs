// Application layer - one controller per screen.
// Each controller owns its screen's form state and is only changed
// through its own operations; nothing is shared between screens.

mod comparator_screen;
mod dialog;
pub mod error;
mod ledger_screen;

pub use comparator_screen::*;
pub use dialog::*;
pub use error::*;
pub use ledger_screen::*;
