pub mod entry;
pub mod multiplier;
pub mod totals;

pub use entry::Entry;
pub use multiplier::OvertimeMultiplier;
pub use totals::{Rates, Totals};
