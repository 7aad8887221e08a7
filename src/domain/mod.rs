mod currency;
mod entry;
mod ledger;
mod tracker;

pub use currency::*;
pub use entry::*;
pub use ledger::*;
pub use tracker::*;
