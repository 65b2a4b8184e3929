pub mod calculator;
pub mod log;
pub mod logic;
pub mod repository;
pub mod state;

pub use logic::{Core, Summary};
pub use repository::EntryRepository;
pub use state::AppState;
