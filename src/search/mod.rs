pub mod controller;
pub mod debounce;
pub mod state;

pub use controller::SearchController;
pub use debounce::Debouncer;
pub use state::ViewState;
