pub mod card;
pub mod count_selector;
pub mod results;
pub mod search_bar;
pub mod spinner;
