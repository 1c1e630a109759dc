use std::cell::Cell;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Query,
    Count,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Query => Focus::Count,
            Focus::Count => Focus::Query,
        }
    }

    pub fn prev(self) -> Self {
        // Only two fields, so both directions toggle.
        self.next()
    }
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub focus: Focus,
    /// First visible row of the card grid.
    pub scroll: usize,
    pub tick: u64,
    /// Card columns used by the last draw; zero before the first frame.
    pub grid_columns: Cell<u16>,
}

impl UiState {
    /// Last row the grid can scroll to for `cards` results.
    pub fn last_grid_row(&self, cards: usize) -> usize {
        let columns = self.grid_columns.get().max(1) as usize;
        cards.div_ceil(columns).saturating_sub(1)
    }
}
