mod roster;

pub use roster::{Notice, PlayerFormView, PlayerRow, RosterPage, RosterPageData};
