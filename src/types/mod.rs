pub mod history;
pub mod indicators;
pub mod signals;

pub use history::*;
pub use indicators::*;
pub use signals::*;
