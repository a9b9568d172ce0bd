pub mod apartment;
pub mod chart;
pub(crate) mod de;
pub mod history;
pub mod prediction;

pub use apartment::*;
pub use chart::*;
pub use history::*;
pub use prediction::*;
