pub mod Result_Structs;
pub mod Stats_Structs;

pub use Result_Structs::{LayoutError, QueueError}; // re-export for stable path
pub use Stats_Structs::QueueStats;
