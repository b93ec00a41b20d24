pub mod mover;
pub mod preview;
pub mod reorganizer;
pub mod rewriter;
pub mod scan;
pub mod summary;

pub use mover::{FileMover, MoveOutcome};
pub use preview::PreviewTree;
pub use reorganizer::{Layout, Reorganizer, RunReport};
pub use rewriter::RewriteOutcome;
pub use summary::Summary;
