//! Aggregates module
pub mod filter;
pub mod frame;
pub mod gallery;
pub mod options;
pub mod variant;

pub use filter::{FilterState, FramePdFilter};
pub use frame::{group_frames, Badge, FrameGroup};
pub use gallery::{Gallery, MainImage, MainImageSlot, ProbeTicket};
pub use options::FilterOptions;
pub use variant::{VariantKey, VariantSelector, VariantState};
