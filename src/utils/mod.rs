//! Utility modules for the chord sheet engine

pub mod html;
pub mod spacing;

// Re-export commonly used functions
pub use html::escape_html;
pub use spacing::normalise_spacing;
