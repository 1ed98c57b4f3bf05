pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{listing_form, listing_item};
pub use layouts::desktop::desktop_layout;
