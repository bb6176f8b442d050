pub mod registry;
pub mod tab;
pub mod tabs;

pub use tabs::Tabs;
