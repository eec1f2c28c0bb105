pub mod character;
pub mod config;
pub mod game_data;
pub mod loader;
pub mod realm;
pub mod roster;
pub mod stats;
pub mod view;

// Re-exports for convenience
pub use character::{CharacterRecord, CharacterRow};
pub use realm::{RealmFilter, normalize_realm};
pub use view::{DashboardSnapshot, DashboardView};
