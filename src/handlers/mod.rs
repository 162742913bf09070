pub mod poll;
pub mod purchase;
pub mod view_locator;

pub use poll::poll_config;
pub use purchase::purchase_config;
pub use view_locator::view_locator_config;
