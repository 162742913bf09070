pub mod poll_service;
pub mod purchase_service;
pub mod view_locator_service;

pub use poll_service::*;
pub use purchase_service::*;
pub use view_locator_service::*;
