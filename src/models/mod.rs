pub mod common;
pub mod player;
pub mod poll;
pub mod view_record;

pub use common::*;
pub use player::*;
pub use poll::*;
pub use view_record::*;
