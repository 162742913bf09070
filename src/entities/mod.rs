pub mod players;
pub mod poll_records;
pub mod purchases;
pub mod rewards;
pub mod view_records;

pub use players as player_entity;
pub use poll_records as poll_record_entity;
pub use purchases as purchase_entity;
pub use rewards as reward_entity;
pub use view_records as view_record_entity;
