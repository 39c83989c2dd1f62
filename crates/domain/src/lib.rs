mod assignment;
mod coach;
mod notification;
mod player;
mod session;
mod shared;
mod video;

pub use assignment::{scheduled_dispatch_at, AutoVideoAssignment, PlayerVideo};
pub use coach::Coach;
pub use notification::{NotificationLogEntry, NotificationStatus, ReminderMessage};
pub use player::Player;
pub use session::Session;
pub use shared::entity::{Entity, ID};
pub use video::{Video, DEFAULT_AUTO_ASSIGN_DAY_OFFSET};
