mod coach;
mod notification;
mod player;
mod session;
mod status;
mod video;

pub mod dtos {
    pub use crate::coach::dtos::*;
    pub use crate::notification::dtos::*;
    pub use crate::player::dtos::*;
    pub use crate::session::dtos::*;
    pub use crate::video::dtos::*;
}

pub use crate::coach::api::*;
pub use crate::notification::api::*;
pub use crate::player::api::*;
pub use crate::session::api::*;
pub use crate::status::api::*;
pub use crate::video::api::*;
