mod account;
mod availability;
mod booking;
mod money;
mod room;
mod user;

pub use account::*;
pub use availability::*;
pub use booking::*;
pub use money::*;
pub use room::*;
pub use user::*;
