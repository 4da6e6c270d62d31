pub mod user;
pub mod user_info;

pub use user::User;
pub use user_info::UserInfo;
