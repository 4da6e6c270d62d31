pub mod email;
pub mod gender;
pub mod user_password;

pub use email::Email;
pub use gender::Gender;
pub use user_password::{RawPassword, UserPassword};
