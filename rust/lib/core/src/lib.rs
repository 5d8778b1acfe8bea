pub mod error;
pub mod money;
pub mod phone;
pub mod time;

pub use error::{ServiceError, error_code};
pub use money::{format_money, parse_money};
pub use phone::{format_phone_display, normalize_phone};
pub use time::{now_unix, today_display};
