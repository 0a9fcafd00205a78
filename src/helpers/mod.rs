mod load_dotenv;
mod password;
mod time;

pub use load_dotenv::load_dotenv;
pub use password::hash_password;
pub use time::{Clock, FixedClock, SystemClock};
