mod json;
mod request_log;

pub use self::json::JsonBody;
pub use self::request_log::request_log;
