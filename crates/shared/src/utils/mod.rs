mod gracefull;
mod logs;
mod metrics;
mod month_year;

pub use self::gracefull::shutdown_signal;
pub use self::logs::Logger;
pub use self::metrics::{Method, Metrics, Status};
pub use self::month_year::MonthYear;
