//! Calendar dates and daily answer selection

mod date;
mod selector;
mod source;

pub use date::{CalendarDate, DateError};
pub use selector::{DailyAnswerSelector, EPOCH, select};
pub use source::{DateSource, FixedDate, SystemDate};
