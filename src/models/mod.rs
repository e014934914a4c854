pub mod attendance;
pub mod clock_event;

pub use attendance::{DailyAttendance, EmployeeDay, Punch};
pub use clock_event::ClockEvent;
