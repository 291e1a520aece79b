// Timeline services
// Pure time/pixel mapping, snapping and overlap layout for day columns

pub mod layout;
pub mod mapper;
pub mod snap;

pub use layout::{layout_day, pack_columns, ColumnSlot, DayLayout};
pub use mapper::{TimeMapper, HOURS_PER_DAY};
pub use snap::{floor_to_slot, snap};
