pub mod dto;
pub mod period;

pub use dto::{BookingSummaryResponse, ConsumptionSummary, OfficeSummary, RoomSummary};
pub use period::{DateRange, PeriodSelection};
