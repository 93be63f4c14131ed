pub mod config;
pub mod error;
pub mod payload;
pub mod selector;
pub mod slot;
pub mod time;

pub use config::PortalConfig;
pub use error::{Error, Result};
pub use payload::SlotPayload;
pub use selector::{SelectionPolicy, TimeSlotSelector};
pub use slot::{SlotCollection, SlotEntry, TimeSlot};
pub use time::TimeOfDay;
