//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for contact names, phone numbers
//! and calendar dates. These value objects validate at construction time
//! and prevent invalid data from being represented in the system.

pub mod calendar_date;
pub mod contact_name;
pub mod errors;
pub mod phone;

pub use calendar_date::{validate_date, CalendarDate, DATE_FORMAT};
pub use contact_name::ContactName;
pub use errors::ValidationError;
pub use phone::{validate_phone, PhoneNumber};
