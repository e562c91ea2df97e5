//! Screen state
//!
//! Each list screen keeps its records and criteria in a `ListView`; changes
//! from the controls go through the criteria reducer and failures become
//! `Notification`s for the user.

pub mod list_view;
pub mod notification;

pub use list_view::ListView;
pub use notification::{Notification, NotificationLevel, Redirect};
