//! Transient messages shown in the top-right corner.
//!
//! Any component can post a notification; it disappears on its own once its
//! display duration has elapsed.

mod notification_render;
mod notification_state;

pub use notification_render::render_notification;
pub use notification_state::{DEFAULT_NOTIFICATION_DURATION, NotificationState};
