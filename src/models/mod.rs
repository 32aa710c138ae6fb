pub mod notification;

pub use notification::{InvalidRequest, NotificationRequest};
