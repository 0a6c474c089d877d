pub mod booking;
pub mod calendar;
pub mod gallery;
pub mod gift_card;
pub mod notification;
pub mod service;
pub mod slot;
pub mod try_on;

pub use booking::{BookingDraft, CardDetails, Confirmation, ContactDetails, WizardStep};
pub use calendar::CalendarCell;
pub use gallery::GalleryItem;
pub use gift_card::GiftCardTier;
pub use notification::{Notification, NotificationPermission};
pub use service::Service;
pub use slot::TimeSlot;
pub use try_on::{PreviewMode, TryOnSession};
