mod announcement;
mod church_media;
mod priest;
mod service_schedule;

pub use announcement::{AnnouncementType, ChurchAnnouncement};
pub use church_media::{ChurchMedia, MediaType};
pub use priest::Priest;
pub use service_schedule::{ServiceDay, ServiceSchedule};
