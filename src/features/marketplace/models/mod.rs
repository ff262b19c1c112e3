mod advertisement;
mod advertisement_image;

pub use advertisement::{AdType, AdVillage, Advertisement, ModerationStatus};
pub use advertisement_image::AdvertisementImage;
