mod community_media;
mod news_item;
mod useful_phone;

pub use community_media::{CommunityMedia, MediaVillage};
pub use news_item::{NewsItem, NewsType};
pub use useful_phone::{PhoneCategory, UsefulPhone};
