/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

/// Maximum number of images attached to one advertisement
pub const MAX_AD_IMAGES: usize = 3;

/// Number of news/important items shown on the front page
pub const FRONT_PAGE_NEWS_LIMIT: i64 = 5;
