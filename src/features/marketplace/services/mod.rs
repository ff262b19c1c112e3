mod advertisement_service;

pub use advertisement_service::AdvertisementService;
