mod church_service;

pub use church_service::ChurchService;
