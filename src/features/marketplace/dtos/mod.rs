mod advertisement_dto;

pub use advertisement_dto::{
    AdvertisementAuthorDto, AdvertisementImageDto, AdvertisementListQuery,
    AdvertisementPayloadDto, AdvertisementResponseDto, RejectRequestDto,
};
