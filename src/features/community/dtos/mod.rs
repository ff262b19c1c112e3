mod community_dto;

pub use community_dto::{
    BulkActivateDto, BulkPublishDto, CommunityMediaDto, CommunityMediaPayloadDto,
    CommunityMediaQuery, NewsItemDto, NewsItemPayloadDto, UsefulPhoneDto, UsefulPhonePayloadDto,
};
