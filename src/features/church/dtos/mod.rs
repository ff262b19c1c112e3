mod church_dto;

pub use church_dto::{
    AnnouncementPayloadDto, BulkActivateDto, BulkPublishDto, ChurchAnnouncementDto,
    ChurchMediaDto, ChurchMediaPayloadDto, MediaFilterQuery, PriestDto, PriestPayloadDto,
    ServiceScheduleDto, SchedulePayloadDto,
};
