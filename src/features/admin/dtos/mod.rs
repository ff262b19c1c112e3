mod admin_dtos;

pub use admin_dtos::{BulkApproveDto, BulkModerationResultDto, BulkRejectDto, CountDto};
