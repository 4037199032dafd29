mod portal_dto;

pub use portal_dto::{
    NavigateDto, PortalStateDto, ScreenDto, SetViewDto, SubmissionNoticeDto,
    SubmitReportResponseDto, TrackTokenDto,
};
