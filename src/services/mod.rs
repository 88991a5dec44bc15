//! Business logic services

pub mod category_service;
pub mod competition_service;
pub mod moderation_service;
pub mod submission_service;
pub mod voting_service;

pub use category_service::CategoryService;
pub use competition_service::CompetitionService;
pub use moderation_service::ModerationService;
pub use submission_service::SubmissionService;
pub use voting_service::VotingService;
