pub mod complaint_repo;
pub mod history_repo;
pub mod processing_repo;

pub use complaint_repo::ComplaintRepo;
pub use history_repo::HistoryRepo;
pub use processing_repo::ProcessingRepo;
