pub mod complaint;
pub mod history;
pub mod processing;
