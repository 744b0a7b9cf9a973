/// Dashboard data loading
pub mod dashboard;
/// Reading storage and retrieval
pub mod reading;
