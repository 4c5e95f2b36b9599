pub mod classify;
pub mod driver;
pub mod partition;
pub mod row_blur;
pub mod worker;
