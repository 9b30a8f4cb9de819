pub mod agents;
pub mod pricing;
pub mod report;
pub mod ride;
pub mod scenario;
pub mod summary;
