/// Batch entity module
pub mod batch;
/// Student entity module
pub mod student;

pub use batch::Entity as Batch;
pub use student::Entity as Student;
