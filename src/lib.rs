pub mod cli;
pub mod commands;
pub mod display;
pub mod employee;
pub mod error;
pub mod manager;
pub mod person;
pub mod record;
pub mod storage;
pub mod student;
pub mod types;
pub mod utils;

pub use employee::{Employee, EmployeePatch};
pub use error::{Result, RosterError};
pub use manager::Manager;
pub use person::Person;
pub use record::{Record, RecordMap};
pub use storage::Storage;
pub use student::{Student, StudentPatch};
pub use types::{EMPLOYEES_FILE, ROSTER_DIR, STUDENTS_FILE};
