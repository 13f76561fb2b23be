mod employee;
mod student;

pub use employee::{
    AddEmployeeOptions, cmd_employee_add, cmd_employee_ls, cmd_employee_rm, cmd_employee_set,
    cmd_employee_show,
};
pub use student::{
    cmd_student_add, cmd_student_ls, cmd_student_rm, cmd_student_set, cmd_student_show,
};

use serde_json::Value;

use crate::error::Result;
use crate::manager::Manager;
use crate::record::Record;
use crate::storage::Storage;

/// Pretty-print a JSON value to stdout
pub fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Load the persisted record set into a fresh manager
pub(crate) fn open_manager<R: Record>(storage: &Storage) -> Result<Manager<R>> {
    let mut manager = Manager::new();
    manager.import(&storage.load()?)?;
    Ok(manager)
}

/// Persist the manager's current record set
pub(crate) fn persist<R: Record>(storage: &Storage, manager: &Manager<R>) -> Result<()> {
    storage.save(&manager.export())
}
