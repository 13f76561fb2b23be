use serde_json::Value;

use super::{open_manager, persist, print_json};
use crate::display::{employee_details, employee_table};
use crate::employee::{Employee, EmployeePatch};
use crate::error::{Result, RosterError};
use crate::record::Record;
use crate::storage::Storage;

/// Options for adding a new employee
#[derive(Debug, Clone)]
pub struct AddEmployeeOptions {
    pub name: String,
    pub department: String,
    pub designation: Option<String>,
    pub gross_salary: f64,
    pub tax: f64,
    pub bonus: f64,
}

/// Add an employee and print the generated ID
pub fn cmd_employee_add(
    storage: &Storage,
    options: AddEmployeeOptions,
    output_json: bool,
) -> Result<()> {
    let mut manager = open_manager::<Employee>(storage)?;
    let employee = manager.add(Employee::new(
        &options.name,
        &options.department,
        options.designation.as_deref(),
        options.gross_salary,
        options.tax,
        options.bonus,
    )?)?;
    let record = employee.to_record();
    let id = employee.id().to_string();
    persist(storage, &manager)?;

    if output_json {
        print_json(&Value::Object(record))?;
    } else {
        println!("Added employee with ID: {}", id);
    }
    Ok(())
}

/// List all employees
pub fn cmd_employee_ls(storage: &Storage, output_json: bool) -> Result<()> {
    let manager = open_manager::<Employee>(storage)?;

    if output_json {
        let records: Vec<Value> = manager.export().into_iter().map(Value::Object).collect();
        return print_json(&Value::Array(records));
    }

    if manager.is_empty() {
        println!("No employees found.");
        return Ok(());
    }

    println!("{}", employee_table(manager.list_all()));
    println!("{} employee(s)", manager.len());
    Ok(())
}

/// Display a single employee
pub fn cmd_employee_show(storage: &Storage, id: &str, output_json: bool) -> Result<()> {
    let manager = open_manager::<Employee>(storage)?;
    let employee = manager
        .find_by_id(id)
        .ok_or_else(|| RosterError::NotFound {
            kind: Employee::KIND,
            id: id.to_string(),
        })?;

    if output_json {
        print_json(&Value::Object(employee.to_record()))?;
    } else {
        println!("{}", employee_details(employee));
    }
    Ok(())
}

/// Delete an employee
pub fn cmd_employee_rm(storage: &Storage, id: &str) -> Result<()> {
    let mut manager = open_manager::<Employee>(storage)?;
    if !manager.delete_by_id(id) {
        return Err(RosterError::NotFound {
            kind: Employee::KIND,
            id: id.to_string(),
        });
    }
    persist(storage, &manager)?;
    println!("Deleted employee {}", id);
    Ok(())
}

/// Update fields of an employee
pub fn cmd_employee_set(
    storage: &Storage,
    id: &str,
    patch: EmployeePatch,
    output_json: bool,
) -> Result<()> {
    let mut manager = open_manager::<Employee>(storage)?;
    let record = manager
        .update_by_id(id, patch)?
        .ok_or_else(|| RosterError::NotFound {
            kind: Employee::KIND,
            id: id.to_string(),
        })?
        .to_record();
    persist(storage, &manager)?;

    if output_json {
        print_json(&Value::Object(record))?;
    } else {
        println!("Updated employee {}", id);
    }
    Ok(())
}
