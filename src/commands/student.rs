use serde_json::Value;

use super::{open_manager, persist, print_json};
use crate::display::{student_details, student_table};
use crate::error::{Result, RosterError};
use crate::record::Record;
use crate::storage::Storage;
use crate::student::{Student, StudentPatch};

/// Add a student and print the generated ID
pub fn cmd_student_add(
    storage: &Storage,
    name: &str,
    age: u32,
    grade: Option<&str>,
    output_json: bool,
) -> Result<()> {
    let mut manager = open_manager::<Student>(storage)?;
    let student = manager.add(Student::new(name, age, grade)?)?;
    let record = student.to_record();
    let id = student.id().to_string();
    persist(storage, &manager)?;

    if output_json {
        print_json(&Value::Object(record))?;
    } else {
        println!("Added student with ID: {}", id);
    }
    Ok(())
}

/// List all students
pub fn cmd_student_ls(storage: &Storage, output_json: bool) -> Result<()> {
    let manager = open_manager::<Student>(storage)?;

    if output_json {
        let records: Vec<Value> = manager.export().into_iter().map(Value::Object).collect();
        return print_json(&Value::Array(records));
    }

    if manager.is_empty() {
        println!("No students found.");
        return Ok(());
    }

    println!("{}", student_table(manager.list_all()));
    println!("{} student(s)", manager.len());
    Ok(())
}

/// Display a single student
pub fn cmd_student_show(storage: &Storage, id: &str, output_json: bool) -> Result<()> {
    let manager = open_manager::<Student>(storage)?;
    let student = manager.find_by_id(id).ok_or_else(|| RosterError::NotFound {
        kind: Student::KIND,
        id: id.to_string(),
    })?;

    if output_json {
        print_json(&Value::Object(student.to_record()))?;
    } else {
        println!("{}", student_details(student));
    }
    Ok(())
}

/// Delete a student
pub fn cmd_student_rm(storage: &Storage, id: &str) -> Result<()> {
    let mut manager = open_manager::<Student>(storage)?;
    if !manager.delete_by_id(id) {
        return Err(RosterError::NotFound {
            kind: Student::KIND,
            id: id.to_string(),
        });
    }
    persist(storage, &manager)?;
    println!("Deleted student {}", id);
    Ok(())
}

/// Update fields of a student
pub fn cmd_student_set(
    storage: &Storage,
    id: &str,
    patch: StudentPatch,
    output_json: bool,
) -> Result<()> {
    let mut manager = open_manager::<Student>(storage)?;
    let record = manager
        .update_by_id(id, patch)?
        .ok_or_else(|| RosterError::NotFound {
            kind: Student::KIND,
            id: id.to_string(),
        })?
        .to_record();
    persist(storage, &manager)?;

    if output_json {
        print_json(&Value::Object(record))?;
    } else {
        println!("Updated student {}", id);
    }
    Ok(())
}
