pub const ROSTER_DIR: &str = ".roster";

pub const STUDENTS_FILE: &str = "students.json";
pub const EMPLOYEES_FILE: &str = "employees.json";
