//! Console formatting for list tables and detail views

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::employee::Employee;
use crate::record::Record;
use crate::student::Student;
use crate::utils::truncate_string;

const NAME_WIDTH: usize = 32;

/// A row in the student list table
#[derive(Tabled)]
struct StudentRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Age")]
    age: u32,
    #[tabled(rename = "Grade")]
    grade: String,
}

/// A row in the employee list table
#[derive(Tabled)]
struct EmployeeRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Department")]
    department: String,
    #[tabled(rename = "Designation")]
    designation: String,
    #[tabled(rename = "Net Salary")]
    net_salary: String,
}

pub fn student_table(students: &[Student]) -> String {
    let rows: Vec<StudentRow> = students
        .iter()
        .map(|s| StudentRow {
            id: s.id().to_string(),
            name: truncate_string(s.name(), NAME_WIDTH),
            age: s.age(),
            grade: s.grade().unwrap_or("-").to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

pub fn employee_table(employees: &[Employee]) -> String {
    let rows: Vec<EmployeeRow> = employees
        .iter()
        .map(|e| EmployeeRow {
            id: e.id().to_string(),
            name: truncate_string(e.name(), NAME_WIDTH),
            department: e.department().to_string(),
            designation: e.designation().unwrap_or("-").to_string(),
            net_salary: format!("{:.2}", e.net_salary()),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

pub fn student_details(student: &Student) -> String {
    format!(
        "ID:      {}\nName:    {}\nAge:     {}\nGrade:   {}\nCreated: {}",
        student.id(),
        student.name(),
        student.age(),
        student.grade().unwrap_or("-"),
        student.created(),
    )
}

pub fn employee_details(employee: &Employee) -> String {
    format!(
        "ID:           {}\nName:         {}\nDepartment:   {}\nDesignation:  {}\nGross Salary: {:.2}\nTax:          {:.2}\nBonus:        {:.2}\nNet Salary:   {:.2}\nCreated:      {}",
        employee.id(),
        employee.name(),
        employee.department(),
        employee.designation().unwrap_or("-"),
        employee.gross_salary(),
        employee.tax(),
        employee.bonus(),
        employee.net_salary(),
        employee.created(),
    )
}
