use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::types::ROSTER_DIR;

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Plain-text student and employee record management")]
#[command(version)]
pub struct Cli {
    /// Directory holding the data files
    #[arg(long, global = true, default_value = ROSTER_DIR)]
    pub dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage student records
    #[command(visible_alias = "stu")]
    Student {
        #[command(subcommand)]
        action: StudentAction,
    },

    /// Manage employee records
    #[command(visible_alias = "emp")]
    Employee {
        #[command(subcommand)]
        action: EmployeeAction,
    },
}

#[derive(Subcommand)]
pub enum StudentAction {
    /// Add a student and print the generated ID
    #[command(visible_alias = "a")]
    Add {
        /// Student name
        name: String,

        /// Age in years
        #[arg(short, long)]
        age: u32,

        /// Grade label (e.g. "A")
        #[arg(short, long)]
        grade: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List all students
    Ls {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display a single student
    #[command(visible_alias = "s")]
    Show {
        /// Student ID
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a student
    Rm {
        /// Student ID
        id: String,
    },

    /// Update fields of a student
    Set {
        /// Student ID
        id: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New age
        #[arg(long)]
        age: Option<u32>,

        /// New grade label
        #[arg(long)]
        grade: Option<String>,

        /// Remove the grade label
        #[arg(long, conflicts_with = "grade")]
        clear_grade: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum EmployeeAction {
    /// Add an employee and print the generated ID
    #[command(visible_alias = "a")]
    Add {
        /// Employee name
        name: String,

        /// Department
        #[arg(short, long)]
        department: String,

        /// Designation (e.g. "Developer")
        #[arg(long)]
        designation: Option<String>,

        /// Gross salary
        #[arg(long)]
        gross_salary: f64,

        /// Tax withheld
        #[arg(long, default_value_t = 0.0)]
        tax: f64,

        /// Bonus
        #[arg(long, default_value_t = 0.0)]
        bonus: f64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List all employees
    Ls {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display a single employee
    #[command(visible_alias = "s")]
    Show {
        /// Employee ID
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete an employee
    Rm {
        /// Employee ID
        id: String,
    },

    /// Update fields of an employee
    Set {
        /// Employee ID
        id: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New department
        #[arg(long)]
        department: Option<String>,

        /// New designation
        #[arg(long)]
        designation: Option<String>,

        /// Remove the designation
        #[arg(long, conflicts_with = "designation")]
        clear_designation: bool,

        /// New gross salary
        #[arg(long)]
        gross_salary: Option<f64>,

        /// New tax
        #[arg(long)]
        tax: Option<f64>,

        /// New bonus
        #[arg(long)]
        bonus: Option<f64>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
