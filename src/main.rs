use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use roster::cli::{Cli, Commands, EmployeeAction, StudentAction};
use roster::commands::{
    AddEmployeeOptions, cmd_employee_add, cmd_employee_ls, cmd_employee_rm, cmd_employee_set,
    cmd_employee_show, cmd_student_add, cmd_student_ls, cmd_student_rm, cmd_student_set,
    cmd_student_show,
};
use roster::employee::EmployeePatch;
use roster::storage::Storage;
use roster::student::StudentPatch;
use roster::types::{EMPLOYEES_FILE, STUDENTS_FILE};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Student { action } => {
            let storage = Storage::new(cli.dir.join(STUDENTS_FILE));
            match action {
                StudentAction::Add {
                    name,
                    age,
                    grade,
                    json,
                } => cmd_student_add(&storage, &name, age, grade.as_deref(), json),
                StudentAction::Ls { json } => cmd_student_ls(&storage, json),
                StudentAction::Show { id, json } => cmd_student_show(&storage, &id, json),
                StudentAction::Rm { id } => cmd_student_rm(&storage, &id),
                StudentAction::Set {
                    id,
                    name,
                    age,
                    grade,
                    clear_grade,
                    json,
                } => cmd_student_set(
                    &storage,
                    &id,
                    StudentPatch {
                        name,
                        age,
                        grade,
                        clear_grade,
                    },
                    json,
                ),
            }
        }
        Commands::Employee { action } => {
            let storage = Storage::new(cli.dir.join(EMPLOYEES_FILE));
            match action {
                EmployeeAction::Add {
                    name,
                    department,
                    designation,
                    gross_salary,
                    tax,
                    bonus,
                    json,
                } => cmd_employee_add(
                    &storage,
                    AddEmployeeOptions {
                        name,
                        department,
                        designation,
                        gross_salary,
                        tax,
                        bonus,
                    },
                    json,
                ),
                EmployeeAction::Ls { json } => cmd_employee_ls(&storage, json),
                EmployeeAction::Show { id, json } => cmd_employee_show(&storage, &id, json),
                EmployeeAction::Rm { id } => cmd_employee_rm(&storage, &id),
                EmployeeAction::Set {
                    id,
                    name,
                    department,
                    designation,
                    clear_designation,
                    gross_salary,
                    tax,
                    bonus,
                    json,
                } => cmd_employee_set(
                    &storage,
                    &id,
                    EmployeePatch {
                        name,
                        department,
                        designation,
                        clear_designation,
                        gross_salary,
                        tax,
                        bonus,
                    },
                    json,
                ),
            }
        }
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
