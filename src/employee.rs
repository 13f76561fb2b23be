//! Employee records
//!
//! `net_salary` is derived from the salary inputs at construction time and
//! stored in the record. It is recomputed whenever a record is
//! deserialized or patched; a value found in a stored mapping is never
//! trusted.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Result, RosterError};
use crate::person::Person;
use crate::record::{Record, RecordMap, decode};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Employee {
    #[serde(flatten)]
    person: Person,
    department: String,
    #[serde(default)]
    designation: Option<String>,
    gross_salary: f64,
    tax: f64,
    bonus: f64,
    #[serde(default, skip_deserializing)]
    net_salary: f64,
}

/// Fields of an employee permitted to change after construction
#[derive(Debug, Default, Clone)]
pub struct EmployeePatch {
    pub name: Option<String>,
    pub department: Option<String>,
    pub designation: Option<String>,
    pub clear_designation: bool,
    pub gross_salary: Option<f64>,
    pub tax: Option<f64>,
    pub bonus: Option<f64>,
}

impl Employee {
    pub fn new(
        name: &str,
        department: &str,
        designation: Option<&str>,
        gross_salary: f64,
        tax: f64,
        bonus: f64,
    ) -> Result<Self> {
        let mut employee = Employee {
            person: Person::new(name)?,
            department: department.trim().to_string(),
            designation: normalize_optional(designation),
            gross_salary,
            tax,
            bonus,
            net_salary: 0.0,
        };
        employee.net_salary = employee.compute_net_salary();
        employee
            .check_fields()
            .map_err(RosterError::Validation)?;
        Ok(employee)
    }

    pub fn name(&self) -> &str {
        self.person.name()
    }

    pub fn created(&self) -> &str {
        self.person.created()
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn designation(&self) -> Option<&str> {
        self.designation.as_deref()
    }

    pub fn gross_salary(&self) -> f64 {
        self.gross_salary
    }

    pub fn tax(&self) -> f64 {
        self.tax
    }

    pub fn bonus(&self) -> f64 {
        self.bonus
    }

    pub fn net_salary(&self) -> f64 {
        self.net_salary
    }

    fn compute_net_salary(&self) -> f64 {
        self.gross_salary - self.tax + self.bonus
    }

    fn check_fields(&self) -> std::result::Result<(), String> {
        self.person.check_fields()?;
        if self.department.trim().is_empty() {
            return Err("department cannot be empty".to_string());
        }
        check_amount("gross salary", self.gross_salary)?;
        check_amount("tax", self.tax)?;
        check_amount("bonus", self.bonus)?;
        Ok(())
    }
}

impl Record for Employee {
    const KIND: &'static str = "employee";
    type Patch = EmployeePatch;

    fn id(&self) -> &str {
        self.person.id()
    }

    fn to_record(&self) -> RecordMap {
        let mut record = RecordMap::new();
        record.insert("id".to_string(), Value::from(self.person.id()));
        record.insert("name".to_string(), Value::from(self.person.name()));
        record.insert("created".to_string(), Value::from(self.person.created()));
        record.insert(
            "department".to_string(),
            Value::from(self.department.as_str()),
        );
        record.insert(
            "designation".to_string(),
            self.designation.as_deref().map_or(Value::Null, Value::from),
        );
        record.insert("gross_salary".to_string(), Value::from(self.gross_salary));
        record.insert("tax".to_string(), Value::from(self.tax));
        record.insert("bonus".to_string(), Value::from(self.bonus));
        record.insert("net_salary".to_string(), Value::from(self.net_salary));
        record
    }

    fn from_record(record: &RecordMap) -> Result<Self> {
        let mut employee: Employee = decode(Self::KIND, record)?;
        employee.net_salary = employee.compute_net_salary();
        employee
            .check_fields()
            .map_err(|reason| RosterError::MalformedRecord {
                kind: Self::KIND,
                reason,
            })?;
        Ok(employee)
    }

    fn apply(&self, patch: EmployeePatch) -> Result<Self> {
        let person = match patch.name {
            Some(ref name) => self.person.with_name(name)?,
            None => self.person.clone(),
        };
        let designation = if patch.clear_designation {
            None
        } else {
            match patch.designation {
                Some(ref d) => normalize_optional(Some(d)),
                None => self.designation.clone(),
            }
        };
        let mut employee = Employee {
            person,
            department: patch
                .department
                .as_deref()
                .map(|d| d.trim().to_string())
                .unwrap_or_else(|| self.department.clone()),
            designation,
            gross_salary: patch.gross_salary.unwrap_or(self.gross_salary),
            tax: patch.tax.unwrap_or(self.tax),
            bonus: patch.bonus.unwrap_or(self.bonus),
            net_salary: 0.0,
        };
        employee.net_salary = employee.compute_net_salary();
        employee
            .check_fields()
            .map_err(RosterError::Validation)?;
        Ok(employee)
    }
}

fn check_amount(label: &str, amount: f64) -> std::result::Result<(), String> {
    if !amount.is_finite() {
        return Err(format!("{} must be a finite number", label));
    }
    if amount < 0.0 {
        return Err(format!("{} cannot be negative", label));
    }
    Ok(())
}

fn normalize_optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
