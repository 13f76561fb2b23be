//! Student records

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Result, RosterError};
use crate::person::Person;
use crate::record::{Record, RecordMap, decode};

const MAX_AGE: u32 = 150;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Student {
    #[serde(flatten)]
    person: Person,
    age: u32,
    #[serde(default)]
    grade: Option<String>,
}

/// Fields of a student permitted to change after construction
#[derive(Debug, Default, Clone)]
pub struct StudentPatch {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub grade: Option<String>,
    pub clear_grade: bool,
}

impl Student {
    pub fn new(name: &str, age: u32, grade: Option<&str>) -> Result<Self> {
        let student = Student {
            person: Person::new(name)?,
            age,
            grade: normalize_grade(grade),
        };
        check_age(student.age).map_err(RosterError::Validation)?;
        Ok(student)
    }

    pub fn name(&self) -> &str {
        self.person.name()
    }

    pub fn created(&self) -> &str {
        self.person.created()
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn grade(&self) -> Option<&str> {
        self.grade.as_deref()
    }

    fn check_fields(&self) -> std::result::Result<(), String> {
        self.person.check_fields()?;
        check_age(self.age)
    }
}

impl Record for Student {
    const KIND: &'static str = "student";
    type Patch = StudentPatch;

    fn id(&self) -> &str {
        self.person.id()
    }

    fn to_record(&self) -> RecordMap {
        let mut record = RecordMap::new();
        record.insert("id".to_string(), Value::from(self.person.id()));
        record.insert("name".to_string(), Value::from(self.person.name()));
        record.insert("created".to_string(), Value::from(self.person.created()));
        record.insert("age".to_string(), Value::from(self.age));
        record.insert(
            "grade".to_string(),
            self.grade.as_deref().map_or(Value::Null, Value::from),
        );
        record
    }

    fn from_record(record: &RecordMap) -> Result<Self> {
        let student: Student = decode(Self::KIND, record)?;
        student
            .check_fields()
            .map_err(|reason| RosterError::MalformedRecord {
                kind: Self::KIND,
                reason,
            })?;
        Ok(student)
    }

    fn apply(&self, patch: StudentPatch) -> Result<Self> {
        let person = match patch.name {
            Some(ref name) => self.person.with_name(name)?,
            None => self.person.clone(),
        };
        let age = patch.age.unwrap_or(self.age);
        check_age(age).map_err(RosterError::Validation)?;
        let grade = if patch.clear_grade {
            None
        } else {
            match patch.grade {
                Some(ref g) => normalize_grade(Some(g)),
                None => self.grade.clone(),
            }
        };
        Ok(Student { person, age, grade })
    }
}

fn check_age(age: u32) -> std::result::Result<(), String> {
    if age == 0 || age > MAX_AGE {
        return Err(format!("age must be between 1 and {}", MAX_AGE));
    }
    Ok(())
}

fn normalize_grade(grade: Option<&str>) -> Option<String> {
    grade
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(str::to_string)
}
