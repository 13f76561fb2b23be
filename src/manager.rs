//! In-memory, insertion-ordered collection of records
//!
//! Lookups and deletes are linear scans, which is fine at the scale of an
//! interactive single-user tool. The `Record` trait is the seam where a
//! hash index on `id` could be substituted without a contract change.

use crate::error::{Result, RosterError};
use crate::record::{Record, RecordMap};

#[derive(Debug)]
pub struct Manager<R: Record> {
    records: Vec<R>,
}

impl<R: Record> Default for Manager<R> {
    fn default() -> Self {
        Manager::new()
    }
}

impl<R: Record> Manager<R> {
    pub fn new() -> Self {
        Manager {
            records: Vec::new(),
        }
    }

    /// Append a record
    ///
    /// # Errors
    /// Returns `Validation` when a record with the same id is already
    /// present. Cannot happen for freshly constructed records, guards
    /// against hand-assembled ones.
    pub fn add(&mut self, record: R) -> Result<&R> {
        if self.find_by_id(record.id()).is_some() {
            return Err(RosterError::Validation(format!(
                "duplicate {} id '{}'",
                R::KIND,
                record.id()
            )));
        }
        self.records.push(record);
        Ok(self
            .records
            .last()
            .expect("records must be non-empty after push"))
    }

    /// Linear scan for the first record with the given id. Absence is a
    /// normal outcome, not an error.
    pub fn find_by_id(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Remove the first record with the given id; returns whether a
    /// removal happened
    pub fn delete_by_id(&mut self, id: &str) -> bool {
        match self.records.iter().position(|r| r.id() == id) {
            Some(index) => {
                self.records.remove(index);
                true
            }
            None => false,
        }
    }

    /// Apply a patch to the record with the given id, replacing it in
    /// place. `Ok(None)` when no record matches; on a patch validation
    /// failure the stored record is unchanged.
    pub fn update_by_id(&mut self, id: &str, patch: R::Patch) -> Result<Option<&R>> {
        let Some(index) = self.records.iter().position(|r| r.id() == id) else {
            return Ok(None);
        };
        let updated = self.records[index].apply(patch)?;
        self.records[index] = updated;
        Ok(Some(&self.records[index]))
    }

    /// Read-only view of all records in insertion order
    pub fn list_all(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Replace the entire collection with records deserialized from
    /// `records`, preserving order. Atomic: on any malformed record (or a
    /// duplicated id) the manager keeps its prior contents and the error
    /// is returned.
    pub fn import(&mut self, records: &[RecordMap]) -> Result<()> {
        let mut imported = Vec::with_capacity(records.len());
        for record in records {
            let parsed = R::from_record(record)?;
            if imported.iter().any(|r: &R| r.id() == parsed.id()) {
                return Err(RosterError::MalformedRecord {
                    kind: R::KIND,
                    reason: format!("duplicate id '{}'", parsed.id()),
                });
            }
            imported.push(parsed);
        }
        self.records = imported;
        Ok(())
    }

    /// Serialize every record in current order. Pure.
    pub fn export(&self) -> Vec<RecordMap> {
        self.records.iter().map(Record::to_record).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::student::{Student, StudentPatch};

    fn manager_with(names: &[(&str, u32)]) -> Manager<Student> {
        let mut manager = Manager::new();
        for (name, age) in names {
            manager.add(Student::new(name, *age, None).unwrap()).unwrap();
        }
        manager
    }

    #[test]
    fn test_add_then_find() {
        let mut manager = Manager::new();
        let student = Student::new("Ann", 30, None).unwrap();
        let id = manager.add(student).unwrap().id().to_string();
        assert!(!id.is_empty());
        let found = manager.find_by_id(&id).unwrap();
        assert_eq!(found.name(), "Ann");
        assert_eq!(found.age(), 30);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut manager = Manager::new();
        let student = Student::new("Ann", 30, None).unwrap();
        let copy = Student::from_record(&student.to_record()).unwrap();
        manager.add(student).unwrap();
        assert!(manager.add(copy).is_err());
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_find_absent_is_none() {
        let manager = manager_with(&[("Ann", 30)]);
        assert!(manager.find_by_id("missing").is_none());
    }

    #[test]
    fn test_delete() {
        let mut manager = manager_with(&[("Ann", 30), ("Beth", 25)]);
        let id = manager.list_all()[0].id().to_string();
        assert!(manager.delete_by_id(&id));
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.list_all()[0].name(), "Beth");
    }

    #[test]
    fn test_delete_absent_is_noop() {
        let mut manager = manager_with(&[("Ann", 30)]);
        let before = manager.export();
        assert!(!manager.delete_by_id("missing"));
        assert_eq!(manager.export(), before);
    }

    #[test]
    fn test_lengths_and_unique_ids_across_mutations() {
        let mut manager = Manager::new();
        let mut ids = Vec::new();
        for i in 0..10 {
            let student = Student::new("Stu", 20 + i, None).unwrap();
            ids.push(manager.add(student).unwrap().id().to_string());
        }
        assert!(manager.delete_by_id(&ids[3]));
        assert!(manager.delete_by_id(&ids[7]));
        assert!(!manager.delete_by_id(&ids[3]));
        assert_eq!(manager.len(), 8);
        let all_ids: Vec<_> = manager.list_all().iter().map(|s| s.id()).collect();
        let mut deduped = all_ids.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), all_ids.len());
    }

    #[test]
    fn test_update_by_id() {
        let mut manager = manager_with(&[("Ann", 30)]);
        let id = manager.list_all()[0].id().to_string();
        let updated = manager
            .update_by_id(
                &id,
                StudentPatch {
                    age: Some(31),
                    ..Default::default()
                },
            )
            .unwrap()
            .unwrap();
        assert_eq!(updated.age(), 31);
        assert_eq!(manager.find_by_id(&id).unwrap().age(), 31);
    }

    #[test]
    fn test_update_absent_is_none() {
        let mut manager = manager_with(&[("Ann", 30)]);
        let result = manager
            .update_by_id("missing", StudentPatch::default())
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_update_invalid_patch_keeps_record() {
        let mut manager = manager_with(&[("Ann", 30)]);
        let id = manager.list_all()[0].id().to_string();
        let result = manager.update_by_id(
            &id,
            StudentPatch {
                age: Some(0),
                ..Default::default()
            },
        );
        assert!(result.is_err());
        assert_eq!(manager.find_by_id(&id).unwrap().age(), 30);
    }

    #[test]
    fn test_import_export_round_trip() {
        let manager = manager_with(&[("Ann", 30), ("Beth", 25), ("Cara", 40)]);
        let exported = manager.export();

        let mut restored: Manager<Student> = Manager::new();
        restored.import(&exported).unwrap();
        assert_eq!(restored.len(), 3);
        let names: Vec<_> = restored.list_all().iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["Ann", "Beth", "Cara"]);
        assert_eq!(restored.export(), exported);
    }

    #[test]
    fn test_import_malformed_record_is_atomic() {
        let mut manager = manager_with(&[("Beth", 25)]);
        let before = manager.export();

        let mut bad = Student::new("Ann", 30, None).unwrap().to_record();
        bad.remove("id");
        let err = manager.import(&[bad]).unwrap_err();
        assert!(matches!(err, RosterError::MalformedRecord { .. }));

        // Prior contents survive a failed import untouched
        assert_eq!(manager.export(), before);
        assert_eq!(manager.list_all()[0].name(), "Beth");
    }

    #[test]
    fn test_import_duplicate_ids_rejected() {
        let manager = manager_with(&[("Ann", 30)]);
        let record = manager.export().remove(0);
        let mut fresh: Manager<Student> = Manager::new();
        let err = fresh.import(&[record.clone(), record]).unwrap_err();
        assert!(matches!(err, RosterError::MalformedRecord { .. }));
        assert!(fresh.is_empty());
    }
}
