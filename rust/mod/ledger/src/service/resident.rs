//! Resident record updates — phone numbers and passwords.
//!
//! Both go through the same read-merge-write save path as everything
//! else; the resident-initiated password change and the
//! administrator's edits are the same operation.

use rezidans_core::normalize_phone;

use crate::model::Resident;
use crate::service::{LedgerError, LedgerService};

impl LedgerService {
    /// Set (or replace) a resident's phone number. The raw input is
    /// canonicalized first; anything shorter than 10 digits after
    /// normalization is rejected.
    pub fn set_phone(&self, id: &str, raw_phone: &str) -> Result<Resident, LedgerError> {
        let phone = normalize_phone(raw_phone);
        if phone.len() < 10 {
            return Err(LedgerError::Validation(format!(
                "'{}' is not a valid phone number",
                raw_phone.trim()
            )));
        }

        self.update_resident(id, |r| r.phone = Some(phone.clone()))
    }

    /// Change a resident's password.
    pub fn set_password(&self, id: &str, new_password: &str) -> Result<Resident, LedgerError> {
        if new_password.is_empty() {
            return Err(LedgerError::Validation("password cannot be empty".into()));
        }
        self.update_resident(id, |r| r.password = new_password.to_string())
    }

    fn update_resident<F>(&self, id: &str, mutate: F) -> Result<Resident, LedgerError>
    where
        F: Fn(&mut Resident),
    {
        let mut doc = self.current_document()?;
        let resident = doc
            .residents
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| LedgerError::NotFound(format!("unit {} not found", id)))?;

        mutate(resident);
        let updated = resident.clone();
        self.put(&doc)?;
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::model::LedgerDocument;
    use crate::service::{LedgerError, LedgerService};
    use rezidans_store::MemoryStore;

    fn seeded_store() -> Arc<MemoryStore> {
        Arc::new(MemoryStore::with_document(serde_json::json!({
            "residents": [{"id": "131.001.001", "name": "A"}],
            "debtBalances": [],
        })))
    }

    #[test]
    fn set_phone_normalizes_before_storing() {
        let store = seeded_store();
        let svc = LedgerService::new(store.clone());

        let updated = svc.set_phone("131.001.001", "0532 111 22 33").unwrap();
        assert_eq!(updated.phone.as_deref(), Some("905321112233"));

        let doc = LedgerDocument::from_value(store.document().unwrap());
        assert_eq!(doc.residents[0].phone.as_deref(), Some("905321112233"));
    }

    #[test]
    fn set_phone_rejects_short_numbers() {
        let svc = LedgerService::new(seeded_store());
        let err = svc.set_phone("131.001.001", "532 11").unwrap_err();
        assert!(matches!(err, LedgerError::Validation(_)));
    }

    #[test]
    fn set_phone_unknown_unit() {
        let svc = LedgerService::new(seeded_store());
        let err = svc.set_phone("131.009.999", "0532 111 22 33").unwrap_err();
        assert!(matches!(err, LedgerError::NotFound(_)));
    }

    #[test]
    fn set_password_roundtrip() {
        let store = seeded_store();
        let svc = LedgerService::new(store.clone());

        svc.set_password("131.001.001", "yeni-sifre").unwrap();
        let doc = LedgerDocument::from_value(store.document().unwrap());
        assert_eq!(doc.residents[0].password, "yeni-sifre");
    }

    #[test]
    fn set_password_rejects_empty() {
        let svc = LedgerService::new(seeded_store());
        assert!(svc.set_password("131.001.001", "").is_err());
    }
}
