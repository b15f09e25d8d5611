use serde::{Deserialize, Serialize};

use stockmgr_core::{DomainError, DomainResult, Entity, SupplierId};

/// Entity: Supplier.
///
/// The name is the display key and is looked up case-insensitively; it is not
/// required to be unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    id: SupplierId,
    name: String,
    contact: String,
}

/// Command: AddSupplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddSupplier {
    pub name: String,
    pub contact: String,
}

/// Command: UpdateSupplier.
///
/// Replaces both fields as given, without validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateSupplier {
    pub supplier_id: SupplierId,
    pub name: String,
    pub contact: String,
}

impl Supplier {
    /// Build a supplier from an add command.
    pub fn add(id: SupplierId, cmd: &AddSupplier) -> DomainResult<Self> {
        let name = cmd.name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("supplier name cannot be empty"));
        }
        Ok(Self {
            id,
            name: name.to_string(),
            contact: cmd.contact.trim().to_string(),
        })
    }

    pub fn id_typed(&self) -> SupplierId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }

    /// Case-insensitive exact match on the name (surrounding whitespace ignored).
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.trim().to_lowercase()
    }

    pub fn update(&mut self, cmd: &UpdateSupplier) {
        self.name = cmd.name.trim().to_string();
        self.contact = cmd.contact.trim().to_string();
    }
}

impl Entity for Supplier {
    type Id = SupplierId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl core::fmt::Display for Supplier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} [{}]", self.name, self.contact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add_cmd(name: &str, contact: &str) -> AddSupplier {
        AddSupplier {
            name: name.to_string(),
            contact: contact.to_string(),
        }
    }

    #[test]
    fn add_trims_fields() {
        let s = Supplier::add(SupplierId::new(), &add_cmd("  Acme ", " sales@acme.test ")).unwrap();
        assert_eq!(s.name(), "Acme");
        assert_eq!(s.contact(), "sales@acme.test");
    }

    #[test]
    fn add_rejects_blank_name() {
        let err = Supplier::add(SupplierId::new(), &add_cmd("   ", "x")).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn add_allows_empty_contact() {
        let s = Supplier::add(SupplierId::new(), &add_cmd("Acme", "")).unwrap();
        assert_eq!(s.contact(), "");
    }

    #[test]
    fn name_lookup_ignores_case() {
        let s = Supplier::add(SupplierId::new(), &add_cmd("Supplier A", "")).unwrap();
        assert!(s.has_name("supplier a"));
        assert!(s.has_name("SUPPLIER A"));
        assert!(!s.has_name("Supplier"));
    }

    #[test]
    fn update_replaces_both_fields_unconditionally() {
        let id = SupplierId::new();
        let mut s = Supplier::add(id, &add_cmd("Acme", "old")).unwrap();
        s.update(&UpdateSupplier {
            supplier_id: id,
            name: "".to_string(),
            contact: "new".to_string(),
        });
        assert_eq!(s.name(), "");
        assert_eq!(s.contact(), "new");
        assert_eq!(s.to_string(), " [new]");
    }
}
