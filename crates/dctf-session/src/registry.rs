//! Company registry: add, remove by position, read access.

use dctf_core::entities::Company;
use dctf_core::errors::{InputField, SessionError};
use dctf_core::responses::CompanyEntry;

/// Ordered list of monitored companies, unique by CNPJ.
///
/// There is no edit operation; correcting a company means removing it and
/// adding it again. Status and timestamp change only through a status query.
#[derive(Debug, Clone, Default)]
pub struct CompanyRegistry {
    companies: Vec<Company>,
}

impl CompanyRegistry {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            companies: Vec::new(),
        }
    }

    /// Append a new, unverified company.
    ///
    /// # Errors
    ///
    /// - `SessionError::MissingInput` if `name` or `tax_id` is empty.
    /// - `SessionError::DuplicateTaxId` if `tax_id` is already registered.
    pub fn add(&mut self, name: &str, tax_id: &str) -> Result<&Company, SessionError> {
        if name.is_empty() {
            return Err(SessionError::MissingInput {
                field: InputField::CompanyName,
            });
        }
        if tax_id.is_empty() {
            return Err(SessionError::MissingInput {
                field: InputField::CompanyTaxId,
            });
        }
        if self.contains_tax_id(tax_id) {
            return Err(SessionError::DuplicateTaxId {
                tax_id: tax_id.to_string(),
            });
        }

        self.companies.push(Company::new(name, tax_id));
        tracing::info!(name, tax_id, total = self.companies.len(), "company added");
        Ok(&self.companies[self.companies.len() - 1])
    }

    /// Remove the company at `index`, keeping the order of the others.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::IndexOutOfRange` if there is no company at `index`.
    pub fn remove(&mut self, index: usize) -> Result<Company, SessionError> {
        if index >= self.companies.len() {
            return Err(SessionError::IndexOutOfRange {
                index,
                len: self.companies.len(),
            });
        }

        let removed = self.companies.remove(index);
        tracing::info!(
            name = %removed.name,
            tax_id = %removed.tax_id,
            index,
            "company removed"
        );
        Ok(removed)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Company> {
        self.companies.get(index)
    }

    #[must_use]
    pub fn contains_tax_id(&self, tax_id: &str) -> bool {
        self.companies.iter().any(|company| company.tax_id == tax_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.companies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Company> {
        self.companies.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, Company> {
        self.companies.iter_mut()
    }

    /// Companies paired with their current positions.
    #[must_use]
    pub fn entries(&self) -> Vec<CompanyEntry> {
        self.companies
            .iter()
            .enumerate()
            .map(|(index, company)| CompanyEntry {
                index,
                company: company.clone(),
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a CompanyRegistry {
    type Item = &'a Company;
    type IntoIter = std::slice::Iter<'a, Company>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use dctf_core::enums::DeliveryStatus;

    use super::*;

    #[test]
    fn add_appends_unverified_company() {
        let mut registry = CompanyRegistry::new();
        let company = registry.add("Acme LLC", "11222333000181").unwrap();

        assert_eq!(company.name, "Acme LLC");
        assert_eq!(company.status, DeliveryStatus::Unverified);
        assert!(company.last_checked.is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn entries_carry_positions() {
        let mut registry = CompanyRegistry::new();
        registry.add("A", "1").unwrap();
        registry.add("B", "2").unwrap();

        let entries = registry.entries();
        assert_eq!(entries[0].index, 0);
        assert_eq!(entries[1].index, 1);
        assert_eq!(entries[1].company.tax_id, "2");
    }
}
