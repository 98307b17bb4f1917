// 🗂️ Category Registry - Owns every category of a budget
//
// Categories are kept in insertion order (the chart keeps that order)
// and looked up by their title-cased name. The registry is the single
// owner; callers borrow categories from it.

use serde::Serialize;

use crate::chart::{self, SpendShare};
use crate::entities::category::{title_case, Category};
use crate::error::RegistryError;
use crate::layout::{ChartLayout, Layout};

#[derive(Debug, Default)]
pub struct CategoryRegistry {
    categories: Vec<Category>,
}

/// Point-in-time view of a registry, ready for export
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub categories: Vec<CategorySummary<'a>>,
    pub spend: Vec<SpendShare>,
}

#[derive(Debug, Serialize)]
pub struct CategorySummary<'a> {
    pub balance: f64,
    pub spent: f64,
    #[serde(flatten)]
    pub category: &'a Category,
}

impl CategoryRegistry {
    /// Create new empty registry
    pub fn new() -> Self {
        CategoryRegistry {
            categories: Vec::new(),
        }
    }

    /// Add a new category. Names are compared after title-casing.
    pub fn register(&mut self, name: &str) -> Result<&mut Category, RegistryError> {
        let name = title_case(name);
        if self.position(&name).is_some() {
            return Err(RegistryError::DuplicateCategory(name));
        }

        tracing::debug!(category = %name, "registering category");
        self.categories.push(Category::with_title(name));
        let last = self.categories.len() - 1;
        Ok(&mut self.categories[last])
    }

    /// Get the named category, creating it if needed
    pub fn get_or_register(&mut self, name: &str) -> &mut Category {
        let name = title_case(name);
        let index = match self.position(&name) {
            Some(index) => index,
            None => {
                tracing::debug!(category = %name, "registering category");
                self.categories.push(Category::with_title(name));
                self.categories.len() - 1
            }
        };
        &mut self.categories[index]
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Category> {
        let name = title_case(name);
        self.categories.iter().find(|c| c.name() == name)
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// All categories in registration order
    pub fn all_categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn count(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    // ========================================================================
    // OPERATIONS BY NAME
    // ========================================================================

    pub fn deposit(&mut self, name: &str, amount: f64, description: &str) -> Result<(), RegistryError> {
        self.lookup_mut(name)?.deposit(amount, description);
        Ok(())
    }

    pub fn withdraw(&mut self, name: &str, amount: f64, description: &str) -> Result<(), RegistryError> {
        self.lookup_mut(name)?.withdraw(amount, description)?;
        Ok(())
    }

    /// Transfer between two registered categories.
    ///
    /// Borrows both sides mutably at once, so source and destination must
    /// be different categories.
    pub fn transfer(&mut self, from: &str, to: &str, amount: f64) -> Result<(), RegistryError> {
        let from_name = title_case(from);
        let to_name = title_case(to);

        let source = self
            .position(&from_name)
            .ok_or_else(|| RegistryError::UnknownCategory(from_name.clone()))?;
        let destination = self
            .position(&to_name)
            .ok_or(RegistryError::UnknownCategory(to_name))?;

        if source == destination {
            return Err(RegistryError::SelfTransfer(from_name));
        }

        let (source, destination) = pair_mut(&mut self.categories, source, destination);
        source.transfer(amount, destination)?;
        Ok(())
    }

    // ========================================================================
    // VIEWS
    // ========================================================================

    pub fn spend_list(&self) -> Vec<SpendShare> {
        chart::spend_list(&self.categories)
    }

    pub fn spend_chart(&self, layout: &ChartLayout) -> String {
        chart::render_spend_chart(&self.spend_list(), layout)
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            categories: self
                .categories
                .iter()
                .map(|category| CategorySummary {
                    balance: category.get_balance(),
                    spent: category.spent(),
                    category,
                })
                .collect(),
            spend: self.spend_list(),
        }
    }

    /// Every ledger block separated by a blank line
    pub fn render_ledgers(&self, layout: &Layout) -> String {
        self.categories
            .iter()
            .map(|c| c.render(layout))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn position(&self, title_cased: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.name() == title_cased)
    }

    fn lookup_mut(&mut self, name: &str) -> Result<&mut Category, RegistryError> {
        let name = title_case(name);
        match self.position(&name) {
            Some(index) => Ok(&mut self.categories[index]),
            None => Err(RegistryError::UnknownCategory(name)),
        }
    }
}

/// Mutable references to two distinct elements
fn pair_mut<T>(items: &mut [T], a: usize, b: usize) -> (&mut T, &mut T) {
    debug_assert_ne!(a, b);
    if a < b {
        let (left, right) = items.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = items.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}

// ============================================================================
// TESTS
// ============================================================================
