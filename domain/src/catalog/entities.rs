//! Option catalog entities.
//!
//! The catalog is built once from configuration at startup and shared
//! read-only by every session; sessions reference options by id, never by
//! copy.

use crate::core::error::DomainError;
use crate::core::ids::OptionId;
use serde::{Deserialize, Serialize};

/// One selectable game option (Value Object).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOption {
    id: OptionId,
    label: String,
}

impl GameOption {
    /// Creates a new option.
    pub fn new(id: impl Into<OptionId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    /// The option id, as referenced by sessions and button actions.
    pub fn id(&self) -> &OptionId {
        &self.id
    }

    /// Human-readable label shown on the option picker.
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// The fixed, ordered sequence of selectable options.
///
/// Order is display order: pickers and session signup lists follow it.
/// The catalog never changes after construction.
///
/// # Example
///
/// ```
/// use gameday_domain::{GameOption, OptionCatalog, OptionId};
///
/// let catalog = OptionCatalog::new(vec![
///     GameOption::new("1", "1000/100"),
///     GameOption::new("2", "500/100"),
/// ])
/// .unwrap();
///
/// assert!(catalog.contains(&OptionId::new("2")));
/// assert!(!catalog.contains(&OptionId::new("9")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionCatalog {
    options: Vec<GameOption>,
}

impl OptionCatalog {
    /// Builds a catalog, validating that it is non-empty and that option ids
    /// are unique.
    pub fn new(options: Vec<GameOption>) -> Result<Self, DomainError> {
        if options.is_empty() {
            return Err(DomainError::EmptyCatalog);
        }
        for (i, option) in options.iter().enumerate() {
            if options[..i].iter().any(|o| o.id == option.id) {
                return Err(DomainError::DuplicateOption(option.id.clone()));
            }
        }
        Ok(Self { options })
    }

    /// Whether the catalog contains the given option id.
    pub fn contains(&self, id: &OptionId) -> bool {
        self.options.iter().any(|o| &o.id == id)
    }

    /// Look up an option by id.
    pub fn get(&self, id: &OptionId) -> Option<&GameOption> {
        self.options.iter().find(|o| &o.id == id)
    }

    /// Options in display order.
    pub fn iter(&self) -> impl Iterator<Item = &GameOption> {
        self.options.iter()
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Always false for a constructed catalog; present for completeness.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}
