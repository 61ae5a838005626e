//! Name-based operator lookup.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::operator::{Addition, Division, Multiplication, Operator, Subtraction};

/// A registry mapping operator names to operator instances.
///
/// [`OperatorRegistry::default`] holds the four built-in operators. Names are
/// unique; registering a second operator under an existing name is an error.
pub struct OperatorRegistry {
    collection: BTreeMap<&'static str, Arc<dyn Operator>>,
}

impl OperatorRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            collection: BTreeMap::new(),
        }
    }

    /// Registers an operator under its own name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateOperator`] if the name is already taken.
    pub fn register(&mut self, operator: Arc<dyn Operator>) -> Result<()> {
        let name = operator.name();
        if self.collection.contains_key(name) {
            return Err(Error::DuplicateOperator {
                name: name.to_string(),
            });
        }
        self.collection.insert(name, operator);
        Ok(())
    }

    /// Looks up an operator by name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownOperator`] if no operator is registered under
    /// the given name.
    pub fn get(&self, name: &str) -> Result<&dyn Operator> {
        self.collection
            .get(name)
            .map(Arc::as_ref)
            .ok_or_else(|| Error::unknown_operator(name))
    }

    /// Returns the registered operator names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.collection.keys().copied()
    }

    /// Returns the number of registered operators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.collection.len()
    }

    /// Returns `true` if the registry holds no operators.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }
}

impl Default for OperatorRegistry {
    /// Creates a registry holding the built-in operators.
    fn default() -> Self {
        let mut registry = Self::empty();
        for operator in [
            Arc::new(Addition) as Arc<dyn Operator>,
            Arc::new(Subtraction),
            Arc::new(Multiplication),
            Arc::new(Division),
        ] {
            // Built-in names are distinct, so registration cannot fail.
            let _ = registry.register(operator);
        }
        registry
    }
}

impl std::fmt::Debug for OperatorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OperatorRegistry")
            .field("names", &self.names().collect::<Vec<_>>())
            .finish()
    }
}
