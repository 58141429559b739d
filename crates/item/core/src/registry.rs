//! Registry of item definitions keyed by namespaced identifier.
//!
//! The registry never discovers definitions on its own. Hosts hand it fully
//! constructed definitions, either one by one through [`ItemRegistry::register`]
//! or as an explicit constructor table through [`ItemRegistry::register_all`].

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::ItemConfig;
use crate::definition::{DefinitionError, ItemDefinition, RenderedItem};
use crate::error::{ErrorSeverity, ItemError};
use crate::key::NamespacedKey;

/// Constructor entry of a registration table.
pub type ItemConstructor = fn(&ItemConfig) -> Result<ItemDefinition, DefinitionError>;

/// Identifier already present in the registry.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("item {id} is already registered")]
pub struct DuplicateIdError {
    pub id: NamespacedKey,
}

impl ItemError for DuplicateIdError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        "REGISTRY_DUPLICATE_ID"
    }
}

/// Rejected registration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegisterError {
    #[error(transparent)]
    Duplicate(#[from] DuplicateIdError),

    #[error("cannot register item {definition} under id {id}")]
    IdMismatch {
        id: NamespacedKey,
        definition: NamespacedKey,
    },

    #[error("constructor #{index} failed: {source}")]
    Definition {
        index: usize,
        #[source]
        source: DefinitionError,
    },
}

impl ItemError for RegisterError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Duplicate(err) => err.severity(),
            Self::IdMismatch { .. } => ErrorSeverity::Validation,
            Self::Definition { source, .. } => source.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Duplicate(err) => err.error_code(),
            Self::IdMismatch { .. } => "REGISTRY_ID_MISMATCH",
            Self::Definition { source, .. } => source.error_code(),
        }
    }
}

/// Definitions in registration order.
///
/// Duplicate identifiers are rejected; nothing is ever silently overwritten.
#[derive(Clone, Debug, Default)]
pub struct ItemRegistry {
    definitions: HashMap<NamespacedKey, ItemDefinition>,
    order: Vec<NamespacedKey>,
}

impl ItemRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `definition` under `id`, which must be the definition's own id.
    pub fn register(
        &mut self,
        id: NamespacedKey,
        definition: ItemDefinition,
    ) -> Result<(), RegisterError> {
        if &id != definition.id() {
            warn!(%id, definition = %definition.id(), "rejected mismatched item registration");
            return Err(RegisterError::IdMismatch {
                id,
                definition: definition.id().clone(),
            });
        }
        if self.definitions.contains_key(&id) {
            warn!(%id, "rejected duplicate item registration");
            return Err(DuplicateIdError { id }.into());
        }

        debug!(%id, kind = %definition.kind(), "registered item");
        self.order.push(id.clone());
        self.definitions.insert(id, definition);
        Ok(())
    }

    /// Registers a definition under its own identifier.
    pub fn insert(&mut self, definition: ItemDefinition) -> Result<(), RegisterError> {
        self.register(definition.id().clone(), definition)
    }

    /// Runs every constructor in `table` and registers the results in order.
    ///
    /// All-or-nothing: constructors run and identifiers are checked (against
    /// the registry and within the table) before anything is inserted.
    pub fn register_all(
        &mut self,
        config: &ItemConfig,
        table: &[ItemConstructor],
    ) -> Result<usize, RegisterError> {
        let mut built: Vec<ItemDefinition> = Vec::with_capacity(table.len());

        for (index, constructor) in table.iter().enumerate() {
            let definition =
                constructor(config).map_err(|source| RegisterError::Definition { index, source })?;

            let id = definition.id();
            if self.contains(id) || built.iter().any(|other| other.id() == id) {
                warn!(%id, "rejected duplicate item in registration table");
                return Err(DuplicateIdError { id: id.clone() }.into());
            }
            built.push(definition);
        }

        let count = built.len();
        for definition in built {
            self.insert(definition)?;
        }
        Ok(count)
    }

    pub fn lookup(&self, id: &NamespacedKey) -> Option<&ItemDefinition> {
        self.definitions.get(id)
    }

    pub fn lookup_mut(&mut self, id: &NamespacedKey) -> Option<&mut ItemDefinition> {
        self.definitions.get_mut(id)
    }

    pub fn contains(&self, id: &NamespacedKey) -> bool {
        self.definitions.contains_key(id)
    }

    /// Copies of every definition, in registration order.
    pub fn all(&self) -> Vec<ItemDefinition> {
        self.iter().cloned().collect()
    }

    /// Definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ItemDefinition> + '_ {
        self.order.iter().filter_map(|id| self.definitions.get(id))
    }

    pub fn ids(&self) -> impl Iterator<Item = &NamespacedKey> + '_ {
        self.order.iter()
    }

    /// Materializes every definition, returning snapshots in registration order.
    pub fn materialize_all(&mut self) -> Vec<Arc<RenderedItem>> {
        let mut snapshots = Vec::with_capacity(self.order.len());
        for id in &self.order {
            if let Some(definition) = self.definitions.get_mut(id) {
                snapshots.push(definition.materialize());
            }
        }
        snapshots
    }

    /// The definition whose identity marker `snapshot` carries.
    pub fn identify(&self, snapshot: &RenderedItem) -> Option<&ItemDefinition> {
        self.iter()
            .find(|definition| snapshot.is_instance_of(definition.id()))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
