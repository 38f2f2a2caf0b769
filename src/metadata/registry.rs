use super::*;
use crate::{debug, warn};

/// Owner of the session's current `SchemaMap`.
///
/// Readers take a `snapshot`, an `Arc` clone that stays consistent even if a
/// reload lands while they are still using it. Reloads replace the whole map;
/// nothing mutates a published map.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    current: Arc<SchemaMap>,
    generation: u64,
}

impl SchemaRegistry {
    /// Registry starting with an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_schema(schema: SchemaMap) -> Self {
        Self {
            current: Arc::new(schema),
            generation: 0,
        }
    }

    /// Cheap handle to the current map.
    pub fn snapshot(&self) -> Arc<SchemaMap> {
        Arc::clone(&self.current)
    }

    pub fn current(&self) -> &SchemaMap {
        &self.current
    }

    /// Number of times the map has been replaced.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Swap in a new map wholesale.
    pub fn replace(&mut self, schema: SchemaMap) {
        self.current = Arc::new(schema);
        self.generation += 1;
        debug!(
            "Schema generation {} installed with {} tables",
            self.generation,
            self.current.len()
        );
    }

    /// Load from `source` and install the result.
    ///
    /// A failed load installs the empty schema, so highlighting carries on
    /// without table classification. Returns whether the load succeeded.
    pub async fn reload<S: SchemaSource>(&mut self, source: &S) -> bool {
        match source.load().await {
            Ok(schema) => {
                self.replace(schema);
                true
            }
            Err(e) => {
                warn!("Schema load failed, continuing with an empty schema: {e}");
                self.replace(SchemaMap::new());
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};

    struct Failing;

    impl SchemaSource for Failing {
        fn load(&self) -> impl Future<Output = Result<SchemaMap>> + Send {
            async { Err(Error::Internal("metadata service unavailable".into())) }
        }
    }

    fn orders() -> SchemaMap {
        SchemaMap::from_iter([("orders", ["id", "total"])])
    }

    #[test]
    fn starts_empty() {
        let registry = SchemaRegistry::new();
        assert!(registry.current().is_empty());
        assert_eq!(registry.generation(), 0);
    }

    #[test]
    fn snapshot_survives_replace() {
        let mut registry = SchemaRegistry::with_schema(orders());
        let before = registry.snapshot();
        registry.replace(SchemaMap::from_iter([("users", ["id"])]));
        assert!(before.contains_table("orders"));
        assert!(!registry.current().contains_table("orders"));
        assert!(registry.current().contains_table("users"));
        assert_eq!(registry.generation(), 1);
    }

    #[tokio::test]
    async fn reload_installs_loaded_schema() {
        let mut registry = SchemaRegistry::new();
        assert!(registry.reload(&StaticSchema::new(orders())).await);
        assert_eq!(registry.current(), &orders());
    }

    #[tokio::test]
    async fn failed_reload_degrades_to_empty() {
        let mut registry = SchemaRegistry::with_schema(orders());
        assert!(!registry.reload(&Failing).await);
        assert!(registry.current().is_empty());
        assert_eq!(registry.generation(), 1);
    }
}
