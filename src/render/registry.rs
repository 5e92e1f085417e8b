use super::{DEFAULT_TRANSFORM, Passthrough, Transform};
use std::collections::HashMap;

/// Dynamic dispatch table for named transforms
pub struct TransformRegistry {
    /// Fallback for names with no registered transform
    fallback: Box<dyn Transform>,
    /// Name -> Transform mapping
    map: HashMap<String, Box<dyn Transform>>,
}

impl TransformRegistry {
    /// Create a new registry with Passthrough as both the fallback and the
    /// default "render" transform
    pub fn new() -> Self {
        let mut registry = Self {
            fallback: Box::new(Passthrough),
            map: HashMap::new(),
        };
        registry.register(DEFAULT_TRANSFORM, Passthrough);
        registry
    }

    /// Register a transform under a name, replacing any previous one
    ///
    /// # Arguments
    /// * `name` - Transform name templates will refer to (e.g., "render")
    /// * `transform` - Transform implementation
    ///
    /// # Example
    /// ```ignore
    /// registry.register("render", HostContentFilter::new());
    /// registry.register("excerpt", TruncateWords(55));
    /// ```
    pub fn register(&mut self, name: impl Into<String>, transform: impl Transform + 'static) {
        self.map.insert(name.into(), Box::new(transform));
    }

    /// Select the transform registered under a name
    ///
    /// Falls back to Passthrough if the name is unregistered
    pub fn select(&self, name: &str) -> &dyn Transform {
        self.map.get(name).map(|t| &**t).unwrap_or(&*self.fallback)
    }

    /// Get the number of registered transforms (excluding fallback)
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether any transforms are registered
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for TransformRegistry {
    fn default() -> Self {
        Self::new()
    }
}
