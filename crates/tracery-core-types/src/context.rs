//! Immutable context carrier for request-scoped metadata
//!
//! An `ExecutionContext` is created at the start of a logical operation
//! (for example, a request) and threaded by value through every call the
//! operation makes. Derivation layers a child on top of its parent via
//! structural sharing; the parent remains valid and unchanged, so a
//! context can be shared read-only across concurrent operations without
//! locking.

use std::collections::HashMap;
use std::panic::Location;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Source location of a call site, captured once at derivation time
/// and immutable thereafter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CallerLocation {
    pub file: String,
    pub line: u32,
}

impl std::fmt::Display for CallerLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Immutable, inheritable key/value carrier threaded through a logical
/// operation
///
/// Internally a chain of shared nodes: each derivation pushes one node
/// holding that derivation's delta (a caller location, a metadata
/// mapping, or both). Lookup walks child to root, so the nearest value
/// always wins, while keys never overridden surface from whichever
/// ancestor last set them.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use tracery_core_types::ExecutionContext;
///
/// let parent = ExecutionContext::new().with_metadata(&[json!("tenant"), json!("acme")]);
/// let child = parent.with_metadata(&[json!("request"), json!(42)]);
///
/// assert_eq!(child.metadata("tenant"), Some(&json!("acme")));
/// assert_eq!(child.metadata("request"), Some(&json!(42)));
/// // Deriving the child never alters the parent
/// assert_eq!(parent.metadata("request"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExecutionContext {
    node: Option<Arc<Node>>,
}

#[derive(Debug)]
struct Node {
    parent: Option<Arc<Node>>,
    caller: Option<CallerLocation>,
    metadata: HashMap<String, Value>,
}

impl ExecutionContext {
    /// Create an empty root context
    pub fn new() -> Self {
        Self { node: None }
    }

    /// Derive a child carrying the immediate caller's file and line
    ///
    /// The recorded location is the call site of this method, resolved
    /// through `#[track_caller]`.
    #[track_caller]
    pub fn with_caller_location(&self) -> Self {
        let location = Location::caller();
        self.child(
            Some(CallerLocation {
                file: location.file().to_string(),
                line: location.line(),
            }),
            HashMap::new(),
        )
    }

    /// Derive a child carrying a metadata mapping built from a flat
    /// alternating key/value sequence
    ///
    /// An odd-length `kvs` is a usage mistake; the call is a documented
    /// no-op returning a context observably identical to `self`. Keys
    /// coerce to strings (string values pass through unquoted, anything
    /// else renders via its JSON form). Duplicate keys within one call
    /// resolve last-write-wins; keys already present on an ancestor are
    /// overridden by the newly supplied value, while untouched inherited
    /// keys carry forward.
    ///
    /// # Example
    ///
    /// ```
    /// use serde_json::json;
    /// use tracery_core_types::ExecutionContext;
    ///
    /// let ctx = ExecutionContext::new()
    ///     .with_metadata(&[json!("user"), json!("u-17"), json!("attempt"), json!(1)]);
    /// assert_eq!(ctx.metadata("attempt"), Some(&json!(1)));
    ///
    /// // Odd-length input attaches nothing
    /// let same = ctx.with_metadata(&[json!("orphan-key")]);
    /// assert_eq!(same.merged_metadata(), ctx.merged_metadata());
    /// ```
    pub fn with_metadata(&self, kvs: &[Value]) -> Self {
        if kvs.is_empty() || kvs.len() % 2 != 0 {
            return self.clone();
        }

        let mut metadata = HashMap::with_capacity(kvs.len() / 2);
        for pair in kvs.chunks_exact(2) {
            metadata.insert(metadata_key(&pair[0]), pair[1].clone());
        }
        self.child(None, metadata)
    }

    /// Derive a child carrying a single metadata pair
    pub fn with_field(&self, key: impl Into<String>, value: Value) -> Self {
        let mut metadata = HashMap::with_capacity(1);
        metadata.insert(key.into(), value);
        self.child(None, metadata)
    }

    /// Look up a metadata value; the nearest (most recently derived)
    /// value wins
    pub fn metadata(&self, key: &str) -> Option<&Value> {
        let mut node = self.node.as_deref();
        while let Some(current) = node {
            if let Some(value) = current.metadata.get(key) {
                return Some(value);
            }
            node = current.parent.as_deref();
        }
        None
    }

    /// The caller location recorded nearest to this context, if any
    pub fn caller_location(&self) -> Option<&CallerLocation> {
        let mut node = self.node.as_deref();
        while let Some(current) = node {
            if let Some(caller) = &current.caller {
                return Some(caller);
            }
            node = current.parent.as_deref();
        }
        None
    }

    /// The full metadata overlay: ancestors first, each child
    /// overwriting the keys it redefines
    pub fn merged_metadata(&self) -> HashMap<String, Value> {
        let mut chain = Vec::new();
        let mut node = self.node.as_deref();
        while let Some(current) = node {
            chain.push(current);
            node = current.parent.as_deref();
        }

        let mut merged = HashMap::new();
        for layer in chain.into_iter().rev() {
            for (key, value) in &layer.metadata {
                merged.insert(key.clone(), value.clone());
            }
        }
        merged
    }

    /// True for a context with no recorded layers
    pub fn is_root(&self) -> bool {
        self.node.is_none()
    }

    fn child(&self, caller: Option<CallerLocation>, metadata: HashMap<String, Value>) -> Self {
        Self {
            node: Some(Arc::new(Node {
                parent: self.node.clone(),
                caller,
                metadata,
            })),
        }
    }
}

fn metadata_key(value: &Value) -> String {
    match value {
        Value::String(key) => key.clone(),
        other => other.to_string(),
    }
}
