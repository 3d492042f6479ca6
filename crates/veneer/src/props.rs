//! Instance properties supplied to a component per render call.
//!
//! Props are a transient key→value mapping owned by the calling composition.
//! They carry the per-instance inputs a rule chain may consult (`large`,
//! `hovered`, labels) as well as event-handler references, which this crate
//! stores opaquely and never invokes.
//!
//! # Truthiness
//!
//! Conditional declarations frequently branch on a prop that may be absent
//! (`props.large ? '16px 25px' : '12px 24px'`). [`Props::truthy`] reproduces
//! that convention: absent props are falsy, and each value kind carries its
//! obvious truth value.
//!
//! # Example
//!
//! ```rust
//! use veneer::Props;
//!
//! let props = Props::new()
//!     .set("large", true)
//!     .set("label", "Submit")
//!     .handler("on_click", || {});
//!
//! assert!(props.truthy("large"));
//! assert!(!props.truthy("disabled"));
//! assert_eq!(props.get_str("label"), Some("Submit"));
//! ```

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// An opaque event-handler reference.
///
/// The resolution core treats handlers as inert values: they are stored,
/// cloned, and compared by identity, but only the owning composition may
/// invoke them (via [`Handler::call`]).
///
/// # Single-Threaded Design
///
/// Render passes are single-threaded, so handlers are shared with `Rc` and
/// don't require `Send + Sync` bounds.
#[derive(Clone)]
pub struct Handler(Rc<dyn Fn()>);

impl Handler {
    /// Wraps a callback into an opaque handler value.
    pub fn new(f: impl Fn() + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Invokes the callback.
    ///
    /// This is for the composition that owns the props; style resolution
    /// never calls it.
    pub fn call(&self) {
        (self.0)()
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<handler>")
    }
}

impl PartialEq for Handler {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// A single prop value.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    /// A boolean flag.
    Bool(bool),
    /// An integer.
    Int(i64),
    /// A floating-point number.
    Float(f64),
    /// A string.
    Str(String),
    /// An opaque event-handler reference.
    Handler(Handler),
}

impl PropValue {
    /// JS-style truthiness for conditional declarations.
    pub fn is_truthy(&self) -> bool {
        match self {
            PropValue::Bool(b) => *b,
            PropValue::Int(n) => *n != 0,
            PropValue::Float(n) => *n != 0.0,
            PropValue::Str(s) => !s.is_empty(),
            PropValue::Handler(_) => true,
        }
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Bool(value)
    }
}

impl From<i64> for PropValue {
    fn from(value: i64) -> Self {
        PropValue::Int(value)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        PropValue::Float(value)
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Str(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Str(value)
    }
}

impl From<Handler> for PropValue {
    fn from(value: Handler) -> Self {
        PropValue::Handler(value)
    }
}

/// Instance props for one render call.
///
/// Built with the chaining style used throughout this crate; cheap to clone,
/// never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props {
    values: HashMap<String, PropValue>,
}

impl Props {
    /// Creates an empty prop mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a prop, returning `self` for chaining.
    ///
    /// Accepts anything convertible to [`PropValue`]: bools, numbers,
    /// strings, or handlers. An existing prop with the same name is replaced.
    pub fn set<V: Into<PropValue>>(mut self, name: &str, value: V) -> Self {
        self.values.insert(name.to_string(), value.into());
        self
    }

    /// Sets an event-handler prop.
    ///
    /// Shorthand for `set(name, Handler::new(f))`.
    pub fn handler(self, name: &str, f: impl Fn() + 'static) -> Self {
        self.set(name, Handler::new(f))
    }

    /// Returns the raw value for a prop, if present.
    pub fn get(&self, name: &str) -> Option<&PropValue> {
        self.values.get(name)
    }

    /// Returns a string prop, if present and a string.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(PropValue::Str(s)) => Some(s),
            _ => None,
        }
    }

    /// Returns a boolean prop, if present and a bool.
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        match self.values.get(name) {
            Some(PropValue::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    /// Returns the handler stored under `name`, if any.
    pub fn get_handler(&self, name: &str) -> Option<&Handler> {
        match self.values.get(name) {
            Some(PropValue::Handler(h)) => Some(h),
            _ => None,
        }
    }

    /// JS-style truthiness: absent props are falsy.
    pub fn truthy(&self, name: &str) -> bool {
        self.values.get(name).is_some_and(PropValue::is_truthy)
    }

    /// Returns the number of props.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no props are set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_props_new_is_empty() {
        let props = Props::new();
        assert!(props.is_empty());
        assert_eq!(props.len(), 0);
    }

    #[test]
    fn test_props_set_and_get() {
        let props = Props::new().set("large", true).set("label", "Submit");
        assert_eq!(props.get_bool("large"), Some(true));
        assert_eq!(props.get_str("label"), Some("Submit"));
        assert_eq!(props.len(), 2);
    }

    #[test]
    fn test_props_replace() {
        let props = Props::new().set("x", 1i64).set("x", 2i64);
        assert_eq!(props.len(), 1);
        assert_eq!(props.get("x"), Some(&PropValue::Int(2)));
    }

    #[test]
    fn test_truthy_absent_is_false() {
        assert!(!Props::new().truthy("missing"));
    }

    #[test]
    fn test_truthy_per_kind() {
        let props = Props::new()
            .set("yes", true)
            .set("no", false)
            .set("zero", 0i64)
            .set("one", 1i64)
            .set("empty", "")
            .set("word", "x")
            .handler("click", || {});

        assert!(props.truthy("yes"));
        assert!(!props.truthy("no"));
        assert!(!props.truthy("zero"));
        assert!(props.truthy("one"));
        assert!(!props.truthy("empty"));
        assert!(props.truthy("word"));
        assert!(props.truthy("click"));
    }

    #[test]
    fn test_handler_is_opaque_until_called() {
        let fired = Rc::new(Cell::new(false));
        let flag = Rc::clone(&fired);
        let props = Props::new().handler("on_click", move || flag.set(true));

        // Storing and cloning never invokes the callback.
        let _copy = props.clone();
        assert!(!fired.get());

        props.get_handler("on_click").unwrap().call();
        assert!(fired.get());
    }

    #[test]
    fn test_handler_debug_is_opaque() {
        let props = Props::new().handler("on_click", || {});
        let debug = format!("{:?}", props.get("on_click").unwrap());
        assert_eq!(debug, "Handler(<handler>)");
    }

    #[test]
    fn test_handler_compares_by_identity() {
        let a = Handler::new(|| {});
        let b = a.clone();
        let c = Handler::new(|| {});
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
