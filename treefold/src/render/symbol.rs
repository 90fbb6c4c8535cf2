use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// A row prefix: either a fixed string or computed from the row.
pub enum Symbol<T> {
    Fixed(String),
    Dynamic(Arc<dyn Fn(&T) -> String + Send + Sync>),
}

impl<T> Symbol<T> {
    pub fn fixed(symbol: impl Into<String>) -> Self {
        Self::Fixed(symbol.into())
    }

    pub fn dynamic(f: impl Fn(&T) -> String + Send + Sync + 'static) -> Self {
        Self::Dynamic(Arc::new(f))
    }

    /// The prefix to use for `item`.
    pub fn resolve(&self, item: &T) -> Cow<'_, str> {
        match self {
            Self::Fixed(symbol) => Cow::Borrowed(symbol),
            Self::Dynamic(f) => Cow::Owned(f(item)),
        }
    }
}

impl<T> Clone for Symbol<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Fixed(symbol) => Self::Fixed(symbol.clone()),
            Self::Dynamic(f) => Self::Dynamic(Arc::clone(f)),
        }
    }
}

impl<T> fmt::Debug for Symbol<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(symbol) => f.debug_tuple("Fixed").field(symbol).finish(),
            Self::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

impl<T> From<&str> for Symbol<T> {
    fn from(symbol: &str) -> Self {
        Self::Fixed(symbol.to_string())
    }
}

impl<T> From<String> for Symbol<T> {
    fn from(symbol: String) -> Self {
        Self::Fixed(symbol)
    }
}
