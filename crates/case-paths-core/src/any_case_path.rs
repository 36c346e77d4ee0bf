use std::fmt;

/// A type-erased case path: embeds a `Value` into a `Root` enum and tries to
/// extract it back out.
///
/// Both directions are plain function pointers, so a case path is `Copy` and
/// carries no captured state. Extraction is partial: it returns `None` when the
/// root holds a different case.
pub struct AnyCasePath<Root, Value> {
    embed: fn(Value) -> Root,
    extract: fn(Root) -> Option<Value>,
}

impl<Root, Value> AnyCasePath<Root, Value> {
    pub const fn new(embed: fn(Value) -> Root, extract: fn(Root) -> Option<Value>) -> Self {
        Self { embed, extract }
    }

    /// Wraps `value` in the case this path points at.
    pub fn embed(&self, value: Value) -> Root {
        (self.embed)(value)
    }

    /// Returns the payload if `root` holds this case.
    pub fn extract(&self, root: Root) -> Option<Value> {
        (self.extract)(root)
    }

    /// Like [`extract`](Self::extract) but reads from a borrowed root.
    pub fn extract_from(&self, root: &Root) -> Option<Value>
    where
        Root: Clone,
    {
        (self.extract)(root.clone())
    }

    pub fn is(&self, root: &Root) -> bool
    where
        Root: Clone,
    {
        self.extract_from(root).is_some()
    }

    /// Applies `f` to the payload in place and re-embeds it.
    ///
    /// Returns `false` and leaves `root` untouched when it holds another case.
    pub fn modify(&self, root: &mut Root, f: impl FnOnce(&mut Value)) -> bool
    where
        Root: Clone,
    {
        let Some(mut value) = self.extract_from(root) else {
            return false;
        };
        f(&mut value);
        *root = self.embed(value);
        true
    }
}

impl<Root, Value> Clone for AnyCasePath<Root, Value> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Root, Value> Copy for AnyCasePath<Root, Value> {}

impl<Root, Value> fmt::Debug for AnyCasePath<Root, Value> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AnyCasePath<{}, {}>",
            std::any::type_name::<Root>(),
            std::any::type_name::<Value>()
        )
    }
}
