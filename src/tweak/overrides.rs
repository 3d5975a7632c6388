//! Optional value shadowing a host default

/// Either defers to the host default or holds the authoritative value.
///
/// A set value equal to the default is still `Set`: the two states stay
/// distinguishable until the override is cleared.
#[derive(Debug, Clone, PartialEq)]
pub enum Override<T> {
    Unset,
    Set(T),
}

impl<T> Default for Override<T> {
    fn default() -> Self {
        Override::Unset
    }
}

impl<T> Override<T> {
    #[inline]
    pub fn is_set(&self) -> bool {
        matches!(self, Override::Set(_))
    }

    #[inline]
    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Override::Set(v) => Some(v),
            Override::Unset => None,
        }
    }

    #[inline]
    pub fn set(&mut self, value: T) {
        *self = Override::Set(value);
    }

    #[inline]
    pub fn clear(&mut self) {
        *self = Override::Unset;
    }

    /// The set value, else `default`
    #[inline]
    pub fn resolve<'a>(&'a self, default: &'a T) -> &'a T {
        self.as_ref().unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        let mut value = Override::default();
        assert_eq!(*value.resolve(&3), 3);
        value.set(7);
        assert_eq!(*value.resolve(&3), 7);
        value.clear();
        assert!(!value.is_set());
    }

    #[test]
    fn test_set_to_default_is_still_set() {
        let value = Override::Set(3);
        assert!(value.is_set());
        assert_eq!(*value.resolve(&3), 3);
    }
}
