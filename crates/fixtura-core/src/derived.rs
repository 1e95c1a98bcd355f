/// A single cached value that later generators derive from.
///
/// `Unset` is distinct from any generated value, including zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Derived<T> {
    #[default]
    Unset,
    Set(T),
}

impl<T: Copy> Derived<T> {
    pub fn get(&self) -> Option<T> {
        match self {
            Derived::Unset => None,
            Derived::Set(value) => Some(*value),
        }
    }

    /// Overwrite the slot and return the stored value.
    pub fn set(&mut self, value: T) -> T {
        *self = Derived::Set(value);
        value
    }

    pub fn is_set(&self) -> bool {
        matches!(self, Derived::Set(_))
    }
}
