// -------------------------------------------------------------------
// Versioned
// -------------------------------------------------------------------

/// Value paired with a version counter that bumps on every replacement.
/// Derived-data caches key on the version instead of comparing the data.
#[derive(Clone)]
pub struct Versioned<T> {
    version: u64,
    data: T,
}

impl<T> Versioned<T> {
    pub fn new(data: T) -> Self {
        Self { version: 0, data }
    }

    pub fn get(&self) -> &T {
        &self.data
    }

    pub fn set(&mut self, data: T) {
        self.data = data;
        self.version = self.version.wrapping_add(1);
    }

    pub fn version(&self) -> u64 {
        self.version
    }
}

// -------------------------------------------------------------------
// Memoized
// -------------------------------------------------------------------

/// Cached computation over a state `S`, recomputed only when the key
/// extracted from the state changes.
pub struct Memoized<S, K, V> {
    last_key: Option<K>,
    last_value: Option<V>,
    get_key: Box<dyn Fn(&S) -> K>,
    calc: Box<dyn Fn(&S) -> V>,
}

impl<S, K, V> Memoized<S, K, V>
where
    K: PartialEq,
{
    pub fn new(
        get_key: impl Fn(&S) -> K + 'static,
        calc: impl Fn(&S) -> V + 'static,
    ) -> Self {
        Self {
            last_key: None,
            last_value: None,
            get_key: Box::new(get_key),
            calc: Box::new(calc),
        }
    }

    /// Recompute only if the key changed; return the cached value.
    pub fn get(&mut self, state: &S) -> &V {
        let key = (self.get_key)(state);
        let stale = self.last_key.as_ref() != Some(&key);
        if stale {
            self.last_value = Some((self.calc)(state));
            self.last_key = Some(key);
        }
        self.last_value.as_ref().expect("value computed above")
    }
}

// -------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_set_bumps_the_version() {
        let mut value = Versioned::new(1);
        let before = value.version();
        value.set(2);
        assert_eq!(*value.get(), 2);
        assert_ne!(value.version(), before);
    }

    #[test]
    fn test_memoized_recomputes_only_on_key_change() {
        let runs = Rc::new(Cell::new(0u32));
        let counter = runs.clone();
        let mut doubled = Memoized::new(
            |s: &Versioned<i32>| s.version(),
            move |s: &Versioned<i32>| {
                counter.set(counter.get() + 1);
                s.get() * 2
            },
        );

        let mut state = Versioned::new(21);
        assert_eq!(*doubled.get(&state), 42);
        assert_eq!(*doubled.get(&state), 42);
        assert_eq!(runs.get(), 1, "unchanged key must not recompute");

        state.set(5);
        assert_eq!(*doubled.get(&state), 10);
        assert_eq!(runs.get(), 2);
    }
}
