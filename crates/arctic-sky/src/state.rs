use crate::actions::{self, Action};
use crate::cache::Cache;
use crate::effects::{self, Effect};
use crate::store::Store;

/// Store plus derived-data cache plus the queues drained each frame.
/// Input handlers `dispatch`; the app flushes actions, then effects, at the
/// start of the next frame, and the whole UI redraws from the result.
pub struct State {
    pub store: Store,
    pub cache: Cache,
    action_queue: Vec<Action>,
    effect_queue: Vec<Effect>,
}

impl State {
    pub fn new(store: Store) -> Self {
        Self {
            store,
            cache: Cache::new(),
            action_queue: Vec::new(),
            effect_queue: Vec::new(),
        }
    }

    /// Queue an action for the next flush.
    pub fn dispatch(&mut self, action: Action) {
        self.action_queue.push(action);
    }

    /// Apply all pending actions, collecting the effects they produce.
    pub fn flush_actions(&mut self) {
        let actions = std::mem::take(&mut self.action_queue);
        for action in actions {
            let mut effects = actions::update(&mut self.store, action);
            self.effect_queue.append(&mut effects);
        }
    }

    /// Run all pending effects.
    pub fn flush_effects(&mut self) {
        let effects = std::mem::take(&mut self.effect_queue);
        for effect in effects {
            effects::run(&mut self.store, effect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use observations::{Dataset, Month};

    #[test]
    fn test_dispatch_applies_on_flush_in_order() {
        let mut state = State::new(Store::new(Dataset::default()));
        state.dispatch(Action::JumpToMonth {
            month: Month::from_index(4).unwrap(),
        });
        state.dispatch(Action::JumpToMonth {
            month: Month::from_index(9).unwrap(),
        });

        // Nothing moves until the flush.
        assert_eq!(state.store.current_month, Month::JANUARY);
        state.flush_actions();
        assert_eq!(state.store.current_month.index(), 9);
    }
}
