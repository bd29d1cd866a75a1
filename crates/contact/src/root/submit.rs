use std::sync::Arc;

use crate::clock::{Scheduler, lock};

use super::{FormState, Transition};

impl<S: Scheduler> super::ContactPage<S> {
    /// Starts the simulated submission. Only one completion is ever pending:
    /// calls made while submitting or after completion are ignored.
    ///
    /// Required fields are gated by the input layer, not checked here.
    pub fn submit(&self) -> Transition {
        let cycle = {
            let mut inner = lock(&self.inner);
            let FormState::Idle(form) = &mut inner.state else {
                return Transition::Ignored;
            };

            let form = std::mem::take(form);
            inner.cycle += 1;
            let cycle = inner.cycle;
            inner.state = FormState::Submitting { form, cycle };

            cycle
        };

        let inner = Arc::downgrade(&self.inner);
        self.scheduler
            .schedule(self.delay, Box::new(move || super::complete(inner, cycle)));

        Transition::Applied
    }
}
