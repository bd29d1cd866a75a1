use crate::clock::{Scheduler, lock};

use super::{FormState, Transition};

impl<S: Scheduler> super::ContactPage<S> {
    /// "Send another message": back to an empty editable form.
    pub fn reset(&self) -> Transition {
        let mut inner = lock(&self.inner);
        if !inner.state.is_submitted() {
            return Transition::Ignored;
        }

        inner.state = FormState::default();

        Transition::Applied
    }
}
