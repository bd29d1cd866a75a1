use bindisa_shared::contact::Field;

use crate::clock::{Scheduler, lock};

use super::{FormState, Transition};

impl<S: Scheduler> super::ContactPage<S> {
    /// Sets one field while the form is editable. No validation.
    pub fn update_field(&self, field: Field, value: impl Into<String>) -> Transition {
        let mut inner = lock(&self.inner);
        let FormState::Idle(form) = &mut inner.state else {
            return Transition::Ignored;
        };

        form.set(field, value);

        Transition::Applied
    }
}
