use std::{
    sync::{Arc, Mutex, Weak},
    time::Duration,
};

use bindisa_shared::contact::ContactForm;
use strum::IntoStaticStr;

use crate::clock::{Scheduler, TokioScheduler, lock};

mod reset;
mod submit;
mod update_field;

/// Time the simulated submission takes before it reports success.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);

static EMPTY_FORM: ContactForm = ContactForm::new();

#[derive(Clone, Debug, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum FormState {
    Idle(ContactForm),
    Submitting { form: ContactForm, cycle: u64 },
    Submitted,
}

impl Default for FormState {
    fn default() -> Self {
        Self::Idle(ContactForm::new())
    }
}

impl FormState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle(_))
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting { .. })
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self, Self::Submitted)
    }

    /// Field values as the view shows them. Empty once submitted.
    pub fn form(&self) -> &ContactForm {
        match self {
            Self::Idle(form) | Self::Submitting { form, .. } => form,
            Self::Submitted => &EMPTY_FORM,
        }
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }
}

/// Whether an operation moved the state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Applied,
    Ignored,
}

impl Transition {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

#[derive(Default)]
struct Inner {
    state: FormState,
    cycle: u64,
}

/// Controller of one contact page visit.
///
/// Dropping it tears the visit down: a completion still pending on the
/// scheduler only holds a weak handle and is discarded when it fires.
pub struct ContactPage<S: Scheduler = TokioScheduler> {
    inner: Arc<Mutex<Inner>>,
    scheduler: S,
    delay: Duration,
}

impl<S: Scheduler> ContactPage<S> {
    pub fn new(scheduler: S) -> Self {
        Self::with_delay(scheduler, SUBMIT_DELAY)
    }

    pub fn with_delay(scheduler: S, delay: Duration) -> Self {
        Self {
            inner: Arc::default(),
            scheduler,
            delay,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn state(&self) -> FormState {
        lock(&self.inner).state.clone()
    }

    pub fn is_submitting(&self) -> bool {
        lock(&self.inner).state.is_submitting()
    }

    pub fn is_submitted(&self) -> bool {
        lock(&self.inner).state.is_submitted()
    }

    pub fn form(&self) -> ContactForm {
        lock(&self.inner).state.form().clone()
    }
}

fn complete(inner: Weak<Mutex<Inner>>, cycle: u64) {
    let Some(inner) = inner.upgrade() else {
        tracing::debug!(cycle, "contact page gone, submission completion discarded");
        return;
    };

    let mut inner = lock(&inner);
    let owns_cycle =
        matches!(inner.state, FormState::Submitting { cycle: current, .. } if current == cycle);

    if !owns_cycle {
        tracing::debug!(cycle, state = inner.state.name(), "stale completion ignored");
        return;
    }

    inner.state = FormState::Submitted;
    tracing::debug!(cycle, "contact form submitted");
}
