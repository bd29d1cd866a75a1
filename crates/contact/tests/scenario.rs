use std::time::Duration;

use bindisa_contact::{ContactForm, Field, FormState, ManualScheduler};
use strum::VariantArray;

mod helpers;

#[test]
fn test_contact_form_round_trip() {
    let (page, clock) = helpers::setup_page();
    assert!(page.state().is_idle());

    page.update_field(Field::Name, "Asha");
    page.update_field(Field::Phone, "9999999999");
    page.update_field(Field::Email, "a@b.com");
    page.update_field(Field::Subject, "Soil test");
    page.update_field(Field::Message, "Need help");
    assert!(page.form().is_complete());

    page.submit();
    let state = page.state();
    assert!(state.is_submitting());
    assert!(!state.is_submitted());

    clock.advance(Duration::from_millis(1500));
    let state = page.state();
    assert!(state.is_submitted());
    assert!(!state.is_submitting());
    for field in Field::VARIANTS {
        assert_eq!(state.form().get(*field), "");
    }

    page.reset();
    assert_eq!(page.state(), FormState::Idle(ContactForm::default()));
}

#[test]
fn test_second_cycle_after_reset() {
    let (page, clock) = helpers::setup_page();

    for name in ["Asha", "Ravi"] {
        helpers::fill_form_with(&page, [(Field::Name, name), (Field::Message, "hello")]);
        page.submit();
        clock.advance(helpers::SUBMIT_DELAY);
        assert!(page.is_submitted());
        page.reset();
    }

    assert_eq!(clock.now(), helpers::SUBMIT_DELAY * 2);
    assert!(page.state().is_idle());
}

#[test]
fn test_dropped_page_discards_pending_completion() {
    let clock = ManualScheduler::new();
    let page = bindisa_contact::ContactPage::new(clock.clone());
    helpers::fill_form(&page);
    page.submit();

    drop(page);

    assert_eq!(clock.pending(), 1);
    // the timer still fires, it just has nothing left to update
    assert_eq!(clock.advance(helpers::SUBMIT_DELAY), 1);
    assert_eq!(clock.pending(), 0);
}
