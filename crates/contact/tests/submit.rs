use std::time::Duration;

use bindisa_contact::{ContactForm, FormState, Transition};

mod helpers;

#[test]
fn test_submit_enters_submitting_immediately() {
    let (page, clock) = helpers::setup_page();
    helpers::fill_form(&page);

    assert_eq!(page.submit(), Transition::Applied);
    assert!(page.is_submitting());
    assert!(!page.is_submitted());
    assert_eq!(clock.pending(), 1);

    // fields are held untouched while the submission is in flight
    assert_eq!(page.form().name, "Asha");
    assert_eq!(page.form().message, "Need help");
}

#[test]
fn test_submit_completes_exactly_after_delay() {
    let (page, clock) = helpers::setup_page();
    helpers::fill_form(&page);
    page.submit();

    assert_eq!(clock.advance(helpers::SUBMIT_DELAY - Duration::from_millis(1)), 0);
    assert!(page.is_submitting());
    assert_eq!(page.form().subject, "Soil test");

    assert_eq!(clock.advance(Duration::from_millis(1)), 1);
    assert_eq!(page.state(), FormState::Submitted);
    assert!(!page.is_submitting());
    assert_eq!(page.form(), ContactForm::default());
    assert_eq!(clock.now(), helpers::SUBMIT_DELAY);
}

#[test]
fn test_double_submit_schedules_one_completion() {
    let (page, clock) = helpers::setup_page();
    helpers::fill_form(&page);

    assert_eq!(page.submit(), Transition::Applied);
    clock.advance(Duration::from_millis(200));
    assert_eq!(page.submit(), Transition::Ignored);
    assert_eq!(clock.pending(), 1);

    // the single completion still lands 1500 ms after the first submit
    assert_eq!(clock.advance(Duration::from_millis(1299)), 0);
    assert_eq!(clock.advance(Duration::from_millis(1)), 1);
    assert!(page.is_submitted());

    assert_eq!(clock.advance(Duration::from_secs(10)), 0);
    assert!(page.is_submitted());
}

#[test]
fn test_submit_after_completion_is_ignored() {
    let (page, clock) = helpers::setup_page();
    helpers::fill_form(&page);
    page.submit();
    clock.advance(helpers::SUBMIT_DELAY);

    assert_eq!(page.submit(), Transition::Ignored);
    assert_eq!(clock.pending(), 0);
    assert!(page.is_submitted());
}

#[test]
fn test_custom_delay() {
    let clock = bindisa_contact::ManualScheduler::new();
    let page = bindisa_contact::ContactPage::with_delay(clock.clone(), Duration::from_millis(10));
    helpers::fill_form(&page);
    page.submit();

    assert_eq!(page.delay(), Duration::from_millis(10));
    clock.advance(Duration::from_millis(10));
    assert!(page.is_submitted());
}
