use std::time::Duration;

use bindisa_contact::{ContactPage, Field, ManualScheduler};

pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);

pub fn setup_page() -> (ContactPage<ManualScheduler>, ManualScheduler) {
    let clock = ManualScheduler::new();
    let page = ContactPage::new(clock.clone());

    (page, clock)
}

#[allow(dead_code)]
pub fn fill_form(page: &ContactPage<ManualScheduler>) {
    fill_form_with(
        page,
        [
            (Field::Name, "Asha"),
            (Field::Phone, "9999999999"),
            (Field::Email, "a@b.com"),
            (Field::Subject, "Soil test"),
            (Field::Message, "Need help"),
        ],
    );
}

#[allow(dead_code)]
pub fn fill_form_with<'a>(
    page: &ContactPage<ManualScheduler>,
    values: impl IntoIterator<Item = (Field, &'a str)>,
) {
    for (field, value) in values.into_iter() {
        assert!(page.update_field(field, value).is_applied());
    }
}
