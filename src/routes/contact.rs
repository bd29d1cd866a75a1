use axum::{
    extract::{Form, Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use bindisa_contact::{
    ContactForm, ContactPage, Destination, Field, FormState, PageContent, Text, Transition,
};
use bindisa_shared::contact::ContactInput;
use serde::Deserialize;
use strum::VariantArray;

use crate::{
    routes::AppState,
    template::{NotFoundTemplate, SERVER_ERROR_MESSAGE, Template, filters},
    visit::{SharedScheduler, Visits},
};

pub const VISIT_COOKIE: &str = "contact_visit";

/// Set by the page script on requests that want a form fragment back.
pub const FRAGMENT_HEADER: &str = "ts-request";

const STATUS_POLL_MS: u64 = 500;

pub struct FieldView {
    pub name: &'static str,
    pub label_key: &'static str,
    pub placeholder_key: &'static str,
    pub input_type: Option<&'static str>,
    pub value: String,
}

pub struct FormView {
    pub state: &'static str,
    pub is_submitting: bool,
    pub is_submitted: bool,
    pub fields: Vec<FieldView>,
    pub error: Option<&'static str>,
    pub poll_ms: u64,
    pub refresh_secs: u64,
}

impl FormView {
    fn new(state: &FormState, app_state: &AppState) -> Self {
        let fields = Field::VARIANTS
            .iter()
            .map(|field| FieldView {
                name: field.as_ref(),
                label_key: field.label_key(),
                placeholder_key: field.placeholder_key(),
                input_type: field.input_type(),
                value: state.form().get(*field).to_owned(),
            })
            .collect();

        let delay_ms = app_state.config.contact.submit_delay_ms;

        Self {
            state: state.name(),
            is_submitting: state.is_submitting(),
            is_submitted: state.is_submitted(),
            fields,
            error: None,
            poll_ms: STATUS_POLL_MS.min(delay_ms),
            refresh_secs: delay_ms.div_ceil(1000).max(1),
        }
    }

    /// Idle view echoing a posted form, built without touching any controller.
    fn from_input(input: &ContactInput, app_state: &AppState) -> Self {
        let mut form = ContactForm::new();
        for (field, value) in input.values() {
            form.set(field, value);
        }

        Self::new(&FormState::Idle(form), app_state)
    }

    fn with_error(mut self, error: &'static str) -> Self {
        self.error = Some(error);
        self
    }
}

#[derive(askama::Template)]
#[template(path = "pages/contact.html")]
pub struct ContactTemplate<'a> {
    pub lang: String,
    pub content: &'a PageContent,
    pub form: FormView,
}

#[derive(askama::Template)]
#[template(path = "partials/contact-form.html")]
pub struct ContactFormTemplate {
    pub form: FormView,
}

/// Runs `f` against the visitor's controller, starting a new visit when the
/// cookie is missing or points to an expired one.
async fn with_visit<R>(
    visits: &Visits,
    jar: CookieJar,
    f: impl Fn(&ContactPage<SharedScheduler>) -> R,
) -> (CookieJar, R) {
    let id = jar.get(VISIT_COOKIE).map(|c| c.value().to_owned());
    if let Some(id) = id {
        match visits.with(&id, &f).await {
            Some(result) => return (jar, result),
            None => tracing::debug!(visit = %id, "unknown contact visit, starting a new one"),
        }
    }

    let (id, result) = visits.start_with(&f).await;
    let cookie = Cookie::build((VISIT_COOKIE, id))
        .path("/contact")
        .http_only(true)
        .same_site(SameSite::Lax);

    (jar.add(cookie), result)
}

/// Runs `f` against the visitor's controller if the visit is known. Never
/// starts a visit, so cookieless requests leave the registry alone.
async fn find_visit<R>(
    visits: &Visits,
    jar: &CookieJar,
    f: impl FnOnce(&ContactPage<SharedScheduler>) -> R,
) -> Option<R> {
    let id = jar.get(VISIT_COOKIE)?.value().to_owned();

    visits.with(&id, f).await
}

fn render_form(
    template: &Template,
    app_state: &AppState,
    headers: &HeaderMap,
    form: FormView,
) -> Response {
    if headers.contains_key(FRAGMENT_HEADER) {
        return template.render(ContactFormTemplate { form });
    }

    template.render(ContactTemplate {
        lang: template.preferred_language().to_owned(),
        content: &app_state.content,
        form,
    })
}

pub async fn page(
    template: Template,
    State(app_state): State<AppState>,
    jar: CookieJar,
) -> impl IntoResponse {
    let (jar, state) = with_visit(&app_state.visits, jar, |page| page.state()).await;

    let form = FormView::new(&state, &app_state);

    (jar, render_form(&template, &app_state, &HeaderMap::new(), form))
}

#[derive(Deserialize)]
pub struct FieldInput {
    pub field: Field,
    #[serde(default)]
    pub value: String,
}

pub async fn update_field(
    template: Template,
    State(app_state): State<AppState>,
    jar: CookieJar,
    Form(input): Form<FieldInput>,
) -> impl IntoResponse {
    let (jar, (transition, state)) = with_visit(&app_state.visits, jar, |page| {
        let transition = page.update_field(input.field, input.value.as_str());
        (transition, page.state())
    })
    .await;

    if transition.is_applied() {
        return (jar, StatusCode::NO_CONTENT).into_response();
    }

    tracing::debug!(field = %input.field, state = state.name(), "field update ignored");

    let form = FormView::new(&state, &app_state);

    (
        StatusCode::CONFLICT,
        jar,
        template.render(ContactFormTemplate { form }),
    )
        .into_response()
}

pub async fn submit(
    template: Template,
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Form(input): Form<ContactInput>,
) -> impl IntoResponse {
    if let Err(err) = input.check() {
        tracing::debug!(%err, "contact form submitted with required fields missing");

        let form = FormView::from_input(&input, &app_state).with_error("contact.required-error");

        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            render_form(&template, &app_state, &headers, form),
        )
            .into_response();
    }

    let (jar, (transition, state)) = with_visit(&app_state.visits, jar, |page| {
        for (field, value) in input.values() {
            page.update_field(field, value);
        }

        (page.submit(), page.state())
    })
    .await;

    if transition.is_applied() {
        tracing::info!(
            delay_ms = app_state.config.contact.submit_delay_ms,
            "contact form submission started"
        );
    } else {
        tracing::debug!(state = state.name(), "contact form submit ignored");
    }

    let form = FormView::new(&state, &app_state);

    (jar, render_form(&template, &app_state, &headers, form)).into_response()
}

pub async fn status(
    template: Template,
    State(app_state): State<AppState>,
    jar: CookieJar,
) -> impl IntoResponse {
    let state = find_visit(&app_state.visits, &jar, |page| page.state())
        .await
        .unwrap_or_default();

    let form = FormView::new(&state, &app_state);

    template.render(ContactFormTemplate { form })
}

pub async fn reset(
    template: Template,
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
) -> impl IntoResponse {
    let (transition, state) = find_visit(&app_state.visits, &jar, |page| {
        (page.reset(), page.state())
    })
    .await
    .unwrap_or((Transition::Ignored, FormState::default()));

    if !transition.is_applied() {
        tracing::debug!(state = state.name(), "contact form reset ignored");
    }

    let form = FormView::new(&state, &app_state);

    render_form(&template, &app_state, &headers, form)
}

/// Visitor navigated away: tear the visit down so a pending submission is
/// never observed.
pub async fn leave(State(app_state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    if let Some(id) = jar.get(VISIT_COOKIE).map(|c| c.value().to_owned()) {
        app_state.visits.end(&id).await;
    }

    (
        jar.remove(Cookie::build(VISIT_COOKIE).path("/contact")),
        StatusCode::NO_CONTENT,
    )
}

pub async fn go(template: Template, Path(target): Path<String>) -> Response {
    match Destination::find(&target) {
        Ok(destination) => {
            tracing::info!(%destination, "navigating from contact page");

            Redirect::to(destination.path()).into_response()
        }
        Err(bindisa_shared::Error::NotFound) => {
            let lang = template.preferred_language().to_owned();

            (
                StatusCode::NOT_FOUND,
                template.render(NotFoundTemplate { lang }),
            )
                .into_response()
        }
        Err(err) => {
            tracing::error!("{err}");

            (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE).into_response()
        }
    }
}
