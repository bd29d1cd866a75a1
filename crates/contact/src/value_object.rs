use std::str::FromStr;

use strum::{AsRefStr, Display, EnumString};

/// Pages reachable from the contact page call-to-action buttons.
#[derive(EnumString, Display, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "kebab-case")]
pub enum Destination {
    Chatbot,
    SoilAnalysis,
}

impl Destination {
    /// Looks a destination up by its kebab-case name.
    pub fn find(name: &str) -> bindisa_shared::Result<Self> {
        Self::from_str(name).map_err(|_| bindisa_shared::Error::NotFound)
    }

    pub fn path(&self) -> &'static str {
        match self {
            Destination::Chatbot => "/chatbot",
            Destination::SoilAnalysis => "/soil-analysis",
        }
    }
}

/// What activating a link does: move inside the site or hand a URI
/// (`tel:`, `mailto:`, map) to the browser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Navigate(Destination),
    Open(String),
}

impl Action {
    pub fn call(phone: &str) -> Self {
        let number: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
        Self::Open(format!("tel:{number}"))
    }

    pub fn mail(email: &str) -> Self {
        Self::Open(format!("mailto:{}", email.trim()))
    }

    pub fn href(&self) -> String {
        match self {
            Action::Navigate(destination) => format!("/contact/go/{destination}"),
            Action::Open(uri) => uri.to_owned(),
        }
    }

    /// Web URIs open in a new tab, dialer and mail handlers do not.
    pub fn opens_new_tab(&self) -> bool {
        matches!(
            self,
            Action::Open(uri) if uri.starts_with("http://") || uri.starts_with("https://")
        )
    }
}

/// Either a translation key or text shown verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Text {
    Key(&'static str),
    Plain(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum ChannelKind {
    Phone,
    Email,
    Office,
}

impl ChannelKind {
    pub fn label_key(&self) -> &'static str {
        match self {
            ChannelKind::Phone => "contact.channel-phone",
            ChannelKind::Email => "contact.channel-email",
            ChannelKind::Office => "contact.channel-office",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactChannel {
    pub kind: ChannelKind,
    pub value: String,
    pub description: Text,
    pub action: Action,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallToAction {
    pub label_key: &'static str,
    pub action: Action,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hero {
    pub title_key: &'static str,
    pub subtitle_key: &'static str,
    pub description_key: &'static str,
    pub primary: CallToAction,
    pub secondary: CallToAction,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BusinessHours {
    pub days_key: &'static str,
    pub hours: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OfficeInfo {
    pub address_key: &'static str,
    pub cin: String,
    pub hours: Vec<BusinessHours>,
    pub languages: Vec<String>,
    pub map_embed_url: String,
    pub map_title: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaqEntry {
    pub question_key: &'static str,
    pub answer_key: &'static str,
}
