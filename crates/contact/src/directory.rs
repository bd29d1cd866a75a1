use crate::{
    Action, BusinessHours, CallToAction, ChannelKind, ContactChannel, Destination, FaqEntry,
    Hero, OfficeInfo, Text,
};

/// Company contact details the page is built from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Directory {
    pub phone: String,
    pub email: String,
    pub office: String,
    pub postal_code: String,
    pub cin: String,
    pub map_query_url: String,
    pub map_embed_url: String,
}

impl Default for Directory {
    fn default() -> Self {
        Self {
            phone: "+91 9631157174".to_owned(),
            email: "info@bindisaagritech.com".to_owned(),
            office: "Gaya, Bihar, India".to_owned(),
            postal_code: "823001".to_owned(),
            cin: "U46539BR2025PTC073688".to_owned(),
            map_query_url: "https://maps.google.com/?q=Gaya,Bihar,India".to_owned(),
            map_embed_url: DEFAULT_MAP_EMBED_URL.to_owned(),
        }
    }
}

pub const DEFAULT_MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d230247.02935073863!2d84.94721645429687!3d24.750224699999995!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x39f32a93fae0963d%3A0x9333298d80dbc58b!2sGaya%2C%20Bihar!5e0!3m2!1sen!2sin!4v1647254839685!5m2!1sen!2sin";

/// Everything static on the contact page, built once at startup and shared
/// read-only by every visit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageContent {
    pub hero: Hero,
    pub channels: Vec<ContactChannel>,
    pub office: OfficeInfo,
    pub faq: Vec<FaqEntry>,
    pub calls_to_action: Vec<CallToAction>,
}

impl PageContent {
    pub fn new(directory: &Directory) -> Self {
        let hero = Hero {
            title_key: "contact.title",
            subtitle_key: "contact.subtitle",
            description_key: "contact.description",
            primary: CallToAction {
                label_key: "contact.call-now",
                action: Action::call(&directory.phone),
            },
            secondary: CallToAction {
                label_key: "contact.send-email",
                action: Action::mail(&directory.email),
            },
        };

        let channels = vec![
            ContactChannel {
                kind: ChannelKind::Phone,
                value: directory.phone.to_owned(),
                description: Text::Key("contact.channel-phone-description"),
                action: Action::call(&directory.phone),
            },
            ContactChannel {
                kind: ChannelKind::Email,
                value: directory.email.to_owned(),
                description: Text::Key("contact.channel-email-description"),
                action: Action::mail(&directory.email),
            },
            ContactChannel {
                kind: ChannelKind::Office,
                value: directory.office.to_owned(),
                description: Text::Plain(directory.postal_code.to_owned()),
                action: Action::Open(directory.map_query_url.to_owned()),
            },
        ];

        let office = OfficeInfo {
            address_key: "contact.gaya-address",
            cin: directory.cin.to_owned(),
            hours: vec![
                BusinessHours {
                    days_key: "contact.hours-weekdays",
                    hours: "8:00 AM - 6:00 PM".to_owned(),
                },
                BusinessHours {
                    days_key: "contact.hours-sunday",
                    hours: "10:00 AM - 4:00 PM".to_owned(),
                },
            ],
            languages: vec!["Hindi".to_owned(), "Marathi".to_owned(), "English".to_owned()],
            map_embed_url: directory.map_embed_url.to_owned(),
            map_title: "Bindisa Agritech Office Location".to_owned(),
        };

        let faq = FAQ_KEYS
            .into_iter()
            .map(|(question_key, answer_key)| FaqEntry {
                question_key,
                answer_key,
            })
            .collect();

        let calls_to_action = vec![
            CallToAction {
                label_key: "contact.cta-chatbot",
                action: Action::Navigate(Destination::Chatbot),
            },
            CallToAction {
                label_key: "contact.cta-soil-analysis",
                action: Action::Navigate(Destination::SoilAnalysis),
            },
        ];

        Self {
            hero,
            channels,
            office,
            faq,
            calls_to_action,
        }
    }

    pub fn channel(&self, kind: ChannelKind) -> Option<&ContactChannel> {
        self.channels.iter().find(|c| c.kind == kind)
    }
}

impl Default for PageContent {
    fn default() -> Self {
        Self::new(&Directory::default())
    }
}

const FAQ_KEYS: [(&str, &str); 4] = [
    ("contact.faq-getting-started-q", "contact.faq-getting-started-a"),
    ("contact.faq-crops-q", "contact.faq-crops-a"),
    ("contact.faq-on-site-q", "contact.faq-on-site-a"),
    ("contact.faq-small-farmers-q", "contact.faq-small-farmers-a"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_content_matches_company_details() {
        let content = PageContent::default();

        assert_eq!(content.channels.len(), 3);
        assert_eq!(content.faq.len(), 4);

        let phone = content.channel(ChannelKind::Phone).unwrap();
        assert_eq!(phone.action.href(), "tel:+919631157174");

        let email = content.channel(ChannelKind::Email).unwrap();
        assert_eq!(email.action.href(), "mailto:info@bindisaagritech.com");

        let office = content.channel(ChannelKind::Office).unwrap();
        assert_eq!(office.description, Text::Plain("823001".to_owned()));
        assert!(office.action.opens_new_tab());

        assert_eq!(content.hero.primary.action, phone.action);
        assert_eq!(content.office.cin, "U46539BR2025PTC073688");
    }

    #[test]
    fn directory_overrides_flow_into_channels() {
        let directory = Directory {
            phone: "+91 11 2222 3333".to_owned(),
            ..Default::default()
        };
        let content = PageContent::new(&directory);

        assert_eq!(content.hero.primary.action.href(), "tel:+911122223333");
        assert_eq!(
            content.channel(ChannelKind::Phone).map(|c| c.value.as_str()),
            Some("+91 11 2222 3333")
        );
    }
}
