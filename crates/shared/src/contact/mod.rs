use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString, VariantArray};
use validator::Validate;

#[derive(
    EnumString,
    Display,
    VariantArray,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Deserialize,
    AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Phone,
    Email,
    Subject,
    Message,
}

impl Field {
    /// Translation key of the field label.
    pub fn label_key(&self) -> &'static str {
        match self {
            Field::Name => "contact.name",
            Field::Phone => "contact.phone",
            Field::Email => "contact.email",
            Field::Subject => "contact.subject",
            Field::Message => "contact.message",
        }
    }

    pub fn placeholder_key(&self) -> &'static str {
        match self {
            Field::Name => "contact.name-placeholder",
            Field::Phone => "contact.phone-placeholder",
            Field::Email => "contact.email-placeholder",
            Field::Subject => "contact.subject-placeholder",
            Field::Message => "contact.message-placeholder",
        }
    }

    /// HTML input type, `None` for the multi-line message.
    pub fn input_type(&self) -> Option<&'static str> {
        match self {
            Field::Name | Field::Subject => Some("text"),
            Field::Phone => Some("tel"),
            Field::Email => Some("email"),
            Field::Message => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub const fn new() -> Self {
        Self {
            name: String::new(),
            phone: String::new(),
            email: String::new(),
            subject: String::new(),
            message: String::new(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Phone => &mut self.phone,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };

        *slot = value.into();
    }

    /// Every field holds a value, the way required inputs gate a submit.
    pub fn is_complete(&self) -> bool {
        Field::VARIANTS.iter().all(|f| !self.get(*f).is_empty())
    }

    pub fn is_empty(&self) -> bool {
        Field::VARIANTS.iter().all(|f| self.get(*f).is_empty())
    }
}

/// A posted contact form. Every field is required.
#[derive(Clone, Debug, Default, Deserialize, Validate)]
pub struct ContactInput {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub phone: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub subject: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub message: String,
}

impl ContactInput {
    pub fn values(&self) -> [(Field, &str); 5] {
        [
            (Field::Name, self.name.as_str()),
            (Field::Phone, self.phone.as_str()),
            (Field::Email, self.email.as_str()),
            (Field::Subject, self.subject.as_str()),
            (Field::Message, self.message.as_str()),
        ]
    }

    pub fn check(&self) -> crate::Result<()> {
        self.validate()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn field_names_round_trip_through_strum() {
        for field in Field::VARIANTS {
            assert_eq!(Field::from_str(field.as_ref()).ok(), Some(*field));
        }
        assert_eq!(Field::Message.to_string(), "message");
        assert!(Field::from_str("address").is_err());
    }

    #[test]
    fn set_touches_one_field() {
        let mut form = ContactForm::new();
        form.set(Field::Subject, "Soil test");

        assert_eq!(form.get(Field::Subject), "Soil test");
        assert_eq!(form.name, "");
        assert_eq!(form.message, "");
        assert!(!form.is_empty());
        assert!(!form.is_complete());
    }

    #[test]
    fn complete_form() {
        let mut form = ContactForm::default();
        for field in Field::VARIANTS {
            form.set(*field, "x");
        }
        assert!(form.is_complete());
    }

    #[test]
    fn input_requires_every_field() {
        let input = ContactInput {
            name: "Asha".to_owned(),
            email: "a@b.com".to_owned(),
            ..Default::default()
        };

        let Err(crate::Error::Validate(errors)) = input.check() else {
            panic!("expected validation error");
        };
        let fields = errors.field_errors();
        assert!(fields.contains_key("phone"));
        assert!(fields.contains_key("subject"));
        assert!(fields.contains_key("message"));
        assert!(!fields.contains_key("name"));
    }

    #[test]
    fn complete_input_passes() {
        let input = ContactInput {
            name: "Asha".to_owned(),
            phone: "9999999999".to_owned(),
            email: "a@b.com".to_owned(),
            subject: "Soil test".to_owned(),
            message: "Need help".to_owned(),
        };

        assert!(input.check().is_ok());
        assert_eq!(input.values()[3], (Field::Subject, "Soil test"));
    }
}
