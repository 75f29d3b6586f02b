//! Static validation rules for the contact form.
//!
//! One immutable [`Rule`] per constrained field; each constraint carries its
//! own localized violation message so the validator needs nothing beyond the
//! field value and the active [`Locale`]. The table is `static` data built of
//! string literals and lazily compiled regexes, so concurrent form instances
//! share it without interference.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::i18n::Locale;

/// The closed set of contact-form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Company,
    Email,
    Phone,
    Interest,
    Message,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::Company,
        Field::Email,
        Field::Phone,
        Field::Interest,
        Field::Message,
    ];

    /// Fields the endpoint requires; marked touched on a rejected submit so
    /// their errors become visible.
    pub const MANDATORY: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Company => "company",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Interest => "interest",
            Field::Message => "message",
        }
    }

    /// The validation rule for this field, if it has one. A field without a
    /// rule is always valid.
    pub fn rule(self) -> Option<&'static Rule> {
        match self {
            Field::Name => Some(&NAME_RULE),
            Field::Company => Some(&COMPANY_RULE),
            Field::Email => Some(&EMAIL_RULE),
            Field::Phone => Some(&PHONE_RULE),
            Field::Interest => None,
            Field::Message => Some(&MESSAGE_RULE),
        }
    }

    pub fn is_required(self) -> bool {
        self.rule().is_some_and(|rule| rule.required.is_some())
    }
}

/// A violation message in both site languages.
#[derive(Debug)]
pub struct Text {
    it: &'static str,
    en: &'static str,
}

impl Text {
    pub fn for_locale(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::It => self.it,
            Locale::En => self.en,
        }
    }
}

#[derive(Debug)]
pub struct MinLength {
    pub limit: usize,
    pub message: Text,
}

#[derive(Debug)]
pub struct Pattern {
    pub regex: &'static Lazy<Regex>,
    pub message: Text,
}

/// Immutable per-field validation rule. `required: Some(..)` doubles as the
/// required flag and its message.
#[derive(Debug)]
pub struct Rule {
    pub required: Option<Text>,
    pub min_length: Option<MinLength>,
    pub pattern: Option<Pattern>,
}

static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-ZÀ-ÿ\s-]+$").expect("name pattern compiles"));

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+]?[(]?[0-9]{3}[)]?[-\s.]?[0-9]{3}[-\s.]?[0-9]{4,6}$")
        .expect("phone pattern compiles")
});

static NAME_RULE: Rule = Rule {
    required: Some(Text {
        it: "Il nome è obbligatorio",
        en: "Name is required",
    }),
    min_length: Some(MinLength {
        limit: 2,
        message: Text {
            it: "Il nome deve contenere almeno 2 caratteri",
            en: "Name must be at least 2 characters long",
        },
    }),
    pattern: Some(Pattern {
        regex: &NAME_PATTERN,
        message: Text {
            it: "Il nome può contenere solo lettere",
            en: "Name can only contain letters",
        },
    }),
};

static EMAIL_RULE: Rule = Rule {
    required: Some(Text {
        it: "L'email è obbligatoria",
        en: "Email is required",
    }),
    min_length: None,
    pattern: Some(Pattern {
        regex: &EMAIL_PATTERN,
        message: Text {
            it: "Inserisci un indirizzo email valido",
            en: "Please enter a valid email address",
        },
    }),
};

static MESSAGE_RULE: Rule = Rule {
    required: Some(Text {
        it: "Il messaggio è obbligatorio",
        en: "Message is required",
    }),
    min_length: Some(MinLength {
        limit: 10,
        message: Text {
            it: "Il messaggio deve contenere almeno 10 caratteri",
            en: "Message must be at least 10 characters long",
        },
    }),
    pattern: None,
};

static COMPANY_RULE: Rule = Rule {
    required: None,
    min_length: Some(MinLength {
        limit: 2,
        message: Text {
            it: "Il nome dell'azienda deve contenere almeno 2 caratteri",
            en: "Company name must be at least 2 characters long",
        },
    }),
    pattern: None,
};

static PHONE_RULE: Rule = Rule {
    required: None,
    min_length: None,
    pattern: Some(Pattern {
        regex: &PHONE_PATTERN,
        message: Text {
            it: "Inserisci un numero di telefono valido",
            en: "Please enter a valid phone number",
        },
    }),
};

/// Validate a single field value. `None` means valid.
///
/// Order matters and mirrors how errors surface in the UI: the required
/// check fires only on empty values; length and pattern checks fire only on
/// non-empty ones, so an optional field left blank never reports an error.
pub fn validate_field(field: Field, value: &str, locale: Locale) -> Option<String> {
    let rule = field.rule()?;

    if value.is_empty() {
        return rule
            .required
            .as_ref()
            .map(|message| message.for_locale(locale).to_string());
    }

    if let Some(min) = &rule.min_length {
        if value.chars().count() < min.limit {
            return Some(min.message.for_locale(locale).to_string());
        }
    }

    if let Some(pattern) = &rule.pattern {
        if !pattern.regex.is_match(value) {
            return Some(pattern.message.for_locale(locale).to_string());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_fields_reject_empty_values() {
        for field in Field::MANDATORY {
            let it = validate_field(field, "", Locale::It);
            let en = validate_field(field, "", Locale::En);
            assert!(it.is_some(), "{field:?} must be required");
            assert!(en.is_some());
            assert_ne!(it, en, "messages must be localized");
        }
        assert_eq!(
            validate_field(Field::Name, "", Locale::En).as_deref(),
            Some("Name is required")
        );
        assert_eq!(
            validate_field(Field::Name, "", Locale::It).as_deref(),
            Some("Il nome è obbligatorio")
        );
    }

    #[test]
    fn optional_fields_accept_empty_values() {
        for field in [Field::Company, Field::Phone, Field::Interest] {
            assert_eq!(validate_field(field, "", Locale::It), None);
        }
    }

    #[test]
    fn interest_has_no_rule() {
        assert!(Field::Interest.rule().is_none());
        assert_eq!(validate_field(Field::Interest, "anything", Locale::En), None);
    }

    #[test]
    fn name_accepts_letters_rejects_digits() {
        assert_eq!(validate_field(Field::Name, "Jane Doe", Locale::En), None);
        assert_eq!(validate_field(Field::Name, "Anna-Maria Però", Locale::It), None);
        assert_eq!(
            validate_field(Field::Name, "Jane99", Locale::En).as_deref(),
            Some("Name can only contain letters")
        );
        // Single character trips min-length before the pattern.
        assert_eq!(
            validate_field(Field::Name, "J", Locale::En).as_deref(),
            Some("Name must be at least 2 characters long")
        );
    }

    #[test]
    fn email_shape_is_enforced() {
        assert_eq!(validate_field(Field::Email, "a@b.co", Locale::En), None);
        assert_eq!(validate_field(Field::Email, "jane@x.com", Locale::It), None);
        for bad in ["plainaddress", "no@tld", "missing.domain@", "two words@x.it", "a@b"] {
            assert_eq!(
                validate_field(Field::Email, bad, Locale::En).as_deref(),
                Some("Please enter a valid email address"),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn message_min_length_boundary() {
        assert_eq!(
            validate_field(Field::Message, "123456789", Locale::En).as_deref(),
            Some("Message must be at least 10 characters long")
        );
        assert_eq!(validate_field(Field::Message, "1234567890", Locale::En), None);
    }

    #[test]
    fn min_length_counts_characters_not_bytes() {
        // Two accented characters are four bytes but satisfy min length 2.
        assert_eq!(validate_field(Field::Company, "Àè", Locale::It), None);
    }

    #[test]
    fn phone_pattern_accepts_common_shapes() {
        for good in ["(021) 234-5678", "021.234.5678", "021 234 5678", "0212345678", "+021-234-567890"] {
            assert_eq!(validate_field(Field::Phone, good, Locale::En), None, "{good}");
        }
        assert!(validate_field(Field::Phone, "not a phone", Locale::En).is_some());
    }
}
