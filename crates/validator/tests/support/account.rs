//! The account fixture: a record that exercises every check family.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use serde::{Serialize, Serializer};
use sieve_validator::prelude::*;

use super::reference::{Reflect, Reflected};

/// Bytes per pixel in an avatar payload.
pub const CHANNELS: usize = 4;

pub const SECRET_PATTERN: &str = "^[0-9a-f]{32}$";
pub const PROMO_CODE_PATTERN: &str = r"^[A-Z][a-z]+[A-Z][a-z]+\d{4}$";

pub struct Patterns {
    pub secret: Pattern,
    pub promo_code: Pattern,
}

static PATTERNS: LazyLock<Patterns> = LazyLock::new(|| Patterns {
    secret: register_pattern("secret", SECRET_PATTERN).expect("register secret"),
    promo_code: register_pattern("promo_code", PROMO_CODE_PATTERN).expect("register promo_code"),
});

/// Registers the account's pattern checks in the global registry, once per
/// process.
pub fn patterns() -> &'static Patterns {
    &PATTERNS
}

// ============================================================================
// SIZE
// ============================================================================

/// Avatar dimensions. Equality, hashing and ordering are field-wise, so
/// avatars are visited by width, then height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    pub const fn square(side: u16) -> Self {
        Self {
            width: side,
            height: side,
        }
    }

    /// Expected payload length for an avatar of this size.
    pub fn byte_len(self) -> usize {
        usize::from(self.width) * usize::from(self.height) * CHANNELS
    }

    pub fn blank(self) -> Vec<u8> {
        vec![0; self.byte_len()]
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl Serialize for Size {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl Validate for Size {
    fn collect(&self, errors: &mut ValidationErrors) {
        errors
            .field("width", &self.width)
            .check(Gte(32_u16))
            .check(Lte(512_u16));
        errors
            .field("height", &self.height)
            .check(Gte(32_u16))
            .check(Lte(512_u16));
    }
}

impl Reflect for Size {
    fn reflect(&self) -> Vec<Reflected> {
        vec![
            Reflected::new("width", &self.width, "gte=32,lte=512"),
            Reflected::new("height", &self.height, "gte=32,lte=512"),
        ]
    }
}

// ============================================================================
// ACCOUNT
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: String,
    pub login: String,
    pub password: String,
    pub email: String,
    pub phone: String,
    pub age: u8,
    pub avatars: BTreeMap<Size, Vec<u8>>,
    pub secret: String,
    pub promo_code: String,
    pub first_name: String,
    pub last_name: String,
    pub display_name: String,
    pub tags: Vec<String>,
    pub company: String,
    pub job_title: String,
    pub country: String,
    pub vat_id: String,
    pub recovery_email: String,
}

impl Account {
    /// An account that passes every check.
    pub fn valid() -> Self {
        patterns();
        Self {
            id: "a0e6c2b4-5f1d-4c3e-9b8a-7d6e5f4c3b2a".into(),
            login: "yavuser".into(),
            password: "DasPasswort#123".into(),
            email: "yav@example.com".into(),
            phone: "+14155551234".into(),
            age: 30,
            avatars: [32, 64, 128]
                .map(Size::square)
                .into_iter()
                .map(|size| (size, size.blank()))
                .collect(),
            secret: "0123456789abcdef0123456789abcdef".into(),
            promo_code: "SummerSale2024".into(),
            first_name: "Yav".into(),
            last_name: "Yav".into(),
            display_name: "Yet Another Validator".into(),
            tags: vec!["rust".into(), "validation".into()],
            company: "Acme".into(),
            job_title: "Engineer".into(),
            country: "DE".into(),
            vat_id: "DE123456789".into(),
            recovery_email: String::new(),
        }
    }
}

impl Validate for Account {
    fn collect(&self, errors: &mut ValidationErrors) {
        let patterns = patterns();

        errors.field("id", &self.id).check(Required).check(Uuid);
        errors
            .field("login", &self.login)
            .check(Required)
            .check(Min(4_usize))
            .check(Max(20_usize))
            .check(StartsWith(CharClass::Alpha))
            .check(Lowercase);
        errors
            .field("password", &self.password)
            .check(Required)
            .check(Min(8_usize))
            .check(Max(32_usize))
            .check(Text)
            .check(Contains(CharClass::LowerAlpha))
            .check(Contains(CharClass::UpperAlpha))
            .check(Contains(CharClass::Digit))
            .check(Contains(CharClass::SpecialCharacter))
            .check(Excludes(CharClass::Whitespace));
        errors
            .field("email", &self.email)
            .check(required_without_any([sibling("phone", &self.phone)]))
            .omit_empty()
            .check(Email);
        errors
            .field("phone", &self.phone)
            .check(required_without_any([sibling("email", &self.email)]))
            .omit_empty()
            .check(E164);
        errors
            .field("age", &self.age)
            .check(Gte(18_u8))
            .check(Lte(100_u8));

        errors
            .field("avatars", &self.avatars)
            .check(Min(3_usize))
            .check(Max(8_usize));
        for (size, pixels) in &self.avatars {
            errors.nest(|| format!("avatars[{size}]"), size);
            errors
                .field_with(|| format!("avatars[{size}]"), pixels)
                .check(Len(size.byte_len()));
        }

        errors
            .field("secret", &self.secret)
            .check(Required)
            .check(&patterns.secret);
        errors
            .field("promo_code", &self.promo_code)
            .omit_empty()
            .check(&patterns.promo_code);
        errors
            .field("first_name", &self.first_name)
            .check(Required)
            .check(StartsWith(CharClass::UpperAlpha));
        errors
            .field("last_name", &self.last_name)
            .check(Required)
            .check(EndsWith(CharClass::LowerAlpha));
        errors
            .field("display_name", &self.display_name)
            .check(Required)
            .check(Title);
        errors
            .field("tags", &self.tags)
            .check(Max(5_usize))
            .check(Unique);
        errors
            .field("job_title", &self.job_title)
            .check(required_with_any([sibling("company", &self.company)]));
        errors.field("vat_id", &self.vat_id).check(required_with_all([
            sibling("company", &self.company),
            sibling("country", &self.country),
        ]));
        errors
            .field("recovery_email", &self.recovery_email)
            .check(required_without_all([
                sibling("email", &self.email),
                sibling("phone", &self.phone),
            ]))
            .omit_empty()
            .check(Email);
    }
}

impl Reflect for Account {
    fn reflect(&self) -> Vec<Reflected> {
        patterns();
        let mut fields = vec![
            Reflected::new("id", &self.id, "required,uuid"),
            Reflected::new(
                "login",
                &self.login,
                "required,min=4,max=20,starts_with_alpha,lowercase",
            ),
            Reflected::new(
                "password",
                &self.password,
                "required,min=8,max=32,text,contains_lower_alpha,contains_upper_alpha,\
                 contains_digit,contains_special_character,excludes_whitespace",
            ),
            Reflected::new("email", &self.email, "required_without_any=phone,omitempty,email"),
            Reflected::new("phone", &self.phone, "required_without_any=email,omitempty,e164"),
            Reflected::new("age", &self.age, "gte=18,lte=100"),
            Reflected::new("avatars", &self.avatars, "min=3,max=8"),
        ];
        for (size, pixels) in &self.avatars {
            let prefix = format!("avatars[{size}]");
            fields.extend(size.reflect().into_iter().map(|f| f.nested_under(&prefix)));
            fields.push(Reflected::new(
                prefix,
                pixels,
                format!("len={}", size.byte_len()),
            ));
        }
        fields.extend([
            Reflected::new("secret", &self.secret, "required,secret"),
            Reflected::new("promo_code", &self.promo_code, "omitempty,promo_code"),
            Reflected::new("first_name", &self.first_name, "required,starts_with_upper_alpha"),
            Reflected::new("last_name", &self.last_name, "required,ends_with_lower_alpha"),
            Reflected::new("display_name", &self.display_name, "required,title"),
            Reflected::new("tags", &self.tags, "max=5,unique"),
            Reflected::new("company", &self.company, ""),
            Reflected::new("job_title", &self.job_title, "required_with_any=company"),
            Reflected::new("country", &self.country, ""),
            Reflected::new("vat_id", &self.vat_id, "required_with_all=company country"),
            Reflected::new(
                "recovery_email",
                &self.recovery_email,
                "required_without_all=email phone,omitempty,email",
            ),
        ]);
        fields
    }
}
