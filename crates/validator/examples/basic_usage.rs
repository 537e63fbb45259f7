//! Basic usage example for sieve-validator

use sieve_validator::prelude::*;

struct Signup {
    login: String,
    email: String,
    phone: String,
    age: u8,
}

impl Validate for Signup {
    fn collect(&self, errors: &mut ValidationErrors) {
        errors
            .field("login", &self.login)
            .check(Required)
            .check(Min(4_usize))
            .check(StartsWith(CharClass::Alpha))
            .check(Lowercase);
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
        errors.field("age", &self.age).check(Gte(18_u8)).check(Lte(100_u8));
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let ok = Signup {
        login: "yavuser".into(),
        email: "yav@example.com".into(),
        phone: String::new(),
        age: 30,
    };
    ok.validate()?;
    println!("'{}' is valid", ok.login);

    let bad = Signup {
        login: "LOGIN".into(),
        email: "yav+123".into(),
        phone: String::new(),
        age: 17,
    };

    // Reuse one buffer across calls on hot paths.
    let mut validator = Validator::new();
    if let Err(errors) = validator.validate(&bad) {
        println!("{errors}");
        println!("{}", serde_json::to_string_pretty(errors)?);
    }
    Ok(())
}
