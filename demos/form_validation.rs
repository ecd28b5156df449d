//! Form Validation
//!
//! This example validates a small sign-up form field by field and collects
//! every problem before reporting back.
//!
//! Key concepts:
//! - Stock validators for common fields
//! - Custom rule lists built with the builder
//! - Loading a validator from a JSON definition
//! - Merging field verdicts into one form verdict
//!
//! Run with: cargo run --example form_validation

use validkit::core::{validate_all, ValidationError, ValidationResult, Validator};
use validkit::definition::ValidatorDefinition;
use validkit::rules::{NonAsciiRule, NonEmptyRule, PredicateRule, RangeLengthRule};
use validkit::validators::{
    EmailValidator, FullNameValidator, PhoneStyle, PhoneValidator, StateValidator, ZipValidator,
};
use validkit::ValidatorBuilder;

const USERNAME_DEFINITION: &str = r#"{
    "version": 1,
    "name": "username",
    "rules": [
        { "kind": "non_ascii" },
        { "kind": { "range_length": { "min": 3, "max": 16 } }, "priority": 1 },
        {
            "kind": { "pattern": { "pattern": "^[a-z0-9_]+$" } },
            "priority": 2,
            "error": {
                "message": "Lowercase letters, digits and underscores only",
                "recovery": "Try something like jane_doe"
            }
        }
    ]
}"#;

fn report(field: &str, result: &ValidationResult) {
    match result {
        ValidationResult::Valid => println!("  {field:<10} ok"),
        ValidationResult::Invalid(errors) => {
            println!("  {field:<10} {} problem(s)", errors.len());
            for error in errors {
                match error.recovery() {
                    Some(hint) => println!("    - {} ({hint})", error.message()),
                    None => println!("    - {}", error.message()),
                }
            }
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Form Validation Example ===\n");

    let name = FullNameValidator::new();
    let email = EmailValidator::new();
    let phone = PhoneValidator::new(PhoneStyle::AreaCodeParentheses);
    let state = StateValidator::new();
    let zip = ZipValidator::new();

    let password = ValidatorBuilder::new()
        .rule(NonAsciiRule::new(0))
        .rule(NonEmptyRule::new(3))
        .rule(RangeLengthRule::new(8, 64, 2))
        .rule(PredicateRule::new(
            |input: &str| input.chars().any(|c| c.is_ascii_digit()),
            ValidationError::new("Must contain a digit").with_recovery("Add at least one number"),
            1,
        ))
        .build();

    let username = ValidatorDefinition::from_json(USERNAME_DEFINITION)?.compile()?;

    let submissions = [
        [
            ("name", "Patrick Smith"),
            ("email", "test@gmail.com"),
            ("phone", "(444) 555-5745"),
            ("state", "NY"),
            ("zip", "10012"),
            ("password", "hunter2hunter2"),
            ("username", "patrick_s"),
        ],
        [
            ("name", "J Eh√∞≈µf"),
            ("email", "test@gmailcom"),
            ("phone", "(222) 333-$444"),
            ("state", "XSAA"),
            ("zip", "112"),
            ("password", "short"),
            ("username", "Pat!"),
        ],
    ];

    for (number, fields) in submissions.iter().enumerate() {
        println!("Submission {}:", number + 1);

        let mut verdicts = Vec::new();
        for (field, value) in fields {
            let validator: &dyn Validator = match *field {
                "name" => &name,
                "email" => &email,
                "phone" => &phone,
                "state" => &state,
                "zip" => &zip,
                "password" => &password,
                _ => &username,
            };
            let result = validator.validate(value);
            report(field, &result);
            verdicts.push(result);
        }

        let form = ValidationResult::merge_all(verdicts);
        match form.into_result() {
            Ok(()) => println!("  => accepted\n"),
            Err(errors) => println!("  => rejected: {errors}\n"),
        }
    }

    // One value checked against several validators at once
    println!("Checking \"12345\" as both a zip code and a state:");
    let combined = validate_all([&zip as &dyn Validator, &state as &dyn Validator], "12345");
    report("combined", &combined);

    println!("\n=== Example Complete ===");
    Ok(())
}
