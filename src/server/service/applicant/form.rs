//! Volunteer form validation.
//!
//! Every rule is checked so applicants see all problems with their submission at once.

use crate::{model::applicant::VolunteerFormDto, server::error::FieldError};

const MAX_NAME_CHARS: usize = 100;
const MAX_EMAIL_CHARS: usize = 254;
const MIN_PHONE_DIGITS: usize = 7;
const MAX_PHONE_DIGITS: usize = 15;
const MAX_CITY_CHARS: usize = 100;
const MAX_AVAILABILITY_CHARS: usize = 200;
const MAX_SKILLS_CHARS: usize = 1000;
const MIN_MOTIVATION_CHARS: usize = 20;
const MAX_MOTIVATION_CHARS: usize = 2000;

/// Validate a submitted volunteer form.
///
/// # Returns
/// - `Ok(())` - Every field is valid
/// - `Err(Vec<FieldError>)` - One entry per invalid field, in form order
pub fn validate(form: &VolunteerFormDto) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    required_text(
        &mut errors,
        "full_name",
        &form.full_name,
        "Full name",
        MAX_NAME_CHARS,
    );

    if let Err(message) = check_email(form.email.trim()) {
        errors.push(FieldError::new("email", message));
    }

    if let Err(message) = check_phone(form.phone.trim()) {
        errors.push(FieldError::new("phone", message));
    }

    required_text(&mut errors, "city", &form.city, "City", MAX_CITY_CHARS);
    required_text(
        &mut errors,
        "availability",
        &form.availability,
        "Availability",
        MAX_AVAILABILITY_CHARS,
    );

    if let Some(skills) = &form.skills {
        if skills.trim().chars().count() > MAX_SKILLS_CHARS {
            errors.push(FieldError::new(
                "skills",
                format!("Skills must be at most {} characters", MAX_SKILLS_CHARS),
            ));
        }
    }

    let motivation_chars = form.motivation.trim().chars().count();
    if motivation_chars < MIN_MOTIVATION_CHARS {
        errors.push(FieldError::new(
            "motivation",
            format!(
                "Please tell us a bit more, at least {} characters",
                MIN_MOTIVATION_CHARS
            ),
        ));
    } else if motivation_chars > MAX_MOTIVATION_CHARS {
        errors.push(FieldError::new(
            "motivation",
            format!("Motivation must be at most {} characters", MAX_MOTIVATION_CHARS),
        ));
    }

    if !form.agreed_to_terms {
        errors.push(FieldError::new(
            "agreed_to_terms",
            "You must agree to the volunteer terms",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn required_text(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: &str,
    label: &str,
    max_chars: usize,
) {
    let chars = value.trim().chars().count();
    if chars == 0 {
        errors.push(FieldError::new(field, format!("{} is required", label)));
    } else if chars > max_chars {
        errors.push(FieldError::new(
            field,
            format!("{} must be at most {} characters", label, max_chars),
        ));
    }
}

fn check_email(email: &str) -> Result<(), &'static str> {
    if email.is_empty() {
        return Err("Email is required");
    }
    if email.chars().count() > MAX_EMAIL_CHARS {
        return Err("Email is too long");
    }
    if email.chars().any(char::is_whitespace) {
        return Err("Email must not contain spaces");
    }

    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err("Email must contain a single @");
    };

    let domain_has_inner_dot = domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len());

    if local.is_empty() || !domain_has_inner_dot {
        return Err("Please enter a valid email address");
    }

    Ok(())
}

fn check_phone(phone: &str) -> Result<(), &'static str> {
    if phone.is_empty() {
        return Err("Phone number is required");
    }
    if !phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')'))
    {
        return Err("Phone number may only contain digits, spaces and + - ( )");
    }

    let digits = phone.chars().filter(char::is_ascii_digit).count();
    if !(MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits) {
        return Err("Phone number must have between 7 and 15 digits");
    }

    Ok(())
}
