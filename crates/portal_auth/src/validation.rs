//! Client-side form checks. These only shorten the feedback loop; the API
//! re-validates every request.

use crate::types::RegisterRequest;
use regex::Regex;
use thiserror::Error;

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("Email must be a valid @paruluniversity.ac.in address")]
    Email,
    #[error(
        "Password must be at least 8 characters and include an uppercase letter, a lowercase letter, a number and one of @$!%*?&"
    )]
    Password,
    #[error("Passwords do not match")]
    Mismatch,
}

pub fn valid_email(email: &str) -> bool {
    Regex::new(r"(?i)^[^@\s]+@paruluniversity\.ac\.in$").is_ok_and(|re| re.is_match(email.trim()))
}

/// At least 8 characters from letters, digits and `@$!%*?&`, with one of each
/// class present.
pub fn valid_password(password: &str) -> bool {
    let matches = |pattern: &str| Regex::new(pattern).is_ok_and(|re| re.is_match(password));

    password.chars().count() >= MIN_PASSWORD_LEN
        && matches(r"^[A-Za-z0-9@$!%*?&]+$")
        && matches(r"[a-z]")
        && matches(r"[A-Z]")
        && matches(r"[0-9]")
        && matches(r"[@$!%*?&]")
}

/// # Errors
/// Returns [`ValidationError::Email`] for addresses outside the institution.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        Err(ValidationError::Required("Email"))
    } else if valid_email(email) {
        Ok(())
    } else {
        Err(ValidationError::Email)
    }
}

/// # Errors
/// Returns [`ValidationError::Password`] when the password is too weak.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        Err(ValidationError::Required("Password"))
    } else if valid_password(password) {
        Ok(())
    } else {
        Err(ValidationError::Password)
    }
}

/// Checks a new password and its confirmation.
///
/// # Errors
/// Returns the first failing rule.
pub fn validate_new_password(password: &str, confirmation: &str) -> Result<(), ValidationError> {
    validate_password(password)?;
    if password == confirmation {
        Ok(())
    } else {
        Err(ValidationError::Mismatch)
    }
}

/// Every field is required; email and password follow their own rules.
///
/// # Errors
/// Returns the first failing rule, in form order.
pub fn validate_registration(
    request: &RegisterRequest,
    confirmation: &str,
) -> Result<(), ValidationError> {
    let required = [
        ("Full name", &request.full_name),
        ("Email", &request.email),
        ("Password", &request.password),
        ("Contact number", &request.contact_number),
        ("Specialization", &request.specialization),
        ("Semester", &request.sem),
        ("ERP number", &request.erp_number),
        ("College name", &request.college_name),
    ];
    if let Some((field, _)) = required.into_iter().find(|(_, value)| value.trim().is_empty()) {
        return Err(ValidationError::Required(field));
    }

    validate_email(&request.email)?;
    validate_new_password(&request.password, confirmation)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_request() -> RegisterRequest {
        RegisterRequest {
            full_name: "Jane Doe".to_string(),
            email: "jdoe@paruluniversity.ac.in".to_string(),
            password: "Abcdef1!".to_string(),
            contact_number: "9876543210".to_string(),
            specialization: "Cyber Security".to_string(),
            sem: "5".to_string(),
            erp_number: "2203031".to_string(),
            college_name: "PIET".to_string(),
        }
    }

    #[test]
    fn password_rules() {
        assert!(valid_password("Abcdef1!"));
        assert!(!valid_password("abcdefgh"));
        assert!(!valid_password("ABCDEFG1"));
        assert!(!valid_password("Abcdefg1"));
        assert!(!valid_password("Abc1!"));
        assert!(!valid_password("Abcdef1!#"));
        assert!(!valid_password("Abcdef1! "));
    }

    #[test]
    fn email_must_be_institutional() {
        assert!(valid_email("jdoe@paruluniversity.ac.in"));
        assert!(valid_email("JDoe@ParulUniversity.AC.IN"));
        assert!(!valid_email("jdoe@gmail.com"));
        assert!(!valid_email("jdoe@paruluniversity.ac.in.evil.com"));
        assert!(!valid_email("@paruluniversity.ac.in"));
    }

    #[test]
    fn validate_reports_required_before_format() {
        assert_eq!(validate_email(" "), Err(ValidationError::Required("Email")));
        assert_eq!(validate_email("x@y.z"), Err(ValidationError::Email));
        assert_eq!(validate_password(""), Err(ValidationError::Required("Password")));
        assert_eq!(validate_password("abcdefgh"), Err(ValidationError::Password));
    }

    #[test]
    fn registration_requires_every_field() {
        assert_eq!(validate_registration(&complete_request(), "Abcdef1!"), Ok(()));

        let missing_erp = RegisterRequest {
            erp_number: "  ".to_string(),
            ..complete_request()
        };
        assert_eq!(
            validate_registration(&missing_erp, "Abcdef1!"),
            Err(ValidationError::Required("ERP number"))
        );
    }

    #[test]
    fn registration_checks_confirmation() {
        assert_eq!(
            validate_registration(&complete_request(), "Abcdef1?"),
            Err(ValidationError::Mismatch)
        );
        assert_eq!(
            ValidationError::Required("Full name").to_string(),
            "Full name is required"
        );
    }
}
