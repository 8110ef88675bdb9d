//! Customer input - length-checked at construction

use super::validation::{check_len, ValidationError};

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_PHONE_LEN: usize = 15;
pub const MAX_EMAIL_LEN: usize = 100;

/// Customer fields as written by create and update.
///
/// No format checks beyond length; phone and email are free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    name: String,
    phone: String,
    email: String,
}

impl NewCustomer {
    /// Build customer input, enforcing the column length limits.
    ///
    /// # Example
    /// ```
    /// use resvctl_server::models::NewCustomer;
    ///
    /// assert!(NewCustomer::new("Ada", "555-0100", "ada@example.com").is_ok());
    /// assert!(NewCustomer::new("Ada", "0123456789012345", "ada@example.com").is_err());
    /// ```
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let (name, phone, email) = (name.into(), phone.into(), email.into());
        check_len("name", &name, MAX_NAME_LEN)?;
        check_len("phone", &phone, MAX_PHONE_LEN)?;
        check_len("email", &email, MAX_EMAIL_LEN)?;
        Ok(Self { name, phone, email })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_limits() {
        let name = "n".repeat(MAX_NAME_LEN);
        let phone = "1".repeat(MAX_PHONE_LEN);
        let email = "e".repeat(MAX_EMAIL_LEN);
        let customer = NewCustomer::new(name.clone(), phone, email).unwrap();
        assert_eq!(customer.name(), name);
    }

    #[test]
    fn rejects_long_phone() {
        let err = NewCustomer::new("A", "1".repeat(16), "a@x.com").unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooLong {
                field: "phone",
                max: 15
            }
        );
    }

    #[test]
    fn rejects_long_email() {
        let err = NewCustomer::new("A", "1", "e".repeat(101)).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { field: "email", .. }));
    }

    #[test]
    fn empty_fields_are_allowed() {
        assert!(NewCustomer::new("", "", "").is_ok());
    }
}
