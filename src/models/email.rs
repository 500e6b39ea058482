use validator::{Validate, ValidationErrors};

#[derive(sqlx::FromRow, Validate, Debug, Clone, PartialEq, Eq)]
pub struct Subscriber {
    #[validate(email)]
    pub email: String,
}

impl Subscriber {
    /// Builds a subscriber, rejecting anything that is not an email address.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationErrors> {
        let subscriber = Self { email: email.into() };
        subscriber.validate()?;
        Ok(subscriber)
    }
}
