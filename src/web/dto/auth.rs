//! Sign-in and registration forms.

use serde::Deserialize;
use serde_with::{NoneAsEmptyString, serde_as};
use validator::Validate;

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct LoginForm {
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[serde_as]
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct RegisterForm {
    #[serde_as(as = "NoneAsEmptyString")]
    pub name: Option<String>,
    #[validate(length(min = 1), email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}
