use crudkit_core::{FieldError, ValidationErrorResponse};
use crudkit_data::Entity;
use garde::Validate;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ClientError;
use crate::view::ResourceView;

/// Per-field form state for a create payload `C`.
///
/// `submit` checks `C`'s `garde` rules locally, sends the payload through a
/// [`ResourceView`], and clears the form once the server accepted it.
///
/// ```ignore
/// let mut form = FormDraft::<NewContact>::new();
/// form.value.name = "Ada".into();
/// form.submit(&mut contacts).await?;
/// ```
#[derive(Debug, Default)]
pub struct FormDraft<C> {
    pub value: C,
    errors: Vec<FieldError>,
}

impl<C> FormDraft<C>
where
    C: Default + Serialize + Validate<Context = ()>,
{
    pub fn new() -> Self {
        Self {
            value: C::default(),
            errors: Vec::new(),
        }
    }

    /// Field errors from the last `check` or `submit`.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Run the local validation rules, recording field errors.
    pub fn check(&mut self) -> Result<(), ClientError> {
        match self.value.validate() {
            Ok(()) => {
                self.errors.clear();
                Ok(())
            }
            Err(report) => {
                let response = ValidationErrorResponse::from_report(&report);
                self.errors = response.errors.clone();
                Err(ClientError::Invalid(response))
            }
        }
    }

    pub fn reset(&mut self) {
        self.value = C::default();
        self.errors.clear();
    }

    /// Validate, create through `view`, and reset on success.
    ///
    /// Nothing is sent when validation fails. On a server error the draft
    /// keeps its values so the user can correct them.
    pub async fn submit<T>(&mut self, view: &mut ResourceView<T>) -> Result<(), ClientError>
    where
        T: Entity + DeserializeOwned,
    {
        self.check()?;
        view.add(&self.value).await?;
        self.reset();
        Ok(())
    }
}
