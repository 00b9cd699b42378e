use chrono::{DateTime, Utc};
use crudkit::crudkit_data::{Entity, Resource, Value};
use garde::Validate;
use serde::{Deserialize, Serialize};

use super::merge;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, sqlx::FromRow)]
pub struct Contact {
    #[garde(skip)]
    pub id: i64,
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(email)]
    pub email: String,
    #[garde(length(min = 1))]
    pub phone: String,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate)]
pub struct NewContact {
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(email)]
    pub email: String,
    #[garde(length(min = 1))]
    pub phone: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ContactPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl Entity for Contact {
    fn table_name() -> &'static str {
        "contacts"
    }

    fn columns() -> &'static [&'static str] {
        &["name", "email", "phone"]
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn values(&self) -> Vec<Value> {
        vec![(&self.name).into(), (&self.email).into(), (&self.phone).into()]
    }
}

impl Resource for Contact {
    const NAME: &'static str = "Contact";
    type Create = NewContact;
    type Patch = ContactPatch;

    fn from_create(input: NewContact, _now: DateTime<Utc>) -> Self {
        Self {
            id: 0,
            name: input.name,
            email: input.email,
            phone: input.phone,
        }
    }

    fn apply(&mut self, patch: ContactPatch, _now: DateTime<Utc>) {
        merge(&mut self.name, patch.name);
        merge(&mut self.email, patch.email);
        merge(&mut self.phone, patch.phone);
    }
}
