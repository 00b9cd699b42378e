use chrono::{DateTime, Utc};
use crudkit::crudkit_data::{Entity, Resource, Value};
use garde::Validate;
use serde::{Deserialize, Serialize};

use super::{merge, trimmed};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    #[garde(skip)]
    pub id: i64,
    #[garde(length(min = 1))]
    pub student_name: String,
    #[garde(length(min = 1))]
    pub usn: String,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewStudent {
    #[garde(length(min = 1))]
    pub student_name: String,
    #[garde(length(min = 1))]
    pub usn: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentPatch {
    pub student_name: Option<String>,
    pub usn: Option<String>,
}

impl Entity for Student {
    fn table_name() -> &'static str {
        "students"
    }

    fn columns() -> &'static [&'static str] {
        &["student_name", "usn"]
    }

    fn unique_columns() -> &'static [&'static str] {
        &["usn"]
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn values(&self) -> Vec<Value> {
        vec![(&self.student_name).into(), (&self.usn).into()]
    }
}

impl Resource for Student {
    const NAME: &'static str = "Student";
    type Create = NewStudent;
    type Patch = StudentPatch;

    fn from_create(input: NewStudent, _now: DateTime<Utc>) -> Self {
        Self {
            id: 0,
            student_name: trimmed(input.student_name),
            usn: trimmed(input.usn),
        }
    }

    fn apply(&mut self, patch: StudentPatch, _now: DateTime<Utc>) {
        merge(&mut self.student_name, patch.student_name.map(trimmed));
        merge(&mut self.usn, patch.usn.map(trimmed));
    }
}
