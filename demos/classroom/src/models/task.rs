use chrono::{DateTime, Utc};
use crudkit::crudkit_data::{DeleteReply, Entity, Resource, Value};
use garde::Validate;
use serde::{Deserialize, Serialize};

use super::{merge, nullable, trimmed};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum TaskStatus {
    #[default]
    Pending,
    #[serde(rename = "In Progress")]
    #[sqlx(rename = "In Progress")]
    InProgress,
    Completed,
}

impl TaskStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[garde(skip)]
    pub id: i64,
    #[garde(length(min = 1))]
    pub title: String,
    #[garde(skip)]
    pub description: Option<String>,
    #[garde(skip)]
    pub status: TaskStatus,
    #[garde(skip)]
    pub created_at: DateTime<Utc>,
    #[garde(skip)]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate)]
pub struct NewTask {
    #[garde(length(min = 1))]
    pub title: String,
    #[serde(default)]
    #[garde(skip)]
    pub description: Option<String>,
    #[serde(default)]
    #[garde(skip)]
    pub status: TaskStatus,
}

/// `"description": null` clears the description; leaving it out keeps it.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct TaskPatch {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
    pub status: Option<TaskStatus>,
}

impl Entity for Task {
    fn table_name() -> &'static str {
        "tasks"
    }

    fn columns() -> &'static [&'static str] {
        &["title", "description", "status", "created_at", "updated_at"]
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn values(&self) -> Vec<Value> {
        vec![
            (&self.title).into(),
            self.description.clone().into(),
            self.status.as_str().into(),
            self.created_at.into(),
            self.updated_at.into(),
        ]
    }
}

impl Resource for Task {
    const NAME: &'static str = "Task";
    type Create = NewTask;
    type Patch = TaskPatch;

    fn from_create(input: NewTask, now: DateTime<Utc>) -> Self {
        Self {
            id: 0,
            title: trimmed(input.title),
            description: input.description,
            status: input.status,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply(&mut self, patch: TaskPatch, now: DateTime<Utc>) {
        merge(&mut self.title, patch.title.map(trimmed));
        merge(&mut self.description, patch.description);
        merge(&mut self.status, patch.status);
        self.updated_at = now;
    }

    fn delete_reply() -> DeleteReply {
        DeleteReply::NoContent
    }
}
