use chrono::{DateTime, Utc};
use uuid::Uuid;

pub enum Role {
    Member,
    Admin
}

pub struct User {
    pub id: Uuid,

    /// Display name.
    #[required]
    #[max_length(100)]
    pub name: String,

    #[column(name = "EmailAddress", type_name = "citext")]
    pub email: String,

    #[string_length(80, min = 2)]
    #[max_length(50)]
    pub nickname: Option<String>,

    pub age: i32,

    pub role: Role,

    pub tags: Vec<String>,

    #[concurrency_check]
    #[timestamp]
    pub version: i32,

    pub created_at: DateTime<Utc>,

    pub modified_by: String,

    password_hash: String
}

pub struct Order {
    pub id: Uuid,
    pub total: f64,
    pub paid: bool,
    pub updated_at: DateTime<Utc>
}
