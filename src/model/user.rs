use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

/// Role attached to every account.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Technician,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Technician => "technician",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "user" => Ok(Self::User),
            "technician" => Ok(Self::Technician),
            other => Err(format!("Invalid role '{}'", other)),
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub nombre: String,
    pub rol: Role,
    pub email: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct LoginDto {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Account registration payload.
///
/// `rol` stays a string so an unknown role is reported as a validation error
/// instead of a deserialization failure.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct RegisterUserDto {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub rol: String,
    pub email: Option<String>,
}
