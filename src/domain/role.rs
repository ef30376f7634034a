use crate::error::OrderError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Caller role checked by the access-controlled payment gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Customer,
    Guest,
}

impl Role {
    pub fn is_privileged(&self) -> bool {
        match self {
            Role::Admin => true,
            Role::Customer | Role::Guest => false,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => f.write_str("admin"),
            Role::Customer => f.write_str("customer"),
            Role::Guest => f.write_str("guest"),
        }
    }
}

impl FromStr for Role {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "customer" => Ok(Role::Customer),
            "guest" => Ok(Role::Guest),
            other => Err(OrderError::InvalidArgument(format!("unknown role '{other}'"))),
        }
    }
}
