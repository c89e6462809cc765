use serde::{Deserialize, Serialize};

use super::City;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub city: City,
    #[serde(default)]
    pub address: String,
}

impl Customer {
    pub fn new(name: impl Into<String>, city: City, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            city,
            address: address.into(),
        }
    }
}
