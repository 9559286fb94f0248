use serde::{Deserialize, Serialize};

/// One product record. Field order here is load-bearing: it defines the
/// column order of the CSV header row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: String,
    pub name: String,
    pub category: String,
    /// Persisted as text with exactly two fraction digits ("2.50").
    #[serde(with = "price_text")]
    pub price: f64,
    pub quantity: i64,
}

impl Product {
    pub fn new(
        product_id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        quantity: i64,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            name: name.into(),
            category: category.into(),
            price,
            quantity,
        }
    }

    /// Canonical textual form of the price, as written to disk.
    pub fn price_text(&self) -> String {
        format!("{:.2}", self.price)
    }
}

/// Two fraction digits on the way out, plain float parse on the way in.
/// Numeric fields are typed at load time, so a malformed row fails the load
/// rather than a later sort or update.
mod price_text {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(price: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{:.2}", price))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.trim()
            .parse::<f64>()
            .map_err(|_| de::Error::custom(format!("invalid price: {:?}", text)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Staff,
}

impl Role {
    /// Maps a username to a role. Anything that is not "admin" or "staff"
    /// (case-insensitive) deliberately degrades to `Staff`; a login never
    /// fails.
    pub fn parse(name: &str) -> Role {
        match name.trim().to_ascii_lowercase().as_str() {
            "admin" => Role::Admin,
            _ => Role::Staff,
        }
    }

    /// Whether the username names a real role. Lets the login prompt warn
    /// when [`Role::parse`] fell back to `Staff`.
    pub fn is_known(name: &str) -> bool {
        matches!(name.trim().to_ascii_lowercase().as_str(), "admin" | "staff")
    }

    pub fn is_admin(self) -> bool {
        self == Role::Admin
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Staff => "STAFF",
        }
    }
}
