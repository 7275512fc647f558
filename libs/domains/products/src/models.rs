use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

pub const TEXT_EMPTY_MESSAGE: &str = "Text cannot be empty";

/// Product entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Server-assigned identifier, `null` until saved
    #[schema(example = 1)]
    pub id: Option<i64>,
    #[schema(example = "Blue mug")]
    pub text: String,
}

impl Product {
    pub fn new(id: i64, text: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            text: text.into(),
        }
    }

    /// A product that has not been saved yet.
    pub fn unsaved(text: impl Into<String>) -> Self {
        Self {
            id: None,
            text: text.into(),
        }
    }
}

/// Request body for creating or replacing a product.
///
/// `text` is optional here so a missing or `null` value is reported as a
/// constraint violation instead of a deserialization error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct ProductRequest {
    /// Ignored on update, where the path id wins
    pub id: Option<i64>,
    #[validate(
        required(message = "Text cannot be empty"),
        length(min = 1, message = "Text cannot be empty")
    )]
    #[schema(example = "Blue mug")]
    pub text: Option<String>,
}

impl ProductRequest {
    pub fn into_product(self) -> Product {
        Product {
            id: self.id,
            text: self.text.unwrap_or_default(),
        }
    }

    /// Convert, replacing any body id with `id`.
    pub fn into_product_with_id(self, id: i64) -> Product {
        Product {
            id: Some(id),
            ..self.into_product()
        }
    }
}
