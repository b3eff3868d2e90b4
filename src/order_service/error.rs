use thiserror::Error;
use crate::customer_actor::CustomerError;
use crate::order_actor::OrderError;
use crate::product_actor::ProductError;

/// Coarse classification of a [`CreateOrderError`], for callers that need to
/// branch (for example into a response status) without matching every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InvalidInput,
    Conflict,
    Unavailable,
}

/// Why an order could not be created.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CreateOrderError {
    #[error("Customer not exists: {0}")]
    CustomerNotFound(String),
    #[error("Products must be a list: {0}")]
    InvalidShape(String),
    #[error("No products informed, order was not created")]
    EmptyInput,
    #[error("None of the informed products exist")]
    NoMatchingProducts,
    #[error("Product {0} not exists")]
    ProductNotFound(String),
    #[error("Insufficient quantity for product {product_id}: requested {requested}, available {available}")]
    InsufficientStock {
        product_id: String,
        requested: u32,
        available: u32,
    },
    #[error(transparent)]
    Customer(#[from] CustomerError),
    #[error(transparent)]
    Product(#[from] ProductError),
    #[error(transparent)]
    Order(#[from] OrderError),
}

impl CreateOrderError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CreateOrderError::CustomerNotFound(_)
            | CreateOrderError::NoMatchingProducts
            | CreateOrderError::ProductNotFound(_) => ErrorKind::NotFound,
            CreateOrderError::InvalidShape(_) | CreateOrderError::EmptyInput => ErrorKind::InvalidInput,
            CreateOrderError::InsufficientStock { .. } => ErrorKind::Conflict,
            CreateOrderError::Customer(_)
            | CreateOrderError::Product(_)
            | CreateOrderError::Order(_) => ErrorKind::Unavailable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_groups_variants() {
        assert_eq!(CreateOrderError::CustomerNotFound("c".into()).kind(), ErrorKind::NotFound);
        assert_eq!(CreateOrderError::EmptyInput.kind(), ErrorKind::InvalidInput);
        let stock = CreateOrderError::InsufficientStock {
            product_id: "P1".into(),
            requested: 6,
            available: 5,
        };
        assert_eq!(stock.kind(), ErrorKind::Conflict);
        assert_eq!(
            CreateOrderError::from(OrderError::ActorCommunicationError("Actor closed".into())).kind(),
            ErrorKind::Unavailable
        );
    }

    #[test]
    fn test_messages_name_the_product() {
        let err = CreateOrderError::ProductNotFound("P9".into());
        assert_eq!(err.to_string(), "Product P9 not exists");
        let err = CreateOrderError::InsufficientStock {
            product_id: "P1".into(),
            requested: 6,
            available: 5,
        };
        assert!(err.to_string().starts_with("Insufficient quantity for product P1"));
    }
}
