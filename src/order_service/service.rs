use std::collections::HashMap;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};
use crate::domain::{Order, OrderCreate, OrderLine, Product};
use crate::repositories::{CustomerLookup, OrderStore, ProductCatalog};
use super::{CreateOrderError, CreateOrderRequest, RequestedLines};

/// Creates orders against injected customer, product, and order collaborators.
///
/// Each call is a single pass: resolve the customer, resolve all requested
/// products in one batch, check every line against the running stock, then
/// store the order and write back the product quantities.
///
/// # Consistency
/// The order write and the quantity write are two separate calls with no
/// transaction around them, and the stock check is not a compare-and-swap.
/// Two concurrent orders for the same product can both pass the check.
#[derive(Clone)]
pub struct CreateOrderService {
    customers: Arc<dyn CustomerLookup>,
    products: Arc<dyn ProductCatalog>,
    orders: Arc<dyn OrderStore>,
}

impl CreateOrderService {
    pub fn new(
        customers: Arc<dyn CustomerLookup>,
        products: Arc<dyn ProductCatalog>,
        orders: Arc<dyn OrderStore>,
    ) -> Self {
        Self { customers, products, orders }
    }

    /// Creates an order from a deserialized request body.
    pub async fn execute(&self, request: CreateOrderRequest) -> Result<Order, CreateOrderError> {
        self.create(&request.customer_id, request.products).await
    }

    /// Creates an order for `customer_id`.
    ///
    /// # Errors
    /// Fails on the first violated precondition, in this order:
    /// unknown customer, products not a list, empty list, no requested product
    /// exists, a line naming an unknown product, a line exceeding the remaining
    /// stock. Nothing is persisted in any of those cases. Collaborator failures
    /// are passed through unchanged.
    #[instrument(skip(self, requested_lines))]
    pub async fn create(
        &self,
        customer_id: &str,
        requested_lines: impl Into<RequestedLines>,
    ) -> Result<Order, CreateOrderError> {
        let Some(customer) = self.customers.find_by_id(customer_id).await? else {
            warn!("Customer not found");
            return Err(CreateOrderError::CustomerNotFound(customer_id.to_string()));
        };

        let requested = requested_lines.into().into_lines()?;
        if requested.is_empty() {
            return Err(CreateOrderError::EmptyInput);
        }

        let mut ids: Vec<String> = Vec::with_capacity(requested.len());
        for line in &requested {
            if !ids.contains(&line.id) {
                ids.push(line.id.clone());
            }
        }

        let resolved = self.products.find_all_by_id(&ids).await?;
        if resolved.is_empty() {
            warn!(requested = ids.len(), "None of the requested products exist");
            return Err(CreateOrderError::NoMatchingProducts);
        }

        let prices: HashMap<&str, f64> = resolved
            .iter()
            .map(|product| (product.id.as_str(), product.price))
            .collect();
        let mut remaining: HashMap<&str, u32> = resolved
            .iter()
            .map(|product| (product.id.as_str(), product.quantity))
            .collect();

        let mut lines = Vec::with_capacity(requested.len());
        for line in &requested {
            let (Some(&price), Some(available)) =
                (prices.get(line.id.as_str()), remaining.get_mut(line.id.as_str()))
            else {
                warn!(product_id = %line.id, "Requested product not found");
                return Err(CreateOrderError::ProductNotFound(line.id.clone()));
            };

            if line.quantity > *available {
                warn!(
                    product_id = %line.id,
                    requested = line.quantity,
                    available = *available,
                    "Insufficient stock"
                );
                return Err(CreateOrderError::InsufficientStock {
                    product_id: line.id.clone(),
                    requested: line.quantity,
                    available: *available,
                });
            }
            *available -= line.quantity;

            lines.push(OrderLine {
                product_id: line.id.clone(),
                price,
                quantity: line.quantity,
            });
        }

        // Every resolved product is written back, including ones no line touched.
        let restocked: Vec<Product> = resolved
            .iter()
            .map(|product| Product {
                quantity: remaining[product.id.as_str()],
                ..product.clone()
            })
            .collect();

        let order = self.orders.create(OrderCreate { customer, lines }).await?;
        info!(order_id = %order.id, lines = order.lines.len(), total = order.total(), "Order created");

        if let Err(e) = self.products.update_quantities(&restocked).await {
            error!(order_id = %order.id, error = %e, "Order stored but stock update failed");
            return Err(e.into());
        }
        info!(products = restocked.len(), "Stock updated");

        Ok(order)
    }
}
