use serde_json::json;
use tracing::{error, info, Instrument};
use order_service::app_system::{setup_tracing, CommerceSystem, SystemConfig};
use order_service::domain::{CustomerCreate, OrderLineRequest, ProductCreate};
use order_service::order_service::CreateOrderRequest;

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = SystemConfig::from_env().map_err(|e| e.to_string())?;
    setup_tracing(&config);

    info!("Starting application with order creation service");

    let system = CommerceSystem::new(&config);

    let span = tracing::info_span!("seeding");
    let (customer, keyboard, mouse) = async {
        info!("Creating customer and products");
        let customer = system.customer_client
            .create_customer(CustomerCreate {
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
            })
            .await
            .map_err(|e| e.to_string())?;
        let keyboard = system.product_client
            .create_product(ProductCreate { name: "Keyboard".to_string(), price: 49.9, quantity: 10 })
            .await
            .map_err(|e| e.to_string())?;
        let mouse = system.product_client
            .create_product(ProductCreate { name: "Mouse".to_string(), price: 19.5, quantity: 2 })
            .await
            .map_err(|e| e.to_string())?;
        Ok::<_, String>((customer, keyboard, mouse))
    }
    .instrument(span)
    .await?;

    info!(customer_id = %customer.id, "Seed data created");

    let span = tracing::info_span!("order_processing");
    async {
        let lines = vec![
            OrderLineRequest::new(keyboard.id.clone(), 2),
            OrderLineRequest::new(mouse.id.clone(), 1),
        ];
        match system.order_service.create(&customer.id, lines).await {
            Ok(order) => info!(order_id = %order.id, total = order.total(), "Order processed successfully"),
            Err(e) => error!(error = %e, "Order processing failed"),
        }

        // Same flow from an untyped request body; only one mouse is left.
        let request = CreateOrderRequest {
            customer_id: customer.id.clone(),
            products: json!([{ "id": mouse.id, "quantity": 2 }]),
        };
        match system.order_service.execute(request).await {
            Ok(order) => info!(order_id = %order.id, "Order processed successfully"),
            Err(e) => error!(error = %e, kind = ?e.kind(), "Order processing failed"),
        }
    }
    .instrument(span)
    .await;

    for product in system.product_client.list_products().await.map_err(|e| e.to_string())? {
        info!(product_id = %product.id, quantity = product.quantity, "Remaining stock");
    }

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
