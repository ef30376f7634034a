use super::order::{Amount, Order, OrderId, OrderStatus};
use super::receipt::Receipt;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn pay(&self, order_id: &OrderId, amount: Amount) -> Result<Receipt>;
}

#[async_trait]
pub trait InventoryService: Send + Sync {
    async fn reserve(&self, order: &Order) -> Result<String>;
}

#[async_trait]
pub trait ShippingService: Send + Sync {
    async fn ship(&self, order: &Order) -> Result<String>;
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, order: &Order, message: &str) -> Result<()>;
}

#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn store(&self, order: Order) -> Result<()>;
    async fn get(&self, order_id: &OrderId) -> Result<Option<Order>>;
    async fn all_orders(&self) -> Result<Vec<Order>>;
}

pub trait OrderObserver: Send + Sync {
    fn on_status_changed(&self, order_id: &OrderId, status: OrderStatus) -> Result<()>;
}

pub type PaymentGatewayBox = Box<dyn PaymentGateway>;
pub type InventoryServiceBox = Box<dyn InventoryService>;
pub type ShippingServiceBox = Box<dyn ShippingService>;
pub type NotifierBox = Box<dyn Notifier>;
pub type OrderRepositoryBox = Box<dyn OrderRepository>;
pub type ObserverRef = Arc<dyn OrderObserver>;

#[async_trait]
impl<G: PaymentGateway + ?Sized> PaymentGateway for Box<G> {
    async fn pay(&self, order_id: &OrderId, amount: Amount) -> Result<Receipt> {
        (**self).pay(order_id, amount).await
    }
}

#[async_trait]
impl<G: PaymentGateway + ?Sized> PaymentGateway for Arc<G> {
    async fn pay(&self, order_id: &OrderId, amount: Amount) -> Result<Receipt> {
        (**self).pay(order_id, amount).await
    }
}
