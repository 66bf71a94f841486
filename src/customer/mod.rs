//! Customer lookup and address bookkeeping

pub mod memory;

use async_trait::async_trait;
use uuid::Uuid;

use crate::Result;
use crate::models::{Address, Customer};

pub use memory::InMemoryCustomerService;

#[async_trait]
pub trait CustomerService: Send + Sync {
    /// Full customer record for an authenticated user
    async fn load_customer(&self, user_id: Uuid) -> Result<Customer>;

    /// Store a new address. `Ok(None)` means the service declined it.
    async fn add_address(&self, customer_id: Uuid, address: Address) -> Result<Option<Address>>;

    async fn confirm_address(&self, customer_id: Uuid, address_id: Uuid) -> Result<()>;

    async fn change_primary_address(&self, customer_id: Uuid, address_id: Uuid) -> Result<()>;
}
