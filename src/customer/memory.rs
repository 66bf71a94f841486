use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use super::CustomerService;
use crate::models::{Address, Customer};
use crate::{AddressError, Result};

const CUSTOMER_NOT_FOUND: &str = "مشتری یافت نشد";
const ADDRESS_NOT_FOUND: &str = "آدرس یافت نشد";

/// Customer store kept in process memory
pub struct InMemoryCustomerService {
    customers: RwLock<HashMap<Uuid, Customer>>,
    max_addresses: usize,
}

impl InMemoryCustomerService {
    pub fn with_customers(customers: Vec<Customer>, max_addresses: usize) -> Self {
        let customers = customers.into_iter().map(|c| (c.id, c)).collect();
        Self {
            customers: RwLock::new(customers),
            max_addresses,
        }
    }
}

#[async_trait]
impl CustomerService for InMemoryCustomerService {
    #[instrument(level = "debug", skip(self))]
    async fn load_customer(&self, user_id: Uuid) -> Result<Customer> {
        self.customers
            .read()
            .await
            .get(&user_id)
            .cloned()
            .ok_or_else(|| AddressError::not_found(CUSTOMER_NOT_FOUND))
    }

    #[instrument(level = "debug", skip(self, address), fields(address_id = %address.id))]
    async fn add_address(&self, customer_id: Uuid, address: Address) -> Result<Option<Address>> {
        let mut customers = self.customers.write().await;
        let Some(customer) = customers.get_mut(&customer_id) else {
            warn!("Customer {} not found, address rejected", customer_id);
            return Ok(None);
        };

        if customer.addresses.len() >= self.max_addresses {
            warn!(
                "Customer {} already has {} addresses, address rejected",
                customer_id,
                customer.addresses.len()
            );
            return Ok(None);
        }

        if customer.addresses.iter().any(|a| a.is_duplicate_of(&address)) {
            debug!("Duplicate address for customer {}", customer_id);
            return Ok(None);
        }

        let mut stored = address;
        stored.confirmed = false;
        customer.addresses.push(stored.clone());
        info!("Added address {} for customer {}", stored.id, customer_id);
        Ok(Some(stored))
    }

    #[instrument(level = "debug", skip(self))]
    async fn confirm_address(&self, customer_id: Uuid, address_id: Uuid) -> Result<()> {
        let mut customers = self.customers.write().await;
        let customer = customers
            .get_mut(&customer_id)
            .ok_or_else(|| AddressError::not_found(CUSTOMER_NOT_FOUND))?;
        let address = customer
            .address_mut(address_id)
            .ok_or_else(|| AddressError::not_found(ADDRESS_NOT_FOUND))?;
        address.confirmed = true;
        Ok(())
    }

    #[instrument(level = "debug", skip(self))]
    async fn change_primary_address(&self, customer_id: Uuid, address_id: Uuid) -> Result<()> {
        let mut customers = self.customers.write().await;
        let customer = customers
            .get_mut(&customer_id)
            .ok_or_else(|| AddressError::not_found(CUSTOMER_NOT_FOUND))?;
        if customer.address(address_id).is_none() {
            return Err(AddressError::not_found(ADDRESS_NOT_FOUND));
        }
        customer.primary_address = Some(address_id);
        info!("Primary address of customer {} is now {}", customer_id, address_id);
        Ok(())
    }
}
