use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument};

use crate::{
    caller::{require_caller, Caller},
    errors::{AccountError, Result},
    guard::AccessGuard,
    models::{AddressFields, Customer, DeliveryAddress},
    new_id,
    repository::{AddressRepository, CountryRepository, CustomerRepository},
    resource::{Operation, ResourceKind},
    service::ServiceConfig,
    validation,
};

/// Customer profile, invoice address and delivery addresses.
///
/// Addresses have no permission override: only their owner may touch them.
pub struct CustomerService {
    customers: Arc<dyn CustomerRepository>,
    addresses: Arc<dyn AddressRepository>,
    countries: Arc<dyn CountryRepository>,
    guard: AccessGuard,
    config: Arc<ServiceConfig>,
}

impl CustomerService {
    pub fn new(
        customers: Arc<dyn CustomerRepository>,
        addresses: Arc<dyn AddressRepository>,
        countries: Arc<dyn CountryRepository>,
        guard: AccessGuard,
        config: Arc<ServiceConfig>,
    ) -> Self {
        Self {
            customers,
            addresses,
            countries,
            guard,
            config,
        }
    }

    async fn load(&self, caller: &Caller) -> Result<Customer> {
        self.customers
            .find(caller.id())
            .await?
            .ok_or_else(|| AccountError::not_found(ResourceKind::Customer, caller.id().as_str()))
    }

    /// Fails with `CountryNotFound` unless the country exists and is active.
    async fn check_country(&self, fields: &AddressFields) -> Result<()> {
        let Some(country_id) = fields.country_id.as_deref() else {
            return Ok(());
        };

        match self.countries.find(country_id).await? {
            Some(country) if country.active => Ok(()),
            _ => Err(AccountError::CountryNotFound(country_id.to_string())),
        }
    }

    #[instrument(skip_all, fields(caller = caller.map(|c| c.id().as_str())))]
    pub async fn customer(&self, caller: Option<&Caller>) -> Result<Customer> {
        let caller = require_caller(caller)?;
        let customer = self.load(caller).await?;
        self.guard.ensure(Some(caller), &customer, Operation::Read, None)?;
        Ok(customer)
    }

    #[instrument(skip_all, fields(caller = caller.map(|c| c.id().as_str())))]
    pub async fn invoice_address(&self, caller: Option<&Caller>) -> Result<AddressFields> {
        Ok(self.customer(caller).await?.invoice_address)
    }

    /// Merges the fields present in `patch` into the invoice address.
    #[instrument(skip_all, fields(caller = caller.map(|c| c.id().as_str())))]
    pub async fn set_invoice_address(&self, caller: Option<&Caller>, patch: AddressFields) -> Result<AddressFields> {
        validation::check_must_fill(&patch, &self.config.must_fill_fields)?;

        let caller = require_caller(caller)?;
        let mut customer = self.load(caller).await?;
        self.guard.ensure(Some(caller), &customer, Operation::Update, None)?;
        self.check_country(&patch).await?;

        customer.invoice_address.merge(patch);
        customer.updated_at = Utc::now();
        self.customers.save(&customer).await?;

        debug!(customer = %customer.id, "invoice address updated");
        Ok(customer.invoice_address)
    }

    #[instrument(skip_all, fields(caller = caller.map(|c| c.id().as_str())))]
    pub async fn delivery_addresses(&self, caller: Option<&Caller>) -> Result<Vec<DeliveryAddress>> {
        let caller = require_caller(caller)?;
        Ok(self.addresses.list_by_owner(caller.id()).await?)
    }

    #[instrument(skip(self, caller), fields(caller = caller.map(|c| c.id().as_str())))]
    pub async fn delivery_address(&self, caller: Option<&Caller>, id: &str) -> Result<DeliveryAddress> {
        let address = self
            .addresses
            .find(id)
            .await?
            .ok_or_else(|| AccountError::not_found(ResourceKind::Address, id))?;
        self.guard.ensure(caller, &address, Operation::Read, None)?;
        Ok(address)
    }

    #[instrument(skip_all, fields(caller = caller.map(|c| c.id().as_str())))]
    pub async fn add_delivery_address(&self, caller: Option<&Caller>, fields: AddressFields) -> Result<DeliveryAddress> {
        validation::check_must_fill(&fields, &self.config.must_fill_fields)?;

        let caller = require_caller(caller)?;
        // Delivery addresses hang off a registered customer
        self.load(caller).await?;
        self.check_country(&fields).await?;

        let address = DeliveryAddress {
            id: new_id(),
            owner_id: caller.id().clone(),
            shop_id: caller.shop_id(),
            fields,
        };
        self.addresses.save(&address).await?;

        info!(id = %address.id, owner = %address.owner_id, "delivery address added");
        Ok(address)
    }

    #[instrument(skip(self, caller), fields(caller = caller.map(|c| c.id().as_str())))]
    pub async fn delete_delivery_address(&self, caller: Option<&Caller>, id: &str) -> Result<bool> {
        let address = self
            .addresses
            .find(id)
            .await?
            .ok_or_else(|| AccountError::not_found(ResourceKind::Address, id))?;
        self.guard.ensure(caller, &address, Operation::Delete, None)?;

        self.addresses.delete(id).await?;
        info!(id, "delivery address deleted");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        caller::{ShopId, UserId},
        models::{AddressField, Country},
        testing::InMemoryStore,
    };

    fn service(store: Arc<InMemoryStore>, must_fill: Vec<AddressField>) -> CustomerService {
        CustomerService::new(
            store.clone(),
            store.clone(),
            store,
            AccessGuard::default(),
            Arc::new(ServiceConfig {
                must_fill_fields: must_fill,
                ..Default::default()
            }),
        )
    }

    fn store() -> Arc<InMemoryStore> {
        let store = Arc::new(InMemoryStore::new());
        store.insert_customer(Customer::new(UserId::from("alice"), ShopId(1), "alice@example.com"));
        store.insert_country(Country {
            id: "de".into(),
            title: "Germany".into(),
            active: true,
        });
        store.insert_country(Country {
            id: "xx".into(),
            title: "Retired".into(),
            active: false,
        });
        store
    }

    fn alice() -> Caller {
        Caller::new("alice", ShopId(1))
    }

    #[tokio::test]
    async fn test_set_invoice_address_merges_partial_payload() -> anyhow::Result<()> {
        let service = service(store(), vec![]);

        service
            .set_invoice_address(
                Some(&alice()),
                AddressFields {
                    first_name: Some("Alice".into()),
                    city: Some("Freiburg".into()),
                    ..Default::default()
                },
            )
            .await?;
        let address = service
            .set_invoice_address(
                Some(&alice()),
                AddressFields {
                    city: Some("Halle".into()),
                    ..Default::default()
                },
            )
            .await?;

        assert_eq!(address.first_name.as_deref(), Some("Alice"));
        assert_eq!(address.city.as_deref(), Some("Halle"));
        Ok(())
    }

    #[tokio::test]
    async fn test_must_fill_fields_are_checked_before_authentication() {
        let service = service(store(), vec![AddressField::FirstName, AddressField::LastName]);

        let err = service
            .set_invoice_address(None, AddressFields::default())
            .await
            .unwrap_err();

        match err {
            AccountError::ValidationFailed { missing_fields } => assert_eq!(missing_fields, ["firstname", "lastname"]),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unknown_or_inactive_country_is_rejected() {
        let service = service(store(), vec![]);

        for country in ["zz", "xx"] {
            let err = service
                .add_delivery_address(
                    Some(&alice()),
                    AddressFields {
                        country_id: Some(country.into()),
                        ..Default::default()
                    },
                )
                .await
                .unwrap_err();
            assert!(matches!(err, AccountError::CountryNotFound(id) if id == country));
        }
    }

    #[tokio::test]
    async fn test_delivery_address_is_owner_only() -> anyhow::Result<()> {
        let service = service(store(), vec![]);
        let address = service
            .add_delivery_address(
                Some(&alice()),
                AddressFields {
                    street: Some("Bertoldstr.".into()),
                    country_id: Some("de".into()),
                    ..Default::default()
                },
            )
            .await?;
        assert_eq!(address.owner_id, UserId::from("alice"));

        let bob = Caller::new("bob", ShopId(1));
        assert!(matches!(
            service.delivery_address(Some(&bob), &address.id).await,
            Err(AccountError::Unauthorized { .. })
        ));
        assert!(matches!(
            service.delete_delivery_address(None, &address.id).await,
            Err(AccountError::NotAuthenticated)
        ));

        assert!(service.delete_delivery_address(Some(&alice()), &address.id).await?);
        assert!(service.delivery_addresses(Some(&alice())).await?.is_empty());
        assert!(matches!(
            service.delivery_address(Some(&alice()), &address.id).await,
            Err(AccountError::ResourceNotFound { .. })
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_profile_is_not_found() {
        let service = service(store(), vec![]);
        let stranger = Caller::new("nobody", ShopId(1));

        assert!(matches!(
            service.customer(Some(&stranger)).await,
            Err(AccountError::ResourceNotFound {
                kind: ResourceKind::Customer,
                ..
            })
        ));
        assert!(matches!(service.customer(None).await, Err(AccountError::NotAuthenticated)));
    }
}
