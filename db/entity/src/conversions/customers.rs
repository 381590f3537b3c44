use emporium_account::{
    models::{AddressFields, Customer},
    ShopId, UserId,
};
use sea_orm::Set;

use crate::{customer, errors::DbEntityError};

impl TryFrom<customer::Model> for Customer {
    type Error = DbEntityError;

    fn try_from(value: customer::Model) -> Result<Self, Self::Error> {
        Ok(Customer {
            id: UserId::new(value.id),
            shop_id: ShopId(value.shop_id),
            email: value.email,
            first_name: value.first_name,
            last_name: value.last_name,
            salutation: value.salutation,
            invoice_address: AddressFields {
                salutation: value.invoice_salutation,
                first_name: value.invoice_first_name,
                last_name: value.invoice_last_name,
                company: value.invoice_company,
                additional_info: value.invoice_additional_info,
                street: value.invoice_street,
                street_number: value.invoice_street_number,
                zip_code: value.invoice_zip_code,
                city: value.invoice_city,
                country_id: value.invoice_country_id,
                vat_id: value.invoice_vat_id,
                phone: value.invoice_phone,
                mobile: value.invoice_mobile,
                fax: value.invoice_fax,
            },
            created_at: value.created_at,
            updated_at: value.updated_at,
        })
    }
}

impl From<&Customer> for customer::ActiveModel {
    fn from(value: &Customer) -> Self {
        let address = value.invoice_address.clone();
        customer::ActiveModel {
            id: Set(value.id.to_string()),
            shop_id: Set(value.shop_id.0),
            email: Set(value.email.clone()),
            first_name: Set(value.first_name.clone()),
            last_name: Set(value.last_name.clone()),
            salutation: Set(value.salutation.clone()),
            invoice_salutation: Set(address.salutation),
            invoice_first_name: Set(address.first_name),
            invoice_last_name: Set(address.last_name),
            invoice_company: Set(address.company),
            invoice_additional_info: Set(address.additional_info),
            invoice_street: Set(address.street),
            invoice_street_number: Set(address.street_number),
            invoice_zip_code: Set(address.zip_code),
            invoice_city: Set(address.city),
            invoice_country_id: Set(address.country_id),
            invoice_vat_id: Set(address.vat_id),
            invoice_phone: Set(address.phone),
            invoice_mobile: Set(address.mobile),
            invoice_fax: Set(address.fax),
            created_at: Set(value.created_at),
            updated_at: Set(value.updated_at),
        }
    }
}
