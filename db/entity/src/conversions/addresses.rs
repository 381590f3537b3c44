use emporium_account::{
    models::{AddressFields, Country, DeliveryAddress},
    ShopId, UserId,
};
use sea_orm::Set;

use crate::{country, delivery_address, errors::DbEntityError};

impl TryFrom<delivery_address::Model> for DeliveryAddress {
    type Error = DbEntityError;

    fn try_from(value: delivery_address::Model) -> Result<Self, Self::Error> {
        Ok(DeliveryAddress {
            id: value.id,
            owner_id: UserId::new(value.owner_id),
            shop_id: ShopId(value.shop_id),
            fields: AddressFields {
                salutation: value.salutation,
                first_name: value.first_name,
                last_name: value.last_name,
                company: value.company,
                additional_info: value.additional_info,
                street: value.street,
                street_number: value.street_number,
                zip_code: value.zip_code,
                city: value.city,
                country_id: value.country_id,
                vat_id: value.vat_id,
                phone: value.phone,
                mobile: value.mobile,
                fax: value.fax,
            },
        })
    }
}

impl From<&DeliveryAddress> for delivery_address::ActiveModel {
    fn from(value: &DeliveryAddress) -> Self {
        let fields = value.fields.clone();
        delivery_address::ActiveModel {
            id: Set(value.id.clone()),
            owner_id: Set(value.owner_id.to_string()),
            shop_id: Set(value.shop_id.0),
            salutation: Set(fields.salutation),
            first_name: Set(fields.first_name),
            last_name: Set(fields.last_name),
            company: Set(fields.company),
            additional_info: Set(fields.additional_info),
            street: Set(fields.street),
            street_number: Set(fields.street_number),
            zip_code: Set(fields.zip_code),
            city: Set(fields.city),
            country_id: Set(fields.country_id),
            vat_id: Set(fields.vat_id),
            phone: Set(fields.phone),
            mobile: Set(fields.mobile),
            fax: Set(fields.fax),
        }
    }
}

impl From<country::Model> for Country {
    fn from(value: country::Model) -> Self {
        Country {
            id: value.id,
            title: value.title,
            active: value.active,
        }
    }
}
