use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    caller::{ShopId, UserId},
    resource::{Resource, ResourceKind},
};

/// Names of the address fields, as used by must-fill configuration and in
/// validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressField {
    #[serde(rename = "salutation")]
    Salutation,
    #[serde(rename = "firstname")]
    FirstName,
    #[serde(rename = "lastname")]
    LastName,
    #[serde(rename = "company")]
    Company,
    #[serde(rename = "additionalInfo")]
    AdditionalInfo,
    #[serde(rename = "street")]
    Street,
    #[serde(rename = "streetNumber")]
    StreetNumber,
    #[serde(rename = "zipCode")]
    ZipCode,
    #[serde(rename = "city")]
    City,
    #[serde(rename = "countryId")]
    CountryId,
    #[serde(rename = "vatID")]
    VatId,
    #[serde(rename = "phone")]
    Phone,
    #[serde(rename = "mobile")]
    Mobile,
    #[serde(rename = "fax")]
    Fax,
}

impl AddressField {
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressField::Salutation => "salutation",
            AddressField::FirstName => "firstname",
            AddressField::LastName => "lastname",
            AddressField::Company => "company",
            AddressField::AdditionalInfo => "additionalInfo",
            AddressField::Street => "street",
            AddressField::StreetNumber => "streetNumber",
            AddressField::ZipCode => "zipCode",
            AddressField::City => "city",
            AddressField::CountryId => "countryId",
            AddressField::VatId => "vatID",
            AddressField::Phone => "phone",
            AddressField::Mobile => "mobile",
            AddressField::Fax => "fax",
        }
    }
}

impl fmt::Display for AddressField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Postal address fields.
///
/// Used both as the stored value and as a partial update: `None` in a patch
/// keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressFields {
    pub salutation: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company: Option<String>,
    pub additional_info: Option<String>,
    pub street: Option<String>,
    pub street_number: Option<String>,
    pub zip_code: Option<String>,
    pub city: Option<String>,
    pub country_id: Option<String>,
    pub vat_id: Option<String>,
    pub phone: Option<String>,
    pub mobile: Option<String>,
    pub fax: Option<String>,
}

impl AddressFields {
    pub fn get(&self, field: AddressField) -> Option<&str> {
        let value = match field {
            AddressField::Salutation => &self.salutation,
            AddressField::FirstName => &self.first_name,
            AddressField::LastName => &self.last_name,
            AddressField::Company => &self.company,
            AddressField::AdditionalInfo => &self.additional_info,
            AddressField::Street => &self.street,
            AddressField::StreetNumber => &self.street_number,
            AddressField::ZipCode => &self.zip_code,
            AddressField::City => &self.city,
            AddressField::CountryId => &self.country_id,
            AddressField::VatId => &self.vat_id,
            AddressField::Phone => &self.phone,
            AddressField::Mobile => &self.mobile,
            AddressField::Fax => &self.fax,
        };
        value.as_deref()
    }

    /// Overwrites every field that is present in `patch`.
    pub fn merge(&mut self, patch: AddressFields) {
        fn set(target: &mut Option<String>, value: Option<String>) {
            if value.is_some() {
                *target = value;
            }
        }

        set(&mut self.salutation, patch.salutation);
        set(&mut self.first_name, patch.first_name);
        set(&mut self.last_name, patch.last_name);
        set(&mut self.company, patch.company);
        set(&mut self.additional_info, patch.additional_info);
        set(&mut self.street, patch.street);
        set(&mut self.street_number, patch.street_number);
        set(&mut self.zip_code, patch.zip_code);
        set(&mut self.city, patch.city);
        set(&mut self.country_id, patch.country_id);
        set(&mut self.vat_id, patch.vat_id);
        set(&mut self.phone, patch.phone);
        set(&mut self.mobile, patch.mobile);
        set(&mut self.fax, patch.fax);
    }
}

/// An additional shipping address of a customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryAddress {
    pub id: String,
    pub owner_id: UserId,
    pub shop_id: ShopId,
    pub fields: AddressFields,
}

impl Resource for DeliveryAddress {
    const KIND: ResourceKind = ResourceKind::Address;

    fn id(&self) -> &str {
        &self.id
    }

    fn owner_id(&self) -> &UserId {
        &self.owner_id
    }

    fn shop_id(&self) -> ShopId {
        self.shop_id
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    pub id: String,
    pub title: String,
    pub active: bool,
}
