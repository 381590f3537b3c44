pub mod prelude;

pub mod basket;
pub mod basket_item;
pub mod country;
pub mod customer;
pub mod delivery_address;
pub mod newsletter_subscription;
pub mod review;
pub mod wished_price;
