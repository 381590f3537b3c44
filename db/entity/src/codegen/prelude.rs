pub use super::{
    basket::Entity as Basket, basket_item::Entity as BasketItem, country::Entity as Country,
    customer::Entity as Customer, delivery_address::Entity as DeliveryAddress,
    newsletter_subscription::Entity as NewsletterSubscription, review::Entity as Review,
    wished_price::Entity as WishedPrice,
};
