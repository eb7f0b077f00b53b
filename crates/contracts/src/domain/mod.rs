// Reference tables (a101-a104)
pub mod a101_product;
pub mod a102_order;
pub mod a103_customer;
pub mod a104_review;
