pub mod delivery_speed;
pub mod order_status;
