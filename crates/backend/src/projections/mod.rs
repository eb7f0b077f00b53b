pub mod p910_sales_dataset;
