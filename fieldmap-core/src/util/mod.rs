pub mod geo_ops;
pub mod label_ops;
