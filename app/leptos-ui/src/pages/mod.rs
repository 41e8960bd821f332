pub mod browse;
pub mod sell;
