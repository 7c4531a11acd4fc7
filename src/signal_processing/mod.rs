pub mod dynamic_iir;
pub mod filter;
pub mod iir_core;
pub mod iir_filter;

pub use dynamic_iir::DynamicIirFilter;
pub use filter::Filter;
pub use iir_core::validate_coefficients;
pub use iir_filter::IirFilter;
