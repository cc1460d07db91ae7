pub mod amd;
pub mod intel;
pub mod nvidia;
