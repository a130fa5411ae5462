pub mod customer;
pub mod demand;
pub mod region;
pub mod registration;
