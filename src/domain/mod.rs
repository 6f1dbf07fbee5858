pub mod catalog;
pub mod city;

pub use catalog::CityCatalog;
pub use city::City;
