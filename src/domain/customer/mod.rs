pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;
pub mod value_objects;

#[cfg(test)]
pub mod testing;

pub use entities::Customer;
pub use errors::CustomerError;
pub use ports::CustomerRepository;
pub use services::CustomerService;
pub use value_objects::{CustomerStatus, EmailAddress, PersonName, ValueObjectError};
