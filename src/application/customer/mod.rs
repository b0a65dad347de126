pub mod add_customer;
pub mod delete_customer;
pub mod get_customer;
pub mod list_customers;
pub mod update_customer;

pub use add_customer::{AddCustomerCommand, AddCustomerUseCase};
pub use delete_customer::{DeleteCustomerCommand, DeleteCustomerUseCase};
pub use get_customer::GetCustomerUseCase;
pub use list_customers::{CustomerDto, ListCustomersUseCase};
pub use update_customer::{UpdateCustomerCommand, UpdateCustomerUseCase};
