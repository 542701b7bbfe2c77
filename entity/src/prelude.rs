pub use super::client::Entity as Client;
pub use super::department::Entity as Department;
pub use super::employee::Entity as Employee;
pub use super::invoice::Entity as Invoice;
pub use super::request::Entity as Request;
