pub use super::dispatcher::Entity as Dispatcher;
pub use super::server::Entity as Server;
pub use super::user::Entity as User;
