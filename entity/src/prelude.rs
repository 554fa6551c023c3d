pub use super::comment::Entity as Comment;
pub use super::jurisdiction::Entity as Jurisdiction;
pub use super::party::Entity as Party;
pub use super::permission::Entity as Permission;
pub use super::priority::Entity as Priority;
pub use super::role::Entity as Role;
pub use super::role_permission::Entity as RolePermission;
pub use super::service::Entity as Service;
pub use super::service_group::Entity as ServiceGroup;
pub use super::service_request::Entity as ServiceRequest;
pub use super::setting::Entity as Setting;
pub use super::status::Entity as Status;
