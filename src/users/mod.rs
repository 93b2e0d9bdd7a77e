//! Request builders for the user resource.
//!
//! Two cooperating variants cover the API surface:
//!
//! - [`UserBuilder`] - bound to one user ID, exposes per-entity operations
//!   (get, update, delete, sign-out, identities, devices, profile).
//! - [`UsersBuilder`] - unbound, exposes collection operations (list, create,
//!   password reset, bulk profiles).
//!
//! Both are cheap, clonable value objects; each operation constructs a fresh
//! [`RequestDescriptor`](crate::request::RequestDescriptor) and issues exactly
//! one transport dispatch. [`UserScope`] is the factory result when the
//! caller decides at runtime whether an ID is available.

mod collection;
mod user;

pub use collection::UsersBuilder;
pub use user::UserBuilder;

/// Base resource path for user endpoints.
pub(crate) const USER_RESOURCE: &str = "user";

/// Builder variant selected by [`IamClient::user_scope`](crate::IamClient::user_scope).
///
/// Pure dispatch on identifier presence: an ID yields the single-resource
/// builder, no ID yields the collection builder.
#[derive(Clone)]
pub enum UserScope {
    /// Operations on one identified user
    Single(UserBuilder),
    /// Operations over the user collection
    Collection(UsersBuilder),
}
