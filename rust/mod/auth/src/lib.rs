pub mod lookup;
pub mod model;
pub mod service;
pub mod token;

pub use lookup::find_resident;
pub use model::{Role, Session, TokenPayload};
pub use service::{AuthConfig, AuthError, AuthService};
pub use token::{issue, verify};
