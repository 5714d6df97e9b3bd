mod credentials;

pub use credentials::{Credentials, ORGANIZATION_HEADER};
