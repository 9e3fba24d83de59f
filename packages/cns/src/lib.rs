pub mod acl;
pub mod oracle;
pub mod registrar;
pub mod registry;
pub mod resolver;
pub mod utils;
