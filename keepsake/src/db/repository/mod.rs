mod connections;
mod details;
mod profiles;

pub use connections::ConnectionRepository;
pub use details::DetailRepository;
pub use profiles::ProfileRepository;
