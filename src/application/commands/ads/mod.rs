mod create;
mod delete;
mod service;
mod update;

pub use create::CreateAdCommand;
pub use delete::DeleteAdCommand;
pub use service::AdCommandService;
pub use update::UpdateAdCommand;
