mod create;
mod publish;
mod service;
mod update;

pub use create::CreateArticleCommand;
pub use publish::PublishArticleCommand;
pub use service::ArticleCommandService;
pub use update::UpdatePublishedArticleCommand;
