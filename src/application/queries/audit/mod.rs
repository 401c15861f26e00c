mod list;
mod service;

pub use list::ListArticleLogQuery;
pub use service::AuditQueryService;
