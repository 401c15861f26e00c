#![allow(dead_code)]

pub mod mocks;

use chrono::{DateTime, TimeZone, Utc};
use nepnews_core::application::dto::Actor;
use nepnews_core::domain::article::{
    Article, ArticleContent, ArticleId, ArticleStatus, ArticleTitle, Category,
};
use nepnews_core::domain::user::{Role, UserId};

pub fn user_id(n: i64) -> UserId {
    UserId::new(n).expect("test user id")
}

pub fn actor(id: i64, role: Role) -> Actor {
    Actor::new(user_id(id), role)
}

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap()
}

pub fn draft_article(id: i64, author: i64) -> Article {
    let now = fixed_now();
    Article {
        id: ArticleId::new(id).unwrap(),
        title: ArticleTitle::new("Election preview").unwrap(),
        content: ArticleContent::new("Voters head to the polls next week.").unwrap(),
        category: Category::new("politics").unwrap(),
        keywords: vec!["election".into(), "Nepal".into()],
        status: ArticleStatus::Draft,
        publish_date: None,
        author_id: user_id(author),
        editor_id: None,
        created_at: now,
        updated_at: now,
    }
}

pub fn published_article(id: i64, author: i64, editor: i64) -> Article {
    let mut article = draft_article(id, author);
    article.publish(user_id(editor), fixed_now());
    article
}
