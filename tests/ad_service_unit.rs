use std::sync::Arc;

mod support;

use nepnews_core::application::commands::ads::{
    AdCommandService, CreateAdCommand, DeleteAdCommand, UpdateAdCommand,
};
use nepnews_core::application::error::ApplicationError;
use nepnews_core::application::queries::ads::AdQueryService;
use nepnews_core::domain::ad::AdRepository;
use nepnews_core::domain::user::Role;
use support::mocks::{FixedClock, InMemoryAdRepo};
use support::{actor, fixed_now};

fn service(repo: &Arc<InMemoryAdRepo>) -> AdCommandService {
    let repo: Arc<dyn AdRepository> = Arc::clone(repo) as _;
    AdCommandService::new(repo, Arc::new(FixedClock(fixed_now())))
}

#[tokio::test]
async fn ad_mutations_are_forbidden_for_non_managers() {
    let repo = Arc::new(InMemoryAdRepo::new());
    let service = service(&repo);

    for role in [Role::Author, Role::Editor] {
        let caller = actor(7, role);

        let create = service
            .create_ad(
                &caller,
                CreateAdCommand {
                    placement: "sidebar".into(),
                    content: "Buy now".into(),
                },
            )
            .await;
        assert!(matches!(create, Err(ApplicationError::Forbidden(_))));

        let update = service
            .update_ad(
                &caller,
                UpdateAdCommand {
                    id: 1,
                    placement: Some("header".into()),
                    content: None,
                },
            )
            .await;
        assert!(matches!(update, Err(ApplicationError::Forbidden(_))));

        let delete = service.delete_ad(&caller, DeleteAdCommand { id: 1 }).await;
        assert!(matches!(delete, Err(ApplicationError::Forbidden(_))));
    }

    assert_eq!(repo.count(), 0);
}

#[tokio::test]
async fn create_ad_records_the_creator() {
    let repo = Arc::new(InMemoryAdRepo::new());
    let service = service(&repo);

    let ad = service
        .create_ad(
            &actor(4, Role::AdsManager),
            CreateAdCommand {
                placement: "homepage-top".into(),
                content: "Festival sale".into(),
            },
        )
        .await
        .unwrap();

    assert_eq!(ad.created_by, 4);
    assert_eq!(ad.placement, "homepage-top");
    assert_eq!(ad.created_at, fixed_now());
    assert_eq!(repo.count(), 1);
}

#[tokio::test]
async fn create_ad_rejects_blank_fields() {
    let repo = Arc::new(InMemoryAdRepo::new());
    let service = service(&repo);
    let caller = actor(1, Role::Admin);

    let blank_placement = service
        .create_ad(
            &caller,
            CreateAdCommand {
                placement: " ".into(),
                content: "Buy now".into(),
            },
        )
        .await;
    assert!(matches!(
        blank_placement,
        Err(ApplicationError::Validation(_))
    ));

    let blank_content = service
        .create_ad(
            &caller,
            CreateAdCommand {
                placement: "sidebar".into(),
                content: String::new(),
            },
        )
        .await;
    assert!(matches!(blank_content, Err(ApplicationError::Validation(_))));

    assert_eq!(repo.count(), 0);
}

#[tokio::test]
async fn update_ad_applies_only_provided_fields() {
    let repo = Arc::new(InMemoryAdRepo::new());
    let service = service(&repo);
    let caller = actor(4, Role::AdsManager);

    let created = service
        .create_ad(
            &caller,
            CreateAdCommand {
                placement: "sidebar".into(),
                content: "Buy now".into(),
            },
        )
        .await
        .unwrap();

    let updated = service
        .update_ad(
            &caller,
            UpdateAdCommand {
                id: created.id,
                placement: Some("footer".into()),
                content: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.placement, "footer");
    assert_eq!(updated.content, "Buy now");
}

#[tokio::test]
async fn update_missing_ad_is_not_found() {
    let repo = Arc::new(InMemoryAdRepo::new());
    let service = service(&repo);

    let result = service
        .update_ad(
            &actor(1, Role::Admin),
            UpdateAdCommand {
                id: 404,
                placement: Some("footer".into()),
                content: None,
            },
        )
        .await;

    assert!(matches!(result, Err(ApplicationError::NotFound(_))));
}

#[tokio::test]
async fn delete_ad_is_idempotent() {
    let repo = Arc::new(InMemoryAdRepo::new());
    let service = service(&repo);
    let caller = actor(1, Role::Admin);

    let created = service
        .create_ad(
            &caller,
            CreateAdCommand {
                placement: "sidebar".into(),
                content: "Buy now".into(),
            },
        )
        .await
        .unwrap();

    service
        .delete_ad(&caller, DeleteAdCommand { id: created.id })
        .await
        .unwrap();
    assert_eq!(repo.count(), 0);

    // a second delete of the same id still succeeds
    service
        .delete_ad(&caller, DeleteAdCommand { id: created.id })
        .await
        .unwrap();
}

#[tokio::test]
async fn get_all_ads_is_public_and_ordered() {
    let repo = Arc::new(InMemoryAdRepo::new());
    let commands = service(&repo);
    let caller = actor(4, Role::AdsManager);

    for placement in ["first", "second", "third"] {
        commands
            .create_ad(
                &caller,
                CreateAdCommand {
                    placement: placement.into(),
                    content: "ad body".into(),
                },
            )
            .await
            .unwrap();
    }

    let queries = AdQueryService::new(Arc::clone(&repo) as _);
    let ads = queries.get_all_ads().await.unwrap();

    let placements: Vec<&str> = ads.iter().map(|ad| ad.placement.as_str()).collect();
    assert_eq!(placements, ["first", "second", "third"]);
}
