//! Catalogue page use-case.
//!
//! Chooses between the full listing and a type-filtered listing, and always
//! pairs it with the complete type list for the filter navigation.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::try_join;
use tracing::{debug, warn};

use crate::domain::ports::{
    CatalogueIndex, CataloguePageQuery, CatalogueRepository, CatalogueRepositoryError,
};
use crate::domain::{Error, TypeFilter};

fn map_repository_error(error: CatalogueRepositoryError) -> Error {
    match error {
        CatalogueRepositoryError::Connection { message } => {
            warn!(%message, "catalogue repository unavailable");
            Error::service_unavailable("catalogue temporarily unavailable")
        }
        CatalogueRepositoryError::Query { message } => {
            Error::internal(format!("catalogue repository error: {message}"))
        }
    }
}

/// Catalogue service implementing [`CataloguePageQuery`].
pub struct CataloguePageService<R: ?Sized> {
    catalogue: Arc<R>,
}

impl<R: ?Sized> CataloguePageService<R> {
    /// Create a service reading from `catalogue`.
    pub fn new(catalogue: Arc<R>) -> Self {
        Self { catalogue }
    }
}

#[async_trait]
impl<R> CataloguePageQuery for CataloguePageService<R>
where
    R: CatalogueRepository + ?Sized,
{
    async fn index(&self, filter: &TypeFilter) -> Result<CatalogueIndex, Error> {
        let donuts = async {
            match filter {
                TypeFilter::All => self.catalogue.list_all().await,
                TypeFilter::Named(name) => self.catalogue.list_by_type(name).await,
            }
        };
        let (donuts, donut_types) =
            try_join!(donuts, self.catalogue.list_types()).map_err(map_repository_error)?;

        debug!(
            selected_type = filter.selected_name(),
            donuts = donuts.len(),
            donut_types = donut_types.len(),
            "assembled catalogue index"
        );

        Ok(CatalogueIndex {
            donuts,
            donut_types,
            selected_type: filter.selected_name().to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockCatalogueRepository;
    use crate::domain::{Donut, DonutDraft, DonutType, DonutTypeName, ErrorCode};
    use rstest::{fixture, rstest};

    fn donut_type(id: i32, name: &str) -> DonutType {
        DonutType::new(id, DonutTypeName::new(name).expect("valid type name"))
    }

    fn donut(id: i32, name: &str, donut_type: &DonutType) -> Donut {
        Donut::new(DonutDraft {
            id,
            name: name.to_owned(),
            donut_type: donut_type.clone(),
            description: String::new(),
            price: 150,
            image: format!("https://cdn.example.test/{id}.png"),
        })
        .expect("valid donut")
    }

    #[fixture]
    fn types() -> Vec<DonutType> {
        vec![donut_type(1, "glazed"), donut_type(2, "filled")]
    }

    fn service(repo: MockCatalogueRepository) -> CataloguePageService<MockCatalogueRepository> {
        CataloguePageService::new(Arc::new(repo))
    }

    #[rstest]
    #[tokio::test]
    async fn all_filter_lists_every_donut(types: Vec<DonutType>) {
        let glazed = types.first().cloned().expect("fixture type");
        let listed = vec![donut(1, "Original", &glazed)];
        let expected = listed.clone();
        let returned_types = types.clone();

        let mut repo = MockCatalogueRepository::new();
        repo.expect_list_all()
            .times(1)
            .return_once(move || Ok(listed));
        repo.expect_list_by_type().never();
        repo.expect_list_types()
            .times(1)
            .return_once(move || Ok(returned_types));

        let index = service(repo)
            .index(&TypeFilter::All)
            .await
            .expect("index succeeds");

        assert_eq!(index.donuts, expected);
        assert_eq!(index.donut_types, types);
        assert_eq!(index.selected_type, "all");
    }

    #[rstest]
    #[tokio::test]
    async fn named_filter_queries_by_exact_type_name(types: Vec<DonutType>) {
        let returned_types = types.clone();
        let mut repo = MockCatalogueRepository::new();
        repo.expect_list_all().never();
        repo.expect_list_by_type()
            .withf(|type_name: &str| type_name == "filled")
            .times(1)
            .returning(|_| Ok(Vec::new()));
        repo.expect_list_types()
            .times(1)
            .return_once(move || Ok(returned_types));

        let index = service(repo)
            .index(&TypeFilter::Named("filled".to_owned()))
            .await
            .expect("index succeeds");

        assert!(index.donuts.is_empty());
        assert_eq!(index.donut_types, types);
        assert_eq!(index.selected_type, "filled");
    }

    #[rstest]
    #[case(CatalogueRepositoryError::connection("refused"), ErrorCode::ServiceUnavailable)]
    #[case(CatalogueRepositoryError::query("bad row"), ErrorCode::InternalError)]
    #[tokio::test]
    async fn repository_failures_map_to_domain_errors(
        #[case] failure: CatalogueRepositoryError,
        #[case] expected: ErrorCode,
    ) {
        let mut repo = MockCatalogueRepository::new();
        repo.expect_list_all().return_once(move || Err(failure));
        repo.expect_list_types().returning(|| Ok(Vec::new()));

        let err = service(repo)
            .index(&TypeFilter::All)
            .await
            .expect_err("repository failure propagates");

        assert_eq!(err.code(), expected);
    }

    #[rstest]
    #[tokio::test]
    async fn unavailable_errors_do_not_echo_connection_detail() {
        let mut repo = MockCatalogueRepository::new();
        repo.expect_list_all().return_once(|| {
            Err(CatalogueRepositoryError::connection(
                "could not connect to server at 10.0.0.5:5432",
            ))
        });
        repo.expect_list_types().returning(|| Ok(Vec::new()));

        let err = service(repo)
            .index(&TypeFilter::All)
            .await
            .expect_err("connection failure propagates");

        assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
        assert!(!err.message().contains("10.0.0.5"));
    }
}
