//! Integration tests for the resource command handlers.
//!
//! These exercise the handlers end to end over the in-memory store: identifier
//! issuance, validation and conflicts, patch and overwrite updates, and the
//! list query envelope.

use common::{EntityId, Paging};
use domain::service::ResourceQuery;
use domain::{
    Book, CreateBook, CreateMovie, CreateProduct, CreateTodo, DomainError, DuplicatePolicy, Movie,
    MovieFilter, MovieSort, Product, ProductSort, ResourceService, Todo, TodoFilter, UpdateBook,
    UpdateMovie, UpdateProduct, UpdateTodo,
};
use entity_store::InMemoryStore;

fn movies() -> ResourceService<Movie> {
    ResourceService::in_memory()
}

fn inception() -> CreateMovie {
    CreateMovie::new("Inception", "Nolan", 2010, "Sci-Fi")
}

mod identifiers {
    use super::*;

    #[tokio::test]
    async fn first_movie_gets_id_one() {
        let service = movies();
        let movie = service.create(inception()).await.unwrap();
        assert_eq!(movie.id, EntityId::new(1));
    }

    #[tokio::test]
    async fn deleted_ids_are_never_reissued() {
        let service = movies();
        let mut seen = Vec::new();

        for round in 0..5 {
            let created = service
                .create(CreateMovie::new(format!("Film {round}"), "Someone", 2000, ""))
                .await
                .unwrap();
            assert!(!seen.contains(&created.id));
            seen.push(created.id);

            if round % 2 == 0 {
                service.delete(created.id).await.unwrap();
            }
        }

        let live: Vec<_> = service.select(|_| true).await.iter().map(|m| m.id).collect();
        let mut unique = live.clone();
        unique.dedup();
        assert_eq!(live, unique);
        assert_eq!(live, vec![EntityId::new(2), EntityId::new(4)]);
    }

    #[tokio::test]
    async fn concurrent_creates_get_distinct_ids() {
        let service = std::sync::Arc::new(movies());
        let mut handles = Vec::new();
        for i in 0..20 {
            let service = service.clone();
            handles.push(tokio::spawn(async move {
                service
                    .create(CreateMovie::new(format!("Film {i}"), "Someone", 2000, ""))
                    .await
                    .unwrap()
                    .id
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 20);
        assert_eq!(service.count().await, 20);
    }

    #[tokio::test]
    async fn exhausted_identifiers_reject_create() {
        let service = ResourceService::<Movie>::new(InMemoryStore::starting_at(EntityId::new(
            u32::MAX,
        )));
        let last = service.create(inception()).await.unwrap();
        assert_eq!(last.id, EntityId::new(u32::MAX));

        let result = service
            .create(CreateMovie::new("Heat", "Mann", 1995, "Crime"))
            .await;
        assert_eq!(
            result,
            Err(DomainError::Store(entity_store::StoreError::IdsExhausted))
        );
        assert_eq!(service.count().await, 1);
    }
}

mod create {
    use super::*;

    #[tokio::test]
    async fn round_trip_after_trimming() {
        let service = movies();
        let created = service
            .create(CreateMovie::new("  Heat ", " Mann", 1995, "Crime  "))
            .await
            .unwrap();

        let fetched = service.get(created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.title, "Heat");
        assert_eq!(fetched.director, "Mann");
        assert_eq!(fetched.genre, "Crime");
    }

    #[tokio::test]
    async fn same_title_and_director_conflicts() {
        let service = movies();
        service.create(inception()).await.unwrap();

        let again = service
            .create(CreateMovie::new(" inception", "NOLAN ", 2011, "Thriller"))
            .await;
        assert_eq!(again, Err(DomainError::duplicate("title and director")));
        assert_eq!(service.count().await, 1);
    }

    #[tokio::test]
    async fn same_title_other_director_is_fine() {
        let service = movies();
        service.create(inception()).await.unwrap();
        let other = service
            .create(CreateMovie::new("Inception", "Someone Else", 2010, ""))
            .await;
        assert!(other.is_ok());
    }

    #[tokio::test]
    async fn invalid_year_rejected_without_side_effects() {
        let service = movies();
        let result = service
            .create(CreateMovie::new("Old", "Someone", 1800, "Drama"))
            .await;

        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert_eq!(service.count().await, 0);

        // A rejected create does not consume an identifier.
        let next = service.create(inception()).await.unwrap();
        assert_eq!(next.id, EntityId::new(1));
    }

    #[tokio::test]
    async fn book_duplicate_policy_is_selectable() {
        let strict: ResourceService<Book> = ResourceService::in_memory();
        strict.create(CreateBook::new("Dune", "Herbert", 1965)).await.unwrap();
        let dup = strict.create(CreateBook::new(" DUNE", "Someone", 2000)).await;
        assert_eq!(dup, Err(DomainError::duplicate("title")));

        let lenient: ResourceService<Book> =
            ResourceService::with_policy(InMemoryStore::new(), DuplicatePolicy::Allow);
        lenient.create(CreateBook::new("Dune", "Herbert", 1965)).await.unwrap();
        let dup = lenient.create(CreateBook::new("Dune", "Herbert", 1965)).await;
        assert_eq!(dup.unwrap().id, EntityId::new(2));
    }

    #[tokio::test]
    async fn products_have_no_uniqueness_rule() {
        let service: ResourceService<Product> = ResourceService::in_memory();
        for _ in 0..2 {
            service
                .create(CreateProduct {
                    name: "Widget".into(),
                    price: 1.5,
                })
                .await
                .unwrap();
        }
        assert_eq!(service.count().await, 2);
    }
}

mod update {
    use super::*;

    #[tokio::test]
    async fn unknown_id_is_not_found_before_validation() {
        let service = movies();
        let result = service
            .update(
                EntityId::new(42),
                UpdateMovie {
                    title: Some(" ".into()),
                    ..Default::default()
                },
            )
            .await;
        assert_eq!(result, Err(DomainError::not_found("movie", EntityId::new(42))));
    }

    #[tokio::test]
    async fn patch_keeps_absent_fields_and_position() {
        let service = movies();
        let first = service.create(inception()).await.unwrap();
        service
            .create(CreateMovie::new("Heat", "Mann", 1995, "Crime"))
            .await
            .unwrap();

        let updated = service
            .update(
                first.id,
                UpdateMovie {
                    genre: Some("Heist".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "Inception");
        assert_eq!(updated.genre, "Heist");
        let order: Vec<_> = service.select(|_| true).await.into_iter().map(|m| m.id).collect();
        assert_eq!(order, vec![EntityId::new(1), EntityId::new(2)]);
    }

    #[tokio::test]
    async fn update_after_earlier_delete_hits_the_right_entity() {
        let service = movies();
        let first = service.create(inception()).await.unwrap();
        let second = service
            .create(CreateMovie::new("Heat", "Mann", 1995, "Crime"))
            .await
            .unwrap();
        service.delete(first.id).await.unwrap();

        let updated = service
            .update(
                second.id,
                UpdateMovie {
                    year: Some(1996),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, second.id);
        assert_eq!(updated.title, "Heat");
        assert_eq!(service.get(second.id).await.unwrap().year, 1996);
        assert_eq!(service.count().await, 1);
    }

    #[tokio::test]
    async fn todo_with_empty_title_is_rejected_and_unchanged() {
        let service: ResourceService<Todo> = ResourceService::in_memory();
        let todo = service
            .create(CreateTodo {
                title: "Write tests".into(),
            })
            .await
            .unwrap();

        let result = service
            .update(
                todo.id,
                UpdateTodo {
                    title: "".into(),
                    is_done: true,
                },
            )
            .await;

        assert_eq!(result, Err(DomainError::required("title")));
        assert_eq!(service.get(todo.id).await.unwrap(), todo);
    }

    #[tokio::test]
    async fn book_patch_validates_year() {
        let service: ResourceService<Book> = ResourceService::in_memory();
        let book = service.create(CreateBook::new("Dune", "Herbert", 1965)).await.unwrap();
        let result = service
            .update(
                book.id,
                UpdateBook {
                    year: Some(-5),
                    ..Default::default()
                },
            )
            .await;
        assert_eq!(result, Err(DomainError::non_negative("year")));
    }

    #[tokio::test]
    async fn product_patch() {
        let service: ResourceService<Product> = ResourceService::in_memory();
        let product = service
            .create(CreateProduct {
                name: "Widget".into(),
                price: 2.0,
            })
            .await
            .unwrap();
        let updated = service
            .update(
                product.id,
                UpdateProduct {
                    name: Some(" Gadget ".into()),
                    price: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "Gadget");
        assert_eq!(updated.price, 2.0);
    }
}

mod delete {
    use super::*;

    #[tokio::test]
    async fn second_delete_is_not_found() {
        let service = movies();
        let movie = service.create(inception()).await.unwrap();
        service
            .create(CreateMovie::new("Heat", "Mann", 1995, "Crime"))
            .await
            .unwrap();

        assert!(service.delete(movie.id).await.is_ok());
        assert_eq!(service.count().await, 1);

        let again = service.delete(movie.id).await;
        assert_eq!(again, Err(DomainError::not_found("movie", movie.id)));
        assert_eq!(service.count().await, 1);
    }

    #[tokio::test]
    async fn get_unknown_is_not_found() {
        let service = movies();
        let result = service.get(EntityId::new(999)).await;
        assert_eq!(result, Err(DomainError::not_found("movie", EntityId::new(999))));
    }
}

mod list {
    use super::*;

    async fn seeded() -> ResourceService<Movie> {
        let service = movies();
        for (title, director, year, genre) in [
            ("Tenet", "Nolan", 2000, "Sci-Fi"),
            ("Heat", "Mann", 1990, "Crime"),
            ("Memento", "Nolan", 2000, "Thriller"),
            ("Arrival", "Villeneuve", 2016, "Sci-Fi"),
        ] {
            service
                .create(CreateMovie::new(title, director, year, genre))
                .await
                .unwrap();
        }
        service
    }

    fn titles(items: &[Movie]) -> Vec<&str> {
        items.iter().map(|m| m.title.as_str()).collect()
    }

    #[tokio::test]
    async fn sort_by_year_take_one() {
        let service = movies();
        service
            .create(CreateMovie::new("Newer", "A", 2000, ""))
            .await
            .unwrap();
        service
            .create(CreateMovie::new("Older", "B", 1990, ""))
            .await
            .unwrap();

        let query: ResourceQuery<Movie> = ResourceQuery::<Movie>::new()
            .sort(MovieSort::Year)
            .paging(Paging::new(Some(0), Some(1)));
        let page = service.list(&query).await;

        assert_eq!(page.total, 2);
        assert_eq!(page.take, 1);
        assert_eq!(titles(&page.items), vec!["Older"]);
    }

    #[tokio::test]
    async fn default_sort_is_title() {
        let service = seeded().await;
        let page = service.list(&ResourceQuery::<Movie>::new()).await;
        assert_eq!(titles(&page.items), vec!["Arrival", "Heat", "Memento", "Tenet"]);
        assert_eq!(page.skip, 0);
        assert_eq!(page.take, 10);
    }

    #[tokio::test]
    async fn director_sort_ties_on_title() {
        let service = seeded().await;
        let query = ResourceQuery::<Movie>::new().sort(MovieSort::parse(Some("director")));
        let page = service.list(&query).await;
        assert_eq!(titles(&page.items), vec!["Heat", "Memento", "Tenet", "Arrival"]);
    }

    #[tokio::test]
    async fn filters_apply_before_total() {
        let service = seeded().await;
        let query = ResourceQuery::<Movie>::new()
            .filter(MovieFilter::new(Some(" nol "), None, Some(2000)))
            .paging(Paging::new(Some(1), Some(5)));
        let page = service.list(&query).await;

        assert_eq!(page.total, 2);
        assert_eq!(titles(&page.items), vec!["Tenet"]);
    }

    #[tokio::test]
    async fn genre_filter_is_case_insensitive() {
        let service = seeded().await;
        let query = ResourceQuery::<Movie>::new().filter(MovieFilter::new(None, Some("SCI"), None));
        let page = service.list(&query).await;
        assert_eq!(titles(&page.items), vec!["Arrival", "Tenet"]);
    }

    #[tokio::test]
    async fn out_of_range_paging_is_permissive() {
        let service = seeded().await;
        let query = ResourceQuery::<Movie>::new().paging(Paging::new(Some(-3), Some(500)));
        let page = service.list(&query).await;
        assert_eq!(page.skip, 0);
        assert_eq!(page.take, 10);
        assert_eq!(page.items.len(), 4);

        let past_end = ResourceQuery::<Movie>::new().paging(Paging::new(Some(99), None));
        let page = service.list(&past_end).await;
        assert_eq!(page.total, 4);
        assert!(page.items.is_empty());
    }

    #[tokio::test]
    async fn era_selection() {
        let service = seeded().await;
        let classic = service.by_era("Classic").await;
        assert_eq!(titles(&classic), vec!["Heat"]);

        let modern = service.by_era("modern").await;
        assert_eq!(titles(&modern), vec!["Tenet", "Memento", "Arrival"]);

        assert!(service.by_era("silent").await.is_empty());
    }

    #[tokio::test]
    async fn todos_filter_by_done_state() {
        let service: ResourceService<Todo> = ResourceService::in_memory();
        for title in ["b", "a", "c"] {
            service
                .create(CreateTodo { title: title.into() })
                .await
                .unwrap();
        }
        service
            .update(
                EntityId::new(2),
                UpdateTodo {
                    title: "a".into(),
                    is_done: true,
                },
            )
            .await
            .unwrap();

        let open = ResourceQuery::<Todo>::new().filter(TodoFilter::new(None, Some(false)));
        let page = service.list(&open).await;
        let ids: Vec<_> = page.items.iter().map(|t| t.id.value()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn products_sort_by_price() {
        let service: ResourceService<Product> = ResourceService::in_memory();
        for (name, price) in [("b", 3.0), ("a", 1.0), ("c", 2.0)] {
            service
                .create(CreateProduct {
                    name: name.into(),
                    price,
                })
                .await
                .unwrap();
        }
        let query = ResourceQuery::<Product>::new().sort(ProductSort::Price);
        let names: Vec<_> = service
            .list(&query)
            .await
            .items
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["a", "c", "b"]);
    }
}
