use common::Paging;
use criterion::{Criterion, criterion_group, criterion_main};
use domain::service::ResourceQuery;
use domain::{CreateMovie, Movie, MovieFilter, MovieSort, ResourceService};

fn populate(n: usize) -> ResourceService<Movie> {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let service = ResourceService::in_memory();
    rt.block_on(async {
        for i in 0..n {
            let director = if i % 3 == 0 { "Nolan" } else { "Villeneuve" };
            service
                .create(CreateMovie::new(
                    format!("Movie {i:05}"),
                    director,
                    1900 + (i % 120) as i32,
                    "Drama",
                ))
                .await
                .unwrap();
        }
    });
    service
}

fn bench_list_default(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let service = populate(1_000);
    let query = ResourceQuery::<Movie>::new();

    c.bench_function("query/list_1000_default", |b| {
        b.iter(|| rt.block_on(service.list(&query)));
    });
}

fn bench_list_filtered_sorted(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let service = populate(10_000);
    let query = ResourceQuery::<Movie>::new()
        .filter(MovieFilter::new(Some("nolan"), None, None))
        .sort(MovieSort::Year)
        .paging(Paging::new(Some(100), Some(50)));

    c.bench_function("query/list_10000_filter_sort_page", |b| {
        b.iter(|| rt.block_on(service.list(&query)));
    });
}

criterion_group!(benches, bench_list_default, bench_list_filtered_sorted);
criterion_main!(benches);
