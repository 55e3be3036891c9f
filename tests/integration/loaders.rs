//! Page loaders over real HTTP against the stub backend

use std::time::Duration;

use library_portal::{
    backend::HttpLibraryApi,
    config::BackendConfig,
    models::{BorrowQuery, Order, Status},
    pages::{member_detail, new_borrowing, MemberDetailPage},
    AppError,
};

use crate::stub_backend::{book, borrowed, member, Endpoint, StubBackend};

fn client(base_url: &str) -> HttpLibraryApi {
    HttpLibraryApi::new(&BackendConfig {
        base_url: base_url.to_string(),
        timeout_secs: 5,
    })
    .unwrap()
}

#[tokio::test]
async fn test_member_detail_for_member_42() {
    let stub = StubBackend::new()
        .with_member(member(42))
        .with_borrowings(42, Vec::new())
        .spawn()
        .await;
    let api = client(&stub.base_url);

    let page = member_detail::load(&api, 42, &BorrowQuery::default()).await.unwrap();

    assert_eq!(
        page,
        MemberDetailPage {
            member: member(42),
            borrowings: Vec::new(),
        }
    );
}

#[tokio::test]
async fn test_member_detail_requests() {
    let stub = StubBackend::new()
        .with_member(member(7))
        .with_borrowings(7, vec![borrowed(1, 7, false), borrowed(2, 7, true)])
        .spawn()
        .await;
    let api = client(&stub.base_url);

    let page = member_detail::load(&api, 7, &BorrowQuery::default()).await.unwrap();

    assert_eq!(page.member.id, 7);
    assert_eq!(page.borrowings.len(), 2);
    assert!(page.borrowings[1].is_returned());

    let mut requests = stub.requests();
    requests.sort();
    assert_eq!(requests, vec!["GET /api/borrows/7", "GET /api/members/7"]);
}

#[tokio::test]
async fn test_member_detail_forwards_history_filter() {
    let stub = StubBackend::new().with_member(member(7)).spawn().await;
    let api = client(&stub.base_url);
    let query = BorrowQuery {
        status: Some(Status::Borrowed),
        order: Some(Order::Desc),
        ..Default::default()
    };

    member_detail::load(&api, 7, &query).await.unwrap();

    assert!(stub
        .requests()
        .contains(&"GET /api/borrows/7?order=desc&status=borrowed".to_string()));
}

#[tokio::test]
async fn test_member_detail_requests_are_concurrent() {
    let stub = StubBackend::new()
        .with_member(member(3))
        .rendezvous()
        .spawn()
        .await;
    let api = client(&stub.base_url);

    let page = tokio::time::timeout(
        Duration::from_secs(3),
        member_detail::load(&api, 3, &BorrowQuery::default()),
    )
    .await
    .expect("member and history requests were not in flight together")
    .unwrap();

    assert_eq!(page.member.id, 3);
}

#[tokio::test]
async fn test_member_detail_history_failure() {
    let stub = StubBackend::new()
        .with_member(member(5))
        .failing(Endpoint::Borrows)
        .spawn()
        .await;
    let api = client(&stub.base_url);

    let result = member_detail::load(&api, 5, &BorrowQuery::default()).await;

    match result {
        Err(AppError::Backend { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "Internal server error");
        }
        other => panic!("expected backend error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_member_detail_unknown_member() {
    let stub = StubBackend::new().spawn().await;
    let api = client(&stub.base_url);

    let result = member_detail::load(&api, 404, &BorrowQuery::default()).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_new_borrowing_asks_for_available_books() {
    let stub = StubBackend::new()
        .with_member(member(9))
        .with_books(vec![book(1, Status::Available), book(2, Status::Available)])
        .spawn()
        .await;
    let api = client(&stub.base_url);

    let page = new_borrowing::load(&api, 9).await.unwrap();

    assert_eq!(page.member, member(9));
    assert_eq!(page.books.len(), 2);
    assert!(stub
        .requests()
        .contains(&"GET /api/books/?status=available".to_string()));
}

#[tokio::test]
async fn test_new_borrowing_keeps_only_available_books() {
    let stub = StubBackend::new()
        .with_member(member(9))
        .with_books(vec![
            book(1, Status::Borrowed),
            book(2, Status::Available),
            book(3, Status::Borrowed),
        ])
        .spawn()
        .await;
    let api = client(&stub.base_url);

    let page = new_borrowing::load(&api, 9).await.unwrap();

    let ids: Vec<i32> = page.books.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![2]);
}

#[tokio::test]
async fn test_new_borrowing_with_empty_catalog() {
    let stub = StubBackend::new().with_member(member(9)).spawn().await;
    let api = client(&stub.base_url);

    let page = new_borrowing::load(&api, 9).await.unwrap();

    assert!(page.books.is_empty());
}

#[tokio::test]
async fn test_new_borrowing_requests_are_concurrent() {
    let stub = StubBackend::new()
        .with_member(member(9))
        .with_books(vec![book(1, Status::Available)])
        .rendezvous()
        .spawn()
        .await;
    let api = client(&stub.base_url);

    let page = tokio::time::timeout(Duration::from_secs(3), new_borrowing::load(&api, 9))
        .await
        .expect("member and catalog requests were not in flight together")
        .unwrap();

    assert_eq!(page.books.len(), 1);
}

#[tokio::test]
async fn test_new_borrowing_malformed_catalog() {
    let stub = StubBackend::new()
        .with_member(member(9))
        .malformed(Endpoint::Books)
        .spawn()
        .await;
    let api = client(&stub.base_url);

    let result = new_borrowing::load(&api, 9).await;

    assert!(matches!(result, Err(AppError::Decode(_))));
}

#[tokio::test]
async fn test_unreachable_backend() {
    // Grab a free port, then close it so nothing is listening there
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let api = client(&format!("http://{}", addr));

    let result = new_borrowing::load(&api, 1).await;

    assert!(matches!(result, Err(AppError::Http(_))));
}
