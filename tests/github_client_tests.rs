//! Tests for the GitHub client against a local HTTP server.

mod common;

use common::{PAGE_ONE, TestServer};
use repo_sweep::prelude::*;

fn client_for(server: &TestServer) -> GitHubClient {
    let config = Config::new("secret", "octocat")
        .api_url(server.base_url.clone())
        .timeout_secs(5);
    GitHubClient::new(&config).unwrap()
}

#[test]
fn test_list_page_request() {
    let server = TestServer::start(vec![(200, PAGE_ONE)]);
    let client = client_for(&server);

    let repos = client.list_user_repos_page("octocat", 3).unwrap();
    let requests = server.finish();

    assert_eq!(repos.len(), 2);
    assert_eq!(repos[0].full_name, "octocat/spoon-knife");
    assert_eq!(repos[1].description, "");

    let request = &requests[0];
    assert_eq!(request.request_line, "GET /users/octocat/repos?page=3 HTTP/1.1");
    assert_eq!(request.header("authorization"), Some("token secret"));
    assert_eq!(request.header("accept"), Some("application/vnd.github+json"));
    assert_eq!(request.header("user-agent"), Some("octocat"));
    assert_eq!(request.header("x-github-api-version"), Some("2022-11-28"));
}

#[test]
fn test_delete_request() {
    let server = TestServer::start(vec![(204, "")]);
    let client = client_for(&server);

    client.delete_repo("octocat/spoon-knife").unwrap();
    let requests = server.finish();

    let request = &requests[0];
    assert_eq!(request.request_line, "DELETE /repos/octocat/spoon-knife HTTP/1.1");
    assert_eq!(request.header("authorization"), Some("token secret"));
    assert_eq!(request.header("user-agent"), Some("octocat"));
}

#[test]
fn test_error_status_is_github_error() {
    let server = TestServer::start(vec![(404, r#"{"message": "Not Found"}"#)]);
    let client = client_for(&server);

    let err = client.delete_repo("octocat/missing").unwrap_err();
    server.finish();

    match err {
        SweepError::GitHub { status, message } => {
            assert_eq!(status, 404);
            assert!(message.contains("Not Found"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_undecodable_page_is_json_error() {
    let server = TestServer::start(vec![(200, "<html>rate limited</html>")]);
    let client = client_for(&server);

    let result = client.list_user_repos_page("octocat", 1);
    server.finish();

    assert!(matches!(result, Err(SweepError::Json(_))));
}

#[test]
fn test_fetch_walks_pages_over_http() {
    let server = TestServer::start(vec![(200, PAGE_ONE), (200, "[]")]);
    let client = client_for(&server);

    let repos = fetch_repositories(&client, "octocat", RepoFilter::ForksOnly).unwrap();
    let requests = server.finish();

    assert_eq!(repos.len(), 1);
    assert_eq!(repos[0].name, "spoon-knife");
    let lines: Vec<_> = requests.iter().map(|r| r.request_line.as_str()).collect();
    assert_eq!(
        lines,
        [
            "GET /users/octocat/repos?page=1 HTTP/1.1",
            "GET /users/octocat/repos?page=2 HTTP/1.1",
        ]
    );
}

#[test]
fn test_fetch_fails_on_server_error() {
    let server = TestServer::start(vec![(200, PAGE_ONE), (500, "boom")]);
    let client = client_for(&server);

    let result = fetch_repositories(&client, "octocat", RepoFilter::All);
    server.finish();

    assert!(matches!(result, Err(SweepError::GitHub { status: 500, .. })));
}
